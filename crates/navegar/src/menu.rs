//! Declarative menu structure: the nested description of every known menu,
//! sub-menu, and leaf item.
//!
//! The serialized form is a nested mapping in which every non-reserved key
//! is a menu label and the single reserved key [`ITEMS_KEY`] holds the
//! ordered leaf-item labels of that node. Trees are pure data; behavior
//! lives in the classifier, the engine, and the action registry.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::locate::normalize;
use crate::path::NavPath;
use crate::result::{NavegarError, NavegarResult};

/// Reserved key marking the ordered leaf-item sequence of a node.
pub const ITEMS_KEY: &str = "__items__";

/// One node of the menu description.
///
/// A node carries an ordered sequence of leaf items, a labeled set of
/// sub-menus, or both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    /// Ordered leaf-item labels directly under this node.
    #[serde(rename = "__items__", default, skip_serializing_if = "Vec::is_empty")]
    items: Vec<String>,
    /// Sub-menus by label.
    #[serde(flatten)]
    children: BTreeMap<String, MenuNode>,
}

impl MenuNode {
    /// Create an empty node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one leaf item.
    #[must_use]
    pub fn with_item(mut self, label: impl Into<String>) -> Self {
        self.items.push(label.into());
        self
    }

    /// Append leaf items in order.
    #[must_use]
    pub fn with_items<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items.extend(labels.into_iter().map(Into::into));
        self
    }

    /// Attach a sub-menu under `label`.
    #[must_use]
    pub fn with_child(mut self, label: impl Into<String>, child: MenuNode) -> Self {
        let _ = self.children.insert(label.into(), child);
        self
    }

    /// Leaf items of this node, in order.
    #[must_use]
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Sub-menu labeled `label`, if present.
    #[must_use]
    pub fn child(&self, label: &str) -> Option<&MenuNode> {
        self.children.get(label)
    }

    /// Sub-menus of this node, by label.
    pub fn children(&self) -> impl Iterator<Item = (&str, &MenuNode)> {
        self.children.iter().map(|(label, node)| (label.as_str(), node))
    }

    fn collect_leaf_paths(&self, trail: &mut Vec<String>, out: &mut Vec<NavPath>) {
        for item in &self.items {
            trail.push(item.clone());
            out.push(NavPath::new(trail.iter().cloned()));
            trail.pop();
        }
        for (label, child) in &self.children {
            trail.push(label.clone());
            child.collect_leaf_paths(trail, out);
            trail.pop();
        }
    }

    fn collect_labels<'a>(&'a self, out: &mut BTreeSet<&'a str>) {
        for item in &self.items {
            let _ = out.insert(item.as_str());
        }
        for (label, child) in &self.children {
            let _ = out.insert(label.as_str());
            child.collect_labels(out);
        }
    }

    fn validate_siblings(&self, trail: &mut Vec<String>) -> NavegarResult<()> {
        let mut seen: BTreeMap<String, &str> = BTreeMap::new();
        let siblings = self
            .items
            .iter()
            .chain(self.children.keys())
            .map(String::as_str);
        for label in siblings {
            let key = normalize(label, false);
            if let Some(previous) = seen.insert(key, label) {
                let location = if trail.is_empty() {
                    "the menu root".to_string()
                } else {
                    trail.join("/")
                };
                return Err(NavegarError::InvalidMenu {
                    message: format!(
                        "labels {previous:?} and {label:?} under {location} normalize to the same name"
                    ),
                });
            }
        }
        for (label, child) in &self.children {
            trail.push(label.clone());
            child.validate_siblings(trail)?;
            trail.pop();
        }
        Ok(())
    }
}

/// The full declarative menu description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuTree {
    root: MenuNode,
}

impl MenuTree {
    /// Create a tree from its root node.
    #[must_use]
    pub fn new(root: MenuNode) -> Self {
        Self { root }
    }

    /// Parse a tree from its YAML description.
    pub fn from_yaml(source: &str) -> NavegarResult<Self> {
        Ok(serde_yaml_ng::from_str(source)?)
    }

    /// Parse a tree from its JSON description.
    pub fn from_json(source: &str) -> NavegarResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> &MenuNode {
        &self.root
    }

    /// Check that normalized labels are unique within every sibling set.
    ///
    /// Sub-menu labels and leaf items of one node are checked jointly, since
    /// both feed the same name derivations.
    pub fn validate(&self) -> NavegarResult<()> {
        self.root.validate_siblings(&mut Vec::new())
    }

    /// Enumerate every leaf path, depth first.
    ///
    /// A node's own items come before its sub-menus; sub-menus are visited
    /// in label order. The order is deterministic for a given tree.
    #[must_use]
    pub fn leaf_paths(&self) -> Vec<NavPath> {
        let mut out = Vec::new();
        self.root.collect_leaf_paths(&mut Vec::new(), &mut out);
        out
    }

    /// Number of leaf items in the tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.leaf_paths().len()
    }

    /// Every distinct label reachable from the root.
    #[must_use]
    pub fn labels(&self) -> BTreeSet<&str> {
        let mut out = BTreeSet::new();
        self.root.collect_labels(&mut out);
        out
    }

    /// The dashboard menu structure shipped as the default description.
    ///
    /// Admin/System has no Volumes sub-menu here: its leaf items would
    /// derive the same generated action names as Project/Compute/Volumes,
    /// which the action registry rejects.
    #[must_use]
    pub fn dashboard() -> Self {
        let compute = MenuNode::new()
            .with_child(
                "Access & Security",
                MenuNode::new().with_items([
                    "Security Groups",
                    "Key Pairs",
                    "Floating IPs",
                    "API Access",
                ]),
            )
            .with_child(
                "Volumes",
                MenuNode::new().with_items(["Volumes", "Volume Snapshots"]),
            )
            .with_items(["Overview", "Instances", "Images"]);

        let project = MenuNode::new()
            .with_child("Compute", compute)
            .with_child(
                "Network",
                MenuNode::new().with_items(["Network Topology", "Networks", "Routers"]),
            )
            .with_child("Object Store", MenuNode::new().with_item("Containers"))
            .with_child(
                "Data Processing",
                MenuNode::new().with_items([
                    "Clusters",
                    "Cluster Templates",
                    "Node Group Templates",
                    "Job Executions",
                    "Jobs",
                    "Job Binaries",
                    "Data Sources",
                    "Image Registry",
                    "Plugins",
                ]),
            )
            .with_child("Orchestration", MenuNode::new().with_item("Stacks"));

        let system = MenuNode::new()
            .with_child(
                "Resource Usage",
                MenuNode::new().with_items(["Daily Report", "Stats"]),
            )
            .with_child(
                "System info",
                MenuNode::new().with_items([
                    "Services",
                    "Compute Services",
                    "Block Storage Services",
                    "Network Agents",
                    "Default Quotas",
                ]),
            )
            .with_items([
                "Overview",
                "Hypervisors",
                "Host Aggregates",
                "Instances",
                "Flavors",
                "Images",
                "Networks",
                "Routers",
            ]);

        Self::new(
            MenuNode::new()
                .with_child("Project", project)
                .with_child("Admin", MenuNode::new().with_child("System", system))
                .with_child(
                    "Settings",
                    MenuNode::new().with_items(["User Settings", "Change Password"]),
                )
                .with_child(
                    "Identity",
                    MenuNode::new().with_items(["Projects", "Users", "Groups", "Domains", "Roles"]),
                ),
        )
    }
}
