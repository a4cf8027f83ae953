//! Generated navigation actions: one per menu leaf, materialized once at
//! startup.
//!
//! The registry is the explicit replacement for attaching `go_to_*` methods
//! to a shared namespace at import time: it is built once from a menu tree,
//! read-only afterwards, and passed by reference to whatever harness needs
//! navigation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::driver::MenuDriver;
use crate::engine::NavigationEngine;
use crate::locate::normalize;
use crate::menu::MenuTree;
use crate::page::PageHandle;
use crate::path::NavPath;
use crate::result::{NavegarError, NavegarResult};

/// Prefix of every generated action name.
pub const ACTION_PREFIX: &str = "go_to_";

/// Suffix of every generated action name.
pub const ACTION_SUFFIX: &str = "page";

const ACTION_DELIMITER: &str = "_";

/// Derive the generated action name for a leaf path.
///
/// `go_to_{submenu}_{item}page`, where `submenu` and `item` are the final
/// two labels of the path, normalized (lowercased, spaces removed, `&`
/// replaced with `and`). The name depends on nothing but those two labels.
#[must_use]
pub fn action_name(path: &NavPath) -> String {
    let labels = path.labels();
    let submenu = labels
        .len()
        .checked_sub(2)
        .and_then(|i| labels.get(i))
        .map_or("", String::as_str);
    let item = path.leaf().unwrap_or("");
    normalize(
        &format!("{ACTION_PREFIX}{submenu}{ACTION_DELIMITER}{item}{ACTION_SUFFIX}"),
        false,
    )
}

/// One materialized navigation action, bound to a fixed leaf path.
///
/// Actions are immutable after registry construction and live for the
/// registry's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedAction {
    name: String,
    path: NavPath,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page_class: Option<String>,
}

impl GeneratedAction {
    /// Create an action for `path` with an optional page-class override.
    #[must_use]
    pub fn new(path: NavPath, page_class: Option<String>) -> Self {
        Self {
            name: action_name(&path),
            path,
            page_class,
        }
    }

    /// The generated name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fixed path this action navigates to.
    #[must_use]
    pub fn path(&self) -> &NavPath {
        &self.path
    }

    /// The page-class override, if any.
    #[must_use]
    pub fn page_class(&self) -> Option<&str> {
        self.page_class.as_deref()
    }

    /// Run this action: navigate `driver` to the captured path.
    pub fn run(
        &self,
        engine: &NavigationEngine,
        driver: &mut dyn MenuDriver,
    ) -> NavegarResult<PageHandle> {
        engine.navigate_as(driver, &self.path, self.page_class.as_deref())
    }
}

/// Read-only registry of generated actions, built once from a menu tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRegistry {
    actions: BTreeMap<String, GeneratedAction>,
}

impl ActionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enumerate every leaf of `tree` and materialize one action per leaf.
    ///
    /// The tree is validated first. Two leaves deriving the same action name
    /// abort construction: a collision is a defect in the menu description,
    /// not a condition to recover from at call time.
    pub fn from_tree(tree: &MenuTree) -> NavegarResult<Self> {
        tree.validate()?;
        let mut registry = Self::new();
        for path in tree.leaf_paths() {
            registry.register(GeneratedAction::new(path, None))?;
        }
        debug!(actions = registry.len(), "action registry built");
        Ok(registry)
    }

    /// Add one action, failing on a name collision.
    ///
    /// Registration belongs to startup, alongside [`Self::from_tree`]; it
    /// exists so callers can bind nonstandard page classes to extra leaves.
    pub fn register(&mut self, action: GeneratedAction) -> NavegarResult<()> {
        if let Some(existing) = self.actions.get(action.name()) {
            return Err(NavegarError::DuplicateAction {
                name: action.name().to_string(),
                first: existing.path().to_string(),
                second: action.path().to_string(),
            });
        }
        let _ = self.actions.insert(action.name().to_string(), action);
        Ok(())
    }

    /// Look up an action by generated name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&GeneratedAction> {
        self.actions.get(name)
    }

    /// All generated names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.actions.keys().map(String::as_str).collect()
    }

    /// Iterate over the actions in name order.
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedAction> {
        self.actions.values()
    }

    /// Number of generated actions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether the registry holds no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::menu::MenuNode;

    mod naming_tests {
        use super::*;

        #[test]
        fn test_name_uses_final_two_labels() {
            assert_eq!(
                action_name(&NavPath::from(["Project", "Compute", "Instances"])),
                "go_to_compute_instancespage"
            );
            assert_eq!(
                action_name(&NavPath::from(["Settings", "Change Password"])),
                "go_to_settings_changepasswordpage"
            );
            assert_eq!(
                action_name(&NavPath::from([
                    "Admin",
                    "System",
                    "Resource Usage",
                    "Stats"
                ])),
                "go_to_resourceusage_statspage"
            );
        }

        #[test]
        fn test_name_normalizes_spaces_and_ampersand() {
            assert_eq!(
                action_name(&NavPath::from([
                    "Project",
                    "Compute",
                    "Access & Security",
                    "Key Pairs"
                ])),
                "go_to_accessandsecurity_keypairspage"
            );
        }

        mod property_tests {
            use super::*;
            use proptest::prelude::*;

            fn label() -> impl proptest::strategy::Strategy<Value = String> {
                "[A-Za-z][A-Za-z &]{0,11}"
            }

            proptest! {
                #[test]
                fn prop_name_ignores_all_but_final_two_labels(
                    prefix in proptest::collection::vec(label(), 0..=2),
                    submenu in label(),
                    item in label()
                ) {
                    let mut labels = prefix;
                    labels.push(submenu.clone());
                    labels.push(item.clone());
                    prop_assert_eq!(
                        action_name(&NavPath::new(labels)),
                        action_name(&NavPath::from([submenu, item]))
                    );
                }
            }
        }
    }

    mod registry_tests {
        use super::*;

        #[test]
        fn test_one_action_per_leaf() {
            let tree = MenuTree::dashboard();
            let registry = ActionRegistry::from_tree(&tree).unwrap();
            assert_eq!(registry.len(), tree.leaf_count());
        }

        #[test]
        fn test_known_generated_names() {
            let registry = ActionRegistry::from_tree(&MenuTree::dashboard()).unwrap();
            for name in [
                "go_to_compute_instancespage",
                "go_to_settings_changepasswordpage",
                "go_to_resourceusage_statspage",
                "go_to_identity_userspage",
                "go_to_accessandsecurity_apiaccesspage",
            ] {
                assert!(registry.get(name).is_some(), "missing {name}");
            }
        }

        #[test]
        fn test_action_captures_full_path() {
            let registry = ActionRegistry::from_tree(&MenuTree::dashboard()).unwrap();
            let action = registry.get("go_to_resourceusage_statspage").unwrap();
            assert_eq!(
                action.path(),
                &NavPath::from(["Admin", "System", "Resource Usage", "Stats"])
            );
            assert_eq!(action.page_class(), None);
        }

        #[test]
        fn test_names_are_sorted() {
            let registry = ActionRegistry::from_tree(&MenuTree::dashboard()).unwrap();
            let names = registry.names();
            let mut sorted = names.clone();
            sorted.sort_unstable();
            assert_eq!(names, sorted);
        }

        #[test]
        fn test_duplicate_name_fails_fast() {
            // Two Volumes sub-menus whose items derive identical names.
            let tree = MenuTree::new(
                MenuNode::new()
                    .with_child(
                        "Project",
                        MenuNode::new().with_child(
                            "Compute",
                            MenuNode::new().with_child(
                                "Volumes",
                                MenuNode::new().with_items(["Volumes", "Volume Snapshots"]),
                            ),
                        ),
                    )
                    .with_child(
                        "Admin",
                        MenuNode::new().with_child(
                            "System",
                            MenuNode::new().with_child(
                                "Volumes",
                                MenuNode::new().with_items(["Volumes", "Volume Types"]),
                            ),
                        ),
                    ),
            );
            let err = ActionRegistry::from_tree(&tree).unwrap_err();
            match err {
                NavegarError::DuplicateAction { name, first, second } => {
                    assert_eq!(name, "go_to_volumes_volumespage");
                    assert_ne!(first, second);
                }
                other => panic!("unexpected error: {other}"),
            }
        }

        #[test]
        fn test_invalid_tree_rejected_before_generation() {
            let tree = MenuTree::new(
                MenuNode::new()
                    .with_child("Project", MenuNode::new().with_items(["Images", "images"])),
            );
            assert!(matches!(
                ActionRegistry::from_tree(&tree).unwrap_err(),
                NavegarError::InvalidMenu { .. }
            ));
        }

        #[test]
        fn test_manual_registration_with_override() {
            let mut registry = ActionRegistry::new();
            registry
                .register(GeneratedAction::new(
                    NavPath::from(["Project", "Compute", "Instances"]),
                    Some("LaunchForm".to_string()),
                ))
                .unwrap();
            let action = registry.get("go_to_compute_instancespage").unwrap();
            assert_eq!(action.page_class(), Some("LaunchForm"));

            let err = registry
                .register(GeneratedAction::new(
                    NavPath::from(["Other", "Compute", "Instances"]),
                    None,
                ))
                .unwrap_err();
            assert!(matches!(err, NavegarError::DuplicateAction { .. }));
        }
    }
}
