//! Page-object location: deriving module and class identifiers from a
//! navigation path.
//!
//! The naming convention is the structural contract with the rest of a test
//! codebase: a screen becomes reachable by registering one constructor under
//! the identifiers derived here and adding its leaf label to the menu
//! description. No further wiring exists.

use serde::{Deserialize, Serialize};

use crate::path::NavPath;

/// Suffix appended to every page module name.
const MODULE_SUFFIX: &str = "page";

/// Separator between module segments.
const MODULE_SEPARATOR: &str = ".";

/// Normalize a menu label for module and action naming.
///
/// Replaces `&` with `and` and lowercases; spaces either become underscores
/// (`preserve_spaces`) or are removed outright.
#[must_use]
pub fn normalize(label: &str, preserve_spaces: bool) -> String {
    let label = label.replace('&', "and").to_lowercase();
    if preserve_spaces {
        label.replace(' ', "_")
    } else {
        label.replace(' ', "")
    }
}

/// Derived identifiers of one page-object artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageLocation {
    /// Dotted module path, e.g. `project.compute.instancespage`.
    pub module_path: String,
    /// Class name inside the module, e.g. `Instancespage`.
    pub class_name: String,
}

impl PageLocation {
    /// Derive the module path and class name for a navigation path.
    ///
    /// Every segment but the last keeps its spaces as underscores; the final
    /// segment drops them entirely and gains the `page` suffix. The class
    /// name is the final module segment with its first character uppercased,
    /// unless `class_override` names a nonstandard page class.
    ///
    /// The derivation is deterministic: the same path always yields the same
    /// identifiers.
    #[must_use]
    pub fn locate(path: &NavPath, class_override: Option<&str>) -> Self {
        let labels = path.labels();
        let mut segments = Vec::with_capacity(labels.len());
        if let Some((last, rest)) = labels.split_last() {
            for label in rest {
                segments.push(normalize(label, true));
            }
            let mut leaf = normalize(last, false);
            leaf.push_str(MODULE_SUFFIX);
            segments.push(leaf);
        }
        let class_name = class_override.map_or_else(
            || capitalize(segments.last().map_or("", String::as_str)),
            ToString::to_string,
        );
        Self {
            module_path: segments.join(MODULE_SEPARATOR),
            class_name,
        }
    }
}

/// Uppercase the first character only; the remainder stays untouched.
fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    mod normalize_tests {
        use super::*;

        #[test]
        fn test_lowercases_and_replaces_ampersand() {
            assert_eq!(normalize("Access & Security", true), "access_and_security");
            assert_eq!(normalize("Access & Security", false), "accessandsecurity");
        }

        #[test]
        fn test_single_word() {
            assert_eq!(normalize("Instances", false), "instances");
            assert_eq!(normalize("Instances", true), "instances");
        }

        #[test]
        fn test_spaces_only_differ_by_mode() {
            assert_eq!(normalize("Resource Usage", true), "resource_usage");
            assert_eq!(normalize("Resource Usage", false), "resourceusage");
        }
    }

    mod locate_tests {
        use super::*;
        use crate::path::NavPath;

        #[test]
        fn test_three_level_path() {
            let loc = PageLocation::locate(&NavPath::from(["Project", "Compute", "Instances"]), None);
            assert_eq!(loc.module_path, "project.compute.instancespage");
            assert_eq!(loc.class_name, "Instancespage");
        }

        #[test]
        fn test_settings_path() {
            let loc = PageLocation::locate(&NavPath::from(["Settings", "Change Password"]), None);
            assert_eq!(loc.module_path, "settings.changepasswordpage");
            assert_eq!(loc.class_name, "Changepasswordpage");
        }

        #[test]
        fn test_four_level_path_keeps_underscores_in_inner_segments() {
            let loc = PageLocation::locate(
                &NavPath::from(["Admin", "System", "Resource Usage", "Stats"]),
                None,
            );
            assert_eq!(loc.module_path, "admin.system.resource_usage.statspage");
            assert_eq!(loc.class_name, "Statspage");
        }

        #[test]
        fn test_ampersand_segment() {
            let loc = PageLocation::locate(
                &NavPath::from(["Project", "Compute", "Access & Security", "API Access"]),
                None,
            );
            assert_eq!(
                loc.module_path,
                "project.compute.access_and_security.apiaccesspage"
            );
            assert_eq!(loc.class_name, "Apiaccesspage");
        }

        #[test]
        fn test_class_override_keeps_module_path() {
            let loc = PageLocation::locate(
                &NavPath::from(["Project", "Compute", "Instances"]),
                Some("LaunchInstanceForm"),
            );
            assert_eq!(loc.module_path, "project.compute.instancespage");
            assert_eq!(loc.class_name, "LaunchInstanceForm");
        }

        #[test]
        fn test_empty_path() {
            let loc = PageLocation::locate(&NavPath::default(), None);
            assert_eq!(loc.module_path, "");
            assert_eq!(loc.class_name, "");
        }
    }

    mod property_tests {
        use super::*;
        use crate::path::NavPath;
        use proptest::prelude::*;

        fn label() -> impl Strategy<Value = String> {
            "[A-Za-z][A-Za-z &]{0,14}"
        }

        proptest! {
            #[test]
            fn prop_locate_is_deterministic(labels in proptest::collection::vec(label(), 2..=4)) {
                let path = NavPath::new(labels);
                prop_assert_eq!(
                    PageLocation::locate(&path, None),
                    PageLocation::locate(&path, None)
                );
            }

            #[test]
            fn prop_module_path_has_no_spaces_or_uppercase(
                labels in proptest::collection::vec(label(), 2..=4)
            ) {
                let loc = PageLocation::locate(&NavPath::new(labels), None);
                prop_assert!(!loc.module_path.contains(' '));
                prop_assert!(!loc.module_path.contains('&'));
                prop_assert!(!loc.module_path.chars().any(char::is_uppercase));
                prop_assert!(loc.module_path.ends_with("page"));
            }
        }
    }
}
