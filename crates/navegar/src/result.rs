//! Result and error types for Navegar.

use thiserror::Error;

use crate::classify::StrategyKind;

/// Result type for Navegar operations
pub type NavegarResult<T> = Result<T, NavegarError>;

/// Errors that can occur in Navegar
#[derive(Debug, Error)]
pub enum NavegarError {
    /// Navigation path depth outside the supported range
    #[error("Navigation path length should be between {min} and {max}, but it is {len}")]
    InvalidPath {
        /// Actual path length
        len: usize,
        /// Minimum supported depth
        min: usize,
        /// Maximum supported depth
        max: usize,
    },

    /// A label required for localized dispatch has no usable translation
    #[error("No usable translation for menu label {label:?}")]
    TranslationMissing {
        /// Canonical label that missed the lookup
        label: String,
    },

    /// An external UI action did not complete
    #[error("Navigation via {strategy} failed for path {path}: {message}")]
    NavigationFailed {
        /// Path being navigated when the action failed
        path: String,
        /// Strategy whose action failed
        strategy: StrategyKind,
        /// Error message from the driving layer
        message: String,
    },

    /// Derived module or class has no registered page constructor
    #[error("No page object registered for path {path}: module {module_path:?}, class {class_name:?}")]
    ResolutionFailed {
        /// Path the identifiers were derived from
        path: String,
        /// Derived dotted module path
        module_path: String,
        /// Derived or overridden class name
        class_name: String,
    },

    /// Two leaf paths derived the same generated action name
    #[error("Generated action name {name:?} derived from both {first} and {second}")]
    DuplicateAction {
        /// Colliding action name
        name: String,
        /// Path already bound to the name
        first: String,
        /// Path that collided with it
        second: String,
    },

    /// Lookup of a generated action by name missed
    #[error("No generated action named {name:?}")]
    UnknownAction {
        /// Requested action name
        name: String,
    },

    /// The menu description violates a structural invariant
    #[error("Invalid menu description: {message}")]
    InvalidMenu {
        /// What was violated, and where
        message: String,
    },

    /// A UI action failed inside the driving layer
    #[error("Driver action failed: {message}")]
    Driver {
        /// Error message
        message: String,
    },

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
