//! Label localization for menu dispatch.
//!
//! Navigation paths stay canonical (source locale) everywhere; translation
//! happens only at the moment labels are handed to the UI driver, and only
//! for the dispatch slots the active [`TranslationPolicy`] covers. A label
//! without a usable entry is an error, never a silent fallback to the
//! canonical text.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::menu::MenuTree;
use crate::result::{NavegarError, NavegarResult};

/// Which dispatch slots are passed through the translator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TranslationPolicy {
    /// Localize the slots the classifier marks as localized: side-menu
    /// levels of depth-3 and depth-4 paths. Depth-2 side-menu dispatch and
    /// tab clicks stay canonical.
    #[default]
    ByDepth,
    /// Localize every side-menu slot and the tab label. Settings items stay
    /// canonical.
    Always,
    /// Never localize; every slot is dispatched with its canonical label.
    Never,
}

impl TranslationPolicy {
    /// Whether side-menu slots are translated, given the classifier's
    /// localized marker for the path.
    #[must_use]
    pub fn localizes_side_menu(self, classified: bool) -> bool {
        match self {
            Self::ByDepth => classified,
            Self::Always => true,
            Self::Never => false,
        }
    }

    /// Whether the depth-4 tab label is translated.
    #[must_use]
    pub fn localizes_tab(self) -> bool {
        matches!(self, Self::Always)
    }
}

/// Flat lookup from canonical label to localized label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelTranslator {
    entries: BTreeMap<String, String>,
}

impl LabelTranslator {
    /// Create an empty translator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a translator from `(canonical, localized)` pairs.
    #[must_use]
    pub fn from_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Build a source-locale table mapping every label in `tree` to itself.
    ///
    /// This is the usual translator for a UI rendered in the default locale,
    /// and it satisfies the coverage invariant by construction.
    #[must_use]
    pub fn identity_for(tree: &MenuTree) -> Self {
        Self {
            entries: tree
                .labels()
                .into_iter()
                .map(|label| (label.to_string(), label.to_string()))
                .collect(),
        }
    }

    /// Parse a translator table from YAML.
    pub fn from_yaml(source: &str) -> NavegarResult<Self> {
        Ok(serde_yaml_ng::from_str(source)?)
    }

    /// Parse a translator table from JSON.
    pub fn from_json(source: &str) -> NavegarResult<Self> {
        Ok(serde_json::from_str(source)?)
    }

    /// Insert or replace one entry.
    pub fn insert(&mut self, canonical: impl Into<String>, localized: impl Into<String>) {
        let _ = self.entries.insert(canonical.into(), localized.into());
    }

    /// Whether `label` has a usable (non-empty) entry.
    #[must_use]
    pub fn contains(&self, label: &str) -> bool {
        self.entries.get(label).is_some_and(|entry| !entry.is_empty())
    }

    /// Localize one label.
    ///
    /// Missing entries and empty entries both fail: an empty localized
    /// label cannot be matched against anything on screen.
    pub fn translate(&self, label: &str) -> NavegarResult<&str> {
        match self.entries.get(label) {
            Some(entry) if !entry.is_empty() => Ok(entry),
            _ => Err(NavegarError::TranslationMissing {
                label: label.to_string(),
            }),
        }
    }

    /// Number of entries, including unusable empty ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
