//! Path classification: which UI affordance a path drives, and in what
//! order.
//!
//! Classification is pure. It inspects only the depth and structural
//! position of a path, never the live UI and never the translator; the
//! engine executes the resulting strategy.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::{NavPath, MAX_DEPTH, MIN_DEPTH, SIDE_MENU_LEVELS};
use crate::result::{NavegarError, NavegarResult};

/// Label of the top-level menu dispatched through the settings panel.
pub const SETTINGS_MENU: &str = "Settings";

/// The UI affordance family a navigation step drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// The settings dropdown panel.
    Settings,
    /// The nested side-menu panel.
    SideMenu,
    /// A tab-style sub-navigation bar inside the page.
    TabMenu,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Settings => "settings menu",
            Self::SideMenu => "side menu",
            Self::TabMenu => "tab menu",
        };
        f.write_str(name)
    }
}

/// Primary dispatch strategy with its driver arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Open the settings panel and select a single item.
    Settings {
        /// Item label to select inside the settings panel.
        item: String,
    },
    /// Select up to three nested side-menu levels.
    SideMenu {
        /// Menu label per level; an empty slot means "skip this level".
        levels: [Option<String>; SIDE_MENU_LEVELS],
        /// Whether populated slots are localized before dispatch.
        localized: bool,
    },
}

impl Strategy {
    /// The affordance family of this strategy.
    #[must_use]
    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::Settings { .. } => StrategyKind::Settings,
            Self::SideMenu { .. } => StrategyKind::SideMenu,
        }
    }
}

/// Outcome of classifying a navigation path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Primary strategy, executed first.
    pub strategy: Strategy,
    /// Exact visible text of a tab to click after the primary strategy.
    pub tab: Option<String>,
}

impl Classification {
    /// Number of UI actions this classification predicts.
    #[must_use]
    pub fn action_count(&self) -> usize {
        1 + usize::from(self.tab.is_some())
    }
}

/// Classify a navigation path by depth and structural position.
///
/// Depth 2 dispatches through the settings panel when the first label is
/// [`SETTINGS_MENU`], and otherwise through the side menu with the middle
/// slot left empty (there is no sub-menu level to drive). Depths 3 and 4
/// dispatch the first three labels through the side menu, localized; depth 4
/// additionally clicks the tab labeled by the final label.
pub fn classify(path: &NavPath) -> NavegarResult<Classification> {
    let len = path.depth();
    if !(MIN_DEPTH..=MAX_DEPTH).contains(&len) {
        return Err(NavegarError::InvalidPath {
            len,
            min: MIN_DEPTH,
            max: MAX_DEPTH,
        });
    }

    let labels = path.labels();
    let strategy = if len == MIN_DEPTH {
        if labels[0] == SETTINGS_MENU {
            Strategy::Settings {
                item: labels[1].clone(),
            }
        } else {
            Strategy::SideMenu {
                levels: [Some(labels[0].clone()), None, Some(labels[1].clone())],
                localized: false,
            }
        }
    } else {
        let mut levels: [Option<String>; SIDE_MENU_LEVELS] = Default::default();
        for (slot, label) in levels.iter_mut().zip(&labels[..SIDE_MENU_LEVELS]) {
            *slot = Some(label.clone());
        }
        Strategy::SideMenu {
            levels,
            localized: true,
        }
    };

    let tab = (len == MAX_DEPTH).then(|| labels[MAX_DEPTH - 1].clone());
    Ok(Classification { strategy, tab })
}
