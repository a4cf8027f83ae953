//! The browser-driving seam: the three menu operations the navigation core
//! invokes, and a recording mock for unit tests.
//!
//! Implementations wrap a real browser session (accordion side menu,
//! settings dropdown, in-page links). The core calls these three operations
//! and nothing else on the browser layer; waits, timeouts, and element
//! lookup all belong to the implementation.

use crate::path::SIDE_MENU_LEVELS;
use crate::result::{NavegarError, NavegarResult};

/// Abstract menu-driving seam.
///
/// # Implementations
///
/// - a production driver wrapping the browser session under test
/// - [`MockMenuDriver`] for unit testing
pub trait MenuDriver {
    /// Open the settings panel and select `item`.
    fn select_settings_item(&mut self, item: &str) -> NavegarResult<()>;

    /// Select up to three nested side-menu levels, outermost first.
    ///
    /// A `None` slot means that level does not exist for this path and must
    /// be skipped, not clicked.
    fn select_menu_levels(&mut self, levels: [Option<&str>; SIDE_MENU_LEVELS])
        -> NavegarResult<()>;

    /// Click the element whose exact visible text is `text`.
    fn click_by_text(&mut self, text: &str) -> NavegarResult<()>;
}

/// One recorded driver invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverCall {
    /// Settings-panel item selection.
    SettingsItem(String),
    /// Side-menu selection with the slots exactly as dispatched.
    MenuLevels([Option<String>; SIDE_MENU_LEVELS]),
    /// Exact-text click.
    ClickByText(String),
}

/// Mock driver for unit testing.
///
/// Records every invocation in order and can inject a failure at a given
/// call index to exercise error propagation.
#[derive(Debug, Default)]
pub struct MockMenuDriver {
    /// Call history for verification.
    pub call_history: Vec<DriverCall>,
    /// When set, the call at this 0-based index fails with this message.
    pub fail_at: Option<(usize, String)>,
}

impl MockMenuDriver {
    /// Create a new mock driver.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose `index`-th call fails with `message`.
    #[must_use]
    pub fn failing_at(index: usize, message: impl Into<String>) -> Self {
        Self {
            call_history: Vec::new(),
            fail_at: Some((index, message.into())),
        }
    }

    /// Number of recorded calls.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.call_history.len()
    }

    fn record(&mut self, call: DriverCall) -> NavegarResult<()> {
        let index = self.call_history.len();
        self.call_history.push(call);
        match &self.fail_at {
            Some((at, message)) if *at == index => Err(NavegarError::Driver {
                message: message.clone(),
            }),
            _ => Ok(()),
        }
    }
}

impl MenuDriver for MockMenuDriver {
    fn select_settings_item(&mut self, item: &str) -> NavegarResult<()> {
        self.record(DriverCall::SettingsItem(item.to_string()))
    }

    fn select_menu_levels(
        &mut self,
        levels: [Option<&str>; SIDE_MENU_LEVELS],
    ) -> NavegarResult<()> {
        self.record(DriverCall::MenuLevels(
            levels.map(|slot| slot.map(ToString::to_string)),
        ))
    }

    fn click_by_text(&mut self, text: &str) -> NavegarResult<()> {
        self.record(DriverCall::ClickByText(text.to_string()))
    }
}
