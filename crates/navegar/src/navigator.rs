//! Caller facade: invoke generated navigation actions by name.

use crate::driver::MenuDriver;
use crate::engine::NavigationEngine;
use crate::menu::MenuTree;
use crate::page::PageHandle;
use crate::path::NavPath;
use crate::registry::ActionRegistry;
use crate::result::{NavegarError, NavegarResult};

/// Bundles a navigation engine with a generated-action registry.
///
/// One navigator is constructed per test-harness context and passed by
/// reference wherever navigation is needed; both halves are read-only after
/// construction.
#[derive(Debug)]
pub struct Navigator {
    engine: NavigationEngine,
    registry: ActionRegistry,
}

impl Navigator {
    /// Create a navigator from an engine and an already-built registry.
    #[must_use]
    pub fn new(engine: NavigationEngine, registry: ActionRegistry) -> Self {
        Self { engine, registry }
    }

    /// Build a navigator for `tree`, materializing all generated actions.
    pub fn from_tree(engine: NavigationEngine, tree: &MenuTree) -> NavegarResult<Self> {
        Ok(Self {
            engine,
            registry: ActionRegistry::from_tree(tree)?,
        })
    }

    /// The navigation engine.
    #[must_use]
    pub fn engine(&self) -> &NavigationEngine {
        &self.engine
    }

    /// The generated-action registry.
    #[must_use]
    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    /// Invoke the generated action named `name`.
    pub fn go_to(&self, driver: &mut dyn MenuDriver, name: &str) -> NavegarResult<PageHandle> {
        let action = self
            .registry
            .get(name)
            .ok_or_else(|| NavegarError::UnknownAction {
                name: name.to_string(),
            })?;
        action.run(&self.engine, driver)
    }

    /// Navigate an explicit path, bypassing the generated actions.
    pub fn navigate(
        &self,
        driver: &mut dyn MenuDriver,
        path: &NavPath,
    ) -> NavegarResult<PageHandle> {
        self.engine.navigate(driver, path)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::driver::{DriverCall, MockMenuDriver};
    use crate::page::{PageCatalog, SimplePage};
    use crate::translate::LabelTranslator;

    fn dashboard_navigator() -> Navigator {
        let tree = MenuTree::dashboard();
        let mut catalog = PageCatalog::new();
        for path in tree.leaf_paths() {
            let name = path.to_string();
            catalog.register_path(&path, move |_| SimplePage::new(name.clone()));
        }
        let engine = NavigationEngine::new(catalog)
            .with_translator(LabelTranslator::identity_for(&tree));
        Navigator::from_tree(engine, &tree).unwrap()
    }

    #[test]
    fn test_go_to_known_action() {
        let navigator = dashboard_navigator();
        let mut driver = MockMenuDriver::new();

        let page = navigator
            .go_to(&mut driver, "go_to_compute_instancespage")
            .unwrap();
        assert_eq!(page.page_name(), "Project/Compute/Instances");
        assert_eq!(
            driver.call_history,
            vec![DriverCall::MenuLevels([
                Some("Project".to_string()),
                Some("Compute".to_string()),
                Some("Instances".to_string()),
            ])]
        );
    }

    #[test]
    fn test_unknown_action_errors() {
        let navigator = dashboard_navigator();
        let mut driver = MockMenuDriver::new();

        let err = navigator
            .go_to(&mut driver, "go_to_nowhere_page")
            .unwrap_err();
        assert!(matches!(
            err,
            NavegarError::UnknownAction { name } if name == "go_to_nowhere_page"
        ));
        assert_eq!(driver.call_count(), 0);
    }

    #[test]
    fn test_every_generated_action_round_trips() {
        // Each action performs exactly the UI calls its classification
        // predicts, in order, then resolves exactly one page object.
        let navigator = dashboard_navigator();

        for action in navigator.registry().iter() {
            let mut driver = MockMenuDriver::new();
            let page = navigator.go_to(&mut driver, action.name()).unwrap();

            let classification = classify(action.path()).unwrap();
            assert_eq!(
                driver.call_count(),
                classification.action_count(),
                "call count mismatch for {}",
                action.name()
            );
            match driver.call_history.first().unwrap() {
                DriverCall::SettingsItem(_) => {
                    assert_eq!(classification.strategy.kind().to_string(), "settings menu");
                }
                DriverCall::MenuLevels(_) => {
                    assert_eq!(classification.strategy.kind().to_string(), "side menu");
                }
                DriverCall::ClickByText(_) => panic!("tab click cannot come first"),
            }
            if let Some(tab) = &classification.tab {
                assert_eq!(
                    driver.call_history.last().unwrap(),
                    &DriverCall::ClickByText(tab.clone())
                );
            }
            assert_eq!(page.page_name(), action.path().to_string());
        }
    }

    #[test]
    fn test_explicit_path_navigation() {
        let navigator = dashboard_navigator();
        let mut driver = MockMenuDriver::new();

        let page = navigator
            .navigate(&mut driver, &NavPath::from(["Settings", "User Settings"]))
            .unwrap();
        assert_eq!(page.page_name(), "Settings/User Settings");
        assert_eq!(
            driver.call_history,
            vec![DriverCall::SettingsItem("User Settings".to_string())]
        );
    }
}
