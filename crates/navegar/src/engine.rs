//! Navigation orchestration: classify the path, drive the UI, resolve the
//! page object.
//!
//! The engine owns no browser state. The driver it receives `&mut` is the
//! serially-accessed shared resource; every call is synchronous and
//! blocking, with no retries and no rollback of actions already performed.

use tracing::{debug, trace};

use crate::classify::{classify, Classification, Strategy, StrategyKind};
use crate::driver::MenuDriver;
use crate::locate::PageLocation;
use crate::page::{PageCatalog, PageContext, PageHandle};
use crate::path::{NavPath, SIDE_MENU_LEVELS};
use crate::result::{NavegarError, NavegarResult};
use crate::translate::{LabelTranslator, TranslationPolicy};

/// Orchestrates menu navigation and page-object resolution.
#[derive(Debug)]
pub struct NavigationEngine {
    catalog: PageCatalog,
    translator: LabelTranslator,
    policy: TranslationPolicy,
    context: PageContext,
}

impl NavigationEngine {
    /// Create an engine over a page catalog with an empty translator, the
    /// default translation policy, and a default driving context.
    #[must_use]
    pub fn new(catalog: PageCatalog) -> Self {
        Self {
            catalog,
            translator: LabelTranslator::new(),
            policy: TranslationPolicy::default(),
            context: PageContext::default(),
        }
    }

    /// Set the label translator used for localized dispatch.
    #[must_use]
    pub fn with_translator(mut self, translator: LabelTranslator) -> Self {
        self.translator = translator;
        self
    }

    /// Set the translation policy.
    #[must_use]
    pub const fn with_policy(mut self, policy: TranslationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the driving context handed to page constructors.
    #[must_use]
    pub fn with_context(mut self, context: PageContext) -> Self {
        self.context = context;
        self
    }

    /// The page catalog.
    #[must_use]
    pub fn catalog(&self) -> &PageCatalog {
        &self.catalog
    }

    /// The driving context.
    #[must_use]
    pub fn context(&self) -> &PageContext {
        &self.context
    }

    /// Navigate to the screen at `path` and return its page object.
    pub fn navigate(
        &self,
        driver: &mut dyn MenuDriver,
        path: &NavPath,
    ) -> NavegarResult<PageHandle> {
        self.navigate_as(driver, path, None)
    }

    /// Navigate with an explicit page-class name override.
    ///
    /// Classification happens before any UI action; an invalid path depth
    /// fails here without touching the driver. Page resolution always uses
    /// the untranslated path: localization is a display concern that never
    /// reaches the naming convention.
    pub fn navigate_as(
        &self,
        driver: &mut dyn MenuDriver,
        path: &NavPath,
        page_class: Option<&str>,
    ) -> NavegarResult<PageHandle> {
        let classification = classify(path)?;
        debug!(
            path = %path,
            strategy = %classification.strategy.kind(),
            actions = classification.action_count(),
            "navigating"
        );

        self.drive_primary(driver, path, &classification)?;

        if let Some(tab) = &classification.tab {
            let label = if self.policy.localizes_tab() {
                self.translator.translate(tab)?.to_string()
            } else {
                tab.clone()
            };
            trace!(tab = %label, "selecting tab");
            driver
                .click_by_text(&label)
                .map_err(|err| fail(path, StrategyKind::TabMenu, &err))?;
        }

        let location = PageLocation::locate(path, page_class);
        debug!(
            module = %location.module_path,
            class = %location.class_name,
            "resolving page object"
        );
        let factory =
            self.catalog
                .factory(&location)
                .ok_or_else(|| NavegarError::ResolutionFailed {
                    path: path.to_string(),
                    module_path: location.module_path.clone(),
                    class_name: location.class_name.clone(),
                })?;
        Ok(factory(&self.context))
    }

    fn drive_primary(
        &self,
        driver: &mut dyn MenuDriver,
        path: &NavPath,
        classification: &Classification,
    ) -> NavegarResult<()> {
        match &classification.strategy {
            Strategy::Settings { item } => {
                trace!(item = %item, "selecting settings item");
                driver
                    .select_settings_item(item)
                    .map_err(|err| fail(path, StrategyKind::Settings, &err))
            }
            Strategy::SideMenu { levels, localized } => {
                let slots = self.localize_levels(levels, *localized)?;
                let borrowed: [Option<&str>; SIDE_MENU_LEVELS] = [
                    slots[0].as_deref(),
                    slots[1].as_deref(),
                    slots[2].as_deref(),
                ];
                trace!(levels = ?borrowed, "selecting side-menu levels");
                driver
                    .select_menu_levels(borrowed)
                    .map_err(|err| fail(path, StrategyKind::SideMenu, &err))
            }
        }
    }

    /// Localize populated side-menu slots when the policy requires it.
    ///
    /// A missing translation surfaces before the driver is touched.
    fn localize_levels(
        &self,
        levels: &[Option<String>; SIDE_MENU_LEVELS],
        classified: bool,
    ) -> NavegarResult<[Option<String>; SIDE_MENU_LEVELS]> {
        if !self.policy.localizes_side_menu(classified) {
            return Ok(levels.clone());
        }
        let mut out: [Option<String>; SIDE_MENU_LEVELS] = Default::default();
        for (slot, label) in out.iter_mut().zip(levels) {
            if let Some(label) = label {
                *slot = Some(self.translator.translate(label)?.to_string());
            }
        }
        Ok(out)
    }
}

fn fail(path: &NavPath, strategy: StrategyKind, err: &NavegarError) -> NavegarError {
    NavegarError::NavigationFailed {
        path: path.to_string(),
        strategy,
        message: err.to_string(),
    }
}
