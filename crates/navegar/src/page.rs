//! Page-object seam: the trait page objects implement, the catalog of page
//! constructors, and the driving context handed to them.
//!
//! The catalog is the resolvable namespace behind the naming convention in
//! [`crate::locate`]: registering a constructor under a derived module path
//! and class name is all it takes to make a screen reachable.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use tracing::trace;

use crate::locate::PageLocation;
use crate::path::NavPath;

/// Trait for page objects representing one screen in the UI.
///
/// Implementations encapsulate the structure and operations of a single
/// screen; the navigation core only constructs them and hands them back to
/// the caller.
pub trait PageObject: fmt::Debug + Send {
    /// Get the page name for logging/debugging.
    fn page_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Check if the page is fully loaded and ready for interaction.
    fn is_loaded(&self) -> bool {
        true
    }
}

/// Boxed page object returned to the navigation caller.
pub type PageHandle = Box<dyn PageObject>;

/// A minimal named page object.
///
/// Useful as a placeholder while a screen's real page object is being
/// written, and in tests.
#[derive(Debug, Clone)]
pub struct SimplePage {
    name: String,
}

impl SimplePage {
    /// Create a page with a display name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl PageObject for SimplePage {
    fn page_name(&self) -> &str {
        &self.name
    }
}

/// Driving context supplied by the caller and handed to page constructors.
#[derive(Debug, Clone)]
pub struct PageContext {
    /// Base URL of the dashboard under test.
    pub base_url: String,
    /// Default timeout pages apply to their own waits.
    pub default_timeout: Duration,
    /// Locale tag the live UI is rendered in.
    pub locale: String,
}

impl Default for PageContext {
    fn default() -> Self {
        Self {
            base_url: "http://localhost".to_string(),
            default_timeout: Duration::from_secs(30),
            locale: "en".to_string(),
        }
    }
}

impl PageContext {
    /// Create a context with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the default timeout.
    #[must_use]
    pub const fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// Set the UI locale tag.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }
}

/// Constructor closure producing a page object from the driving context.
pub type PageFactory = Box<dyn Fn(&PageContext) -> PageHandle + Send + Sync>;

/// Registry of page constructors keyed by derived module path and class
/// name.
#[derive(Default)]
pub struct PageCatalog {
    modules: BTreeMap<String, BTreeMap<String, PageFactory>>,
}

impl PageCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor under explicit identifiers.
    pub fn register<P, F>(
        &mut self,
        module_path: impl Into<String>,
        class_name: impl Into<String>,
        factory: F,
    ) where
        P: PageObject + 'static,
        F: Fn(&PageContext) -> P + Send + Sync + 'static,
    {
        let module_path = module_path.into();
        let class_name = class_name.into();
        trace!(module = %module_path, class = %class_name, "registering page constructor");
        let boxed: PageFactory = Box::new(move |ctx| Box::new(factory(ctx)));
        let _ = self
            .modules
            .entry(module_path)
            .or_default()
            .insert(class_name, boxed);
    }

    /// Register a constructor under the identifiers derived from `path`.
    pub fn register_path<P, F>(&mut self, path: &NavPath, factory: F)
    where
        P: PageObject + 'static,
        F: Fn(&PageContext) -> P + Send + Sync + 'static,
    {
        let location = PageLocation::locate(path, None);
        self.register(location.module_path, location.class_name, factory);
    }

    /// Look up the constructor for a derived location.
    #[must_use]
    pub fn factory(&self, location: &PageLocation) -> Option<&PageFactory> {
        self.modules
            .get(&location.module_path)?
            .get(&location.class_name)
    }

    /// Whether a constructor is registered for `location`.
    #[must_use]
    pub fn contains(&self, location: &PageLocation) -> bool {
        self.factory(location).is_some()
    }

    /// Registered module paths, sorted.
    #[must_use]
    pub fn modules(&self) -> Vec<&str> {
        self.modules.keys().map(String::as_str).collect()
    }

    /// Total number of registered constructors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.modules.values().map(BTreeMap::len).sum()
    }

    /// Whether the catalog has no constructors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl fmt::Debug for PageCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageCatalog")
            .field("modules", &self.modules())
            .field("constructors", &self.len())
            .finish()
    }
}
