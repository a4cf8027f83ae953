//! Navegar: data-driven menu navigation for browser test automation.
//!
//! Navegar (Spanish: "to navigate") resolves a human-readable menu path
//! such as Project → Compute → Instances into the UI actions that reach the
//! target screen, then hands back a page object for it. Test authors never
//! build paths or import screen modules by hand: a declarative menu tree is
//! walked once at startup, and every leaf item becomes a named, generated
//! action bound to a generic resolver.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                      NAVEGAR Architecture                         │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐   ┌────────────────┐   ┌───────────────────────┐ │
//! │  │ MenuTree  │──►│ ActionRegistry │──►│ NavigationEngine      │ │
//! │  │ (data)    │   │ go_to_*page    │   │ classify → drive →    │ │
//! │  └───────────┘   └────────────────┘   │ locate → instantiate  │ │
//! │                                       └──────────┬────────────┘ │
//! │            ┌──────────────┐   ┌─────────────┐    │              │
//! │            │ MenuDriver   │◄──┤ PageCatalog │◄───┘              │
//! │            │ (browser UI) │   │ page ctors  │                   │
//! │            └──────────────┘   └─────────────┘                   │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use navegar::{
//!     MenuNode, MenuTree, MockMenuDriver, NavPath, NavigationEngine, Navigator,
//!     PageCatalog, SimplePage,
//! };
//!
//! let tree = MenuTree::new(
//!     MenuNode::new().with_child("Project", MenuNode::new().with_items(["Overview"])),
//! );
//!
//! let mut catalog = PageCatalog::new();
//! catalog.register_path(&NavPath::from(["Project", "Overview"]), |_| {
//!     SimplePage::new("overview")
//! });
//!
//! let navigator = Navigator::from_tree(NavigationEngine::new(catalog), &tree)?;
//! let mut driver = MockMenuDriver::new();
//! let page = navigator.go_to(&mut driver, "go_to_project_overviewpage")?;
//! assert_eq!(page.page_name(), "overview");
//! # Ok::<(), navegar::NavegarError>(())
//! ```
//!
//! Navigation reaches the browser only through the three operations of the
//! [`MenuDriver`] seam; wiring a real session means implementing that trait
//! and registering one page constructor per screen in the [`PageCatalog`].

#![warn(missing_docs)]

/// Path classification into dispatch strategies.
mod classify;
/// The browser-driving seam and its recording mock.
mod driver;
/// Navigation orchestration.
mod engine;
/// Module/class identifier derivation for page objects.
mod locate;
/// The declarative menu description.
mod menu;
/// Caller facade over engine and registry.
mod navigator;
/// Page-object trait, constructor catalog, and driving context.
mod page;
/// Navigation paths and depth constants.
mod path;
/// Generated-action registry.
mod registry;
/// Result and error types.
mod result;
/// Label localization for dispatch.
mod translate;

pub use classify::{classify, Classification, Strategy, StrategyKind, SETTINGS_MENU};
pub use driver::{DriverCall, MenuDriver, MockMenuDriver};
pub use engine::NavigationEngine;
pub use locate::{normalize, PageLocation};
pub use menu::{MenuNode, MenuTree, ITEMS_KEY};
pub use navigator::Navigator;
pub use page::{PageCatalog, PageContext, PageFactory, PageHandle, PageObject, SimplePage};
pub use path::{NavPath, MAX_DEPTH, MIN_DEPTH, SIDE_MENU_LEVELS};
pub use registry::{action_name, ActionRegistry, GeneratedAction, ACTION_PREFIX, ACTION_SUFFIX};
pub use result::{NavegarError, NavegarResult};
pub use translate::{LabelTranslator, TranslationPolicy};
