//! Collapsible side navigation for a single-page portfolio.
//!
//! The menu highlights the section currently in view, smooth-scrolls to a section
//! when an item is clicked and turns into an overlay with a top bar on narrow
//! screens. The state machine ([`types`], [`navigation`], [`scroll_tracker`]) is
//! independent of the browser and talks to the page only through [`viewport::Viewport`].

pub mod components;
pub mod config;
pub mod dom;
pub mod error;
pub mod hooks;
pub mod navigation;
pub mod pages;
pub mod scroll_tracker;
pub mod types;
pub mod viewport;

pub use config::SiteConfig;
pub use error::{DomError, DomResult};
pub use types::{Icon, MenuItem, NavigationState, Section, MENU_ITEMS};
pub use viewport::{is_mobile_width, Viewport, MOBILE_BREAKPOINT};
