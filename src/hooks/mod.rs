pub mod use_navigation;

pub use use_navigation::{use_navigation, Navigation};
