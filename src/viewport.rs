//! Viewport classification and the page capabilities the menu depends on.

use crate::types::Section;

/// Widest viewport, in CSS pixels, still treated as mobile.
pub const MOBILE_BREAKPOINT: f64 = 768.0;

pub fn is_mobile_width(width: f64) -> bool {
    width <= MOBILE_BREAKPOINT
}

/// Everything the tracker and controller read from, or do to, the page.
///
/// Implementations must read live values on every call; nothing here may be cached.
pub trait Viewport {
    /// Current viewport width in CSS pixels.
    fn width(&self) -> f64;

    /// Current vertical scroll offset of the page.
    fn scroll_offset(&self) -> f64;

    /// Top offset of the section's anchor element, `None` if the page has no such anchor.
    fn anchor_top(&self, section: Section) -> Option<f64>;

    /// Start a smooth scroll to `top`. Does not wait for the animation.
    fn smooth_scroll_to(&self, top: f64);

    fn is_mobile(&self) -> bool {
        is_mobile_width(self.width())
    }
}
