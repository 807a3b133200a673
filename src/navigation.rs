//! Menu actions: section selection and panel toggles.

use crate::types::{NavigationState, Section};
use crate::viewport::Viewport;

/// Gap left above a section when scrolling to it on desktop.
pub const DESKTOP_SCROLL_BIAS: f64 = 15.0;

/// Mobile gap: the desktop gap plus the fixed top bar (60px) and some spacing.
pub const MOBILE_SCROLL_BIAS: f64 = 75.0;

pub fn scroll_bias(mobile: bool) -> f64 {
    if mobile {
        MOBILE_SCROLL_BIAS
    } else {
        DESKTOP_SCROLL_BIAS
    }
}

impl NavigationState {
    /// Activate `section` and scroll the page to it.
    ///
    /// The section is marked active before any scrolling starts. On mobile the panel
    /// closes. Returns the scroll target issued, or `None` if the page has no anchor
    /// for the section.
    pub fn select_section<V: Viewport>(&mut self, section: Section, viewport: &V) -> Option<f64> {
        self.active_section = section;

        let mobile = viewport.is_mobile();
        if mobile {
            self.mobile_menu_open = false;
        }

        tracing::info!(%section, mobile, "menu item selected");

        let Some(anchor_top) = viewport.anchor_top(section) else {
            tracing::debug!(%section, "no anchor on page, skipping scroll");
            return None;
        };
        let target = anchor_top - scroll_bias(mobile);
        viewport.smooth_scroll_to(target);
        Some(target)
    }

    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    pub fn show_mobile_menu(&mut self) {
        self.mobile_menu_open = true;
    }

    pub fn hide_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::viewport::testing::FakeViewport;

    #[test]
    fn test_select_closes_menu_on_mobile() {
        let page = FakeViewport::mobile().anchor(Section::Skills, 500.0);
        let mut state = NavigationState::default();

        state.select_section(Section::Skills, &page);

        assert_eq!(state.active_section, Section::Skills);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn test_select_leaves_menu_flag_on_desktop() {
        let page = FakeViewport::desktop().anchor(Section::Skills, 500.0);

        let mut open = NavigationState::default();
        open.select_section(Section::Skills, &page);
        assert!(open.mobile_menu_open);

        let mut closed = NavigationState {
            mobile_menu_open: false,
            ..NavigationState::default()
        };
        closed.select_section(Section::Skills, &page);
        assert!(!closed.mobile_menu_open);
    }

    #[test]
    fn test_scroll_target_desktop() {
        let page = FakeViewport::desktop().anchor(Section::Projects, 1000.0);
        let mut state = NavigationState::default();

        assert_eq!(state.select_section(Section::Projects, &page), Some(985.0));
        assert_eq!(*page.scrolls.borrow(), vec![985.0]);
    }

    #[test]
    fn test_scroll_target_mobile() {
        let page = FakeViewport::mobile().anchor(Section::Projects, 1000.0);
        let mut state = NavigationState::default();

        assert_eq!(state.select_section(Section::Projects, &page), Some(925.0));
        assert_eq!(*page.scrolls.borrow(), vec![925.0]);
    }

    #[test]
    fn test_missing_anchor_still_activates() {
        let page = FakeViewport::mobile();
        let mut state = NavigationState::default();

        assert_eq!(state.select_section(Section::Experiences, &page), None);
        assert_eq!(state.active_section, Section::Experiences);
        assert!(!state.mobile_menu_open);
        assert!(page.scrolls.borrow().is_empty());
    }

    #[test]
    fn test_repeated_selection_issues_new_scroll() {
        let page = FakeViewport::desktop()
            .anchor(Section::About, 0.0)
            .anchor(Section::Experiences, 2400.0);
        let mut state = NavigationState::default();

        state.select_section(Section::Experiences, &page);
        state.select_section(Section::About, &page);

        assert_eq!(*page.scrolls.borrow(), vec![2385.0, -15.0]);
        assert_eq!(state.active_section, Section::About);
    }

    #[test]
    fn test_toggles_are_independent() {
        let mut state = NavigationState::default();

        state.toggle_collapsed();
        assert!(state.collapsed);
        assert!(state.mobile_menu_open);

        state.toggle_mobile_menu();
        assert!(!state.mobile_menu_open);
        assert!(state.collapsed);

        state.show_mobile_menu();
        state.show_mobile_menu();
        assert!(state.mobile_menu_open);

        state.hide_mobile_menu();
        assert!(!state.mobile_menu_open);

        state.toggle_collapsed();
        assert!(!state.collapsed);
        assert_eq!(state.active_section, Section::About);
    }
}
