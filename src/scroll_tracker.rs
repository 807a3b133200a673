//! Keeps the active section in step with the page scroll position (desktop only).

use crate::types::{NavigationState, Section};
use crate::viewport::Viewport;

/// Added to the scroll offset so a section activates a little before it reaches the top.
pub const SCROLL_LOOKAHEAD: f64 = 100.0;

/// Deepest section whose anchor starts at or above `position`.
///
/// Sections are scanned from last to first and the first hit wins, so when several
/// anchors qualify the one latest in the document is chosen. Sections without an
/// anchor are skipped.
pub fn section_at<F>(position: f64, anchor_top: F) -> Option<Section>
where
    F: Fn(Section) -> Option<f64>,
{
    Section::ALL
        .into_iter()
        .rev()
        .find(|&section| anchor_top(section).is_some_and(|top| top <= position))
}

/// Recompute the active section from the current scroll offset.
///
/// Returns the section now active, or `None` when nothing changed because the
/// viewport is mobile or no anchor is above the lookahead position.
pub fn sync_active_section<V: Viewport>(
    state: &mut NavigationState,
    viewport: &V,
) -> Option<Section> {
    if viewport.is_mobile() {
        return None;
    }

    let position = viewport.scroll_offset() + SCROLL_LOOKAHEAD;
    let section = section_at(position, |section| viewport.anchor_top(section))?;
    if state.active_section != section {
        tracing::debug!(%section, position, "active section changed");
    }
    state.active_section = section;
    Some(section)
}

/// Live registration of a window scroll listener.
///
/// The listener is removed when the guard is dropped, so a handler never outlives the
/// component state it writes to.
#[must_use = "dropping the subscription removes the scroll listener"]
pub struct ScrollSubscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    /// Wrap a registration; `release` undoes it and runs exactly once.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Remove the listener now instead of at drop.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        self.run_release();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::viewport::testing::FakeViewport;

    fn spaced_page() -> FakeViewport {
        FakeViewport::desktop()
            .anchor(Section::About, 0.0)
            .anchor(Section::Skills, 500.0)
            .anchor(Section::Projects, 1000.0)
            .anchor(Section::Experiences, 1500.0)
    }

    #[test]
    fn test_latest_qualifying_section_wins() {
        let page = spaced_page();
        let section = section_at(1100.0, |s| page.anchor_top(s));
        assert_eq!(section, Some(Section::Projects));
    }

    #[test]
    fn test_anchor_exactly_at_position_qualifies() {
        let page = spaced_page();
        assert_eq!(section_at(500.0, |s| page.anchor_top(s)), Some(Section::Skills));
        assert_eq!(section_at(499.0, |s| page.anchor_top(s)), Some(Section::About));
    }

    #[test]
    fn test_sync_applies_lookahead() {
        let page = spaced_page().scrolled_to(1000.0);
        let mut state = NavigationState::default();

        assert_eq!(sync_active_section(&mut state, &page), Some(Section::Projects));
        assert_eq!(state.active_section, Section::Projects);

        page.scroll_y.set(1400.0);
        assert_eq!(sync_active_section(&mut state, &page), Some(Section::Experiences));
    }

    #[test]
    fn test_no_match_keeps_previous_section() {
        let page = FakeViewport::desktop()
            .anchor(Section::About, 300.0)
            .anchor(Section::Skills, 800.0);
        let mut state = NavigationState {
            active_section: Section::Skills,
            ..NavigationState::default()
        };

        assert_eq!(sync_active_section(&mut state, &page), None);
        assert_eq!(state.active_section, Section::Skills);
    }

    #[test]
    fn test_missing_anchor_is_skipped() {
        let page = FakeViewport::desktop()
            .anchor(Section::About, 0.0)
            .anchor(Section::Skills, 400.0)
            .anchor(Section::Experiences, 2000.0)
            .scrolled_to(1200.0);
        let mut state = NavigationState::default();

        assert_eq!(sync_active_section(&mut state, &page), Some(Section::Skills));
    }

    #[test]
    fn test_inert_on_mobile() {
        let page = FakeViewport::mobile()
            .anchor(Section::About, 0.0)
            .anchor(Section::Projects, 100.0)
            .scrolled_to(900.0);
        let mut state = NavigationState::default();

        assert_eq!(sync_active_section(&mut state, &page), None);
        assert_eq!(state.active_section, Section::About);
    }

    #[test]
    fn test_breakpoint_width_counts_as_mobile() {
        let page = FakeViewport::with_width(768.0)
            .anchor(Section::Projects, 0.0)
            .scrolled_to(50.0);
        let mut state = NavigationState::default();
        assert_eq!(sync_active_section(&mut state, &page), None);

        page.width.set(769.0);
        assert_eq!(sync_active_section(&mut state, &page), Some(Section::Projects));
    }

    #[test]
    fn test_subscription_releases_once_on_drop() {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        let subscription = ScrollSubscription::new(move || counter.set(counter.get() + 1));

        assert_eq!(released.get(), 0);
        drop(subscription);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_explicit_release_does_not_run_twice() {
        let released = Rc::new(Cell::new(0));
        let counter = released.clone();
        let subscription = ScrollSubscription::new(move || counter.set(counter.get() + 1));

        subscription.release();
        assert_eq!(released.get(), 1);
    }
}
