use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;

use crate::dom::BrowserViewport;
use crate::scroll_tracker::{sync_active_section, ScrollSubscription};
use crate::types::{NavigationState, Section};

/// Handle to the side menu's state. Cheap to copy into event handlers.
#[derive(Clone, Copy, PartialEq)]
pub struct Navigation {
    pub state: Signal<NavigationState>,
}

/// Create the menu state and keep it in sync with page scrolling while mounted.
pub fn use_navigation() -> Navigation {
    let state = use_signal(NavigationState::default);

    let listener = use_hook(|| Rc::new(RefCell::new(None::<ScrollSubscription>)));
    let slot = listener.clone();

    use_effect(move || {
        if slot.borrow().is_some() {
            return;
        }

        let viewport = BrowserViewport;
        track_scroll(state, &viewport);

        match viewport.subscribe_scroll(move || track_scroll(state, &viewport)) {
            Ok(subscription) => *slot.borrow_mut() = Some(subscription),
            Err(err) => tracing::warn!(error = %err, "scroll tracking disabled"),
        }
    });

    use_drop(move || {
        drop(listener.borrow_mut().take());
    });

    Navigation { state }
}

/// Run the tracker and only write the signal when the section actually changed.
fn track_scroll(mut state: Signal<NavigationState>, viewport: &BrowserViewport) {
    let current = *state.peek();
    let mut next = current;
    if sync_active_section(&mut next, viewport).is_some() && next != current {
        state.set(next);
    }
}

impl Navigation {
    pub fn snapshot(&self) -> NavigationState {
        *self.state.read()
    }

    pub fn select_section(&mut self, section: Section) {
        let mut next = *self.state.peek();
        next.select_section(section, &BrowserViewport);
        self.state.set(next);
    }

    pub fn toggle_collapsed(&mut self) {
        self.state.with_mut(NavigationState::toggle_collapsed);
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.state.with_mut(NavigationState::toggle_mobile_menu);
    }

    pub fn show_mobile_menu(&mut self) {
        self.state.with_mut(NavigationState::show_mobile_menu);
    }

    pub fn hide_mobile_menu(&mut self) {
        self.state.with_mut(NavigationState::hide_mobile_menu);
    }
}
