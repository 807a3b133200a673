//! Browser-backed [`Viewport`] built on web-sys.
//!
//! Every failure here is swallowed at the trait boundary: the menu has no error UI,
//! so a failed DOM read behaves like a missing value and a failed scroll is skipped.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::error::{DomError, DomResult};
use crate::scroll_tracker::ScrollSubscription;
use crate::types::Section;
use crate::viewport::Viewport;

fn window() -> DomResult<Window> {
    web_sys::window().ok_or(DomError::NoWindow)
}

fn document() -> DomResult<Document> {
    window()?.document().ok_or(DomError::NoDocument)
}

/// The live page, read fresh on every call.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BrowserViewport;

impl BrowserViewport {
    fn try_width(&self) -> DomResult<f64> {
        let width = window()?.inner_width()?;
        width
            .as_f64()
            .ok_or_else(|| DomError::Js("innerWidth is not a number".to_string()))
    }

    fn try_scroll_offset(&self) -> DomResult<f64> {
        Ok(window()?.scroll_y()?)
    }

    fn try_anchor_top(&self, section: Section) -> DomResult<Option<f64>> {
        let top = document()?
            .get_element_by_id(section.id())
            .and_then(|element| element.dyn_into::<HtmlElement>().ok())
            .map(|element| f64::from(element.offset_top()));
        Ok(top)
    }

    fn try_smooth_scroll_to(&self, top: f64) -> DomResult<()> {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        window()?.scroll_to_with_scroll_to_options(&options);
        Ok(())
    }

    /// Call `handler` on every window `scroll` event until the returned guard is dropped.
    pub fn subscribe_scroll(&self, handler: impl FnMut() + 'static) -> DomResult<ScrollSubscription> {
        let window = window()?;
        let callback = Closure::<dyn FnMut()>::new(handler);
        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;
        tracing::debug!("scroll listener registered on window");

        Ok(ScrollSubscription::new(move || {
            if let Err(err) = window
                .remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                tracing::warn!(error = %DomError::from(err), "failed to remove scroll listener");
            }
            // The closure must stay alive until the listener is gone.
            drop(callback);
            tracing::debug!("scroll listener removed");
        }))
    }
}

impl Viewport for BrowserViewport {
    fn width(&self) -> f64 {
        self.try_width().unwrap_or_else(|err| {
            tracing::debug!(error = %err, "viewport width unavailable");
            0.0
        })
    }

    fn scroll_offset(&self) -> f64 {
        self.try_scroll_offset().unwrap_or_else(|err| {
            tracing::debug!(error = %err, "scroll offset unavailable");
            0.0
        })
    }

    fn anchor_top(&self, section: Section) -> Option<f64> {
        self.try_anchor_top(section).unwrap_or_else(|err| {
            tracing::debug!(error = %err, %section, "anchor lookup failed");
            None
        })
    }

    fn smooth_scroll_to(&self, top: f64) {
        if let Err(err) = self.try_smooth_scroll_to(top) {
            tracing::debug!(error = %err, top, "smooth scroll skipped");
        }
    }
}

/// Open `url` in a new browsing context. The URL is passed through unchecked.
pub fn open_in_new_tab(url: &str) {
    let opened = window().and_then(|window| Ok(window.open_with_url_and_target(url, "_blank")?));
    if let Err(err) = opened {
        tracing::warn!(error = %err, url, "could not open link");
    }
}
