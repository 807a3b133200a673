use dioxus::prelude::*;

use crate::components::icons::IconGlyph;
use crate::hooks::Navigation;
use crate::types::{Icon, NavigationState};

/// The top bar is only shown while the panel is closed.
pub fn navbar_class(state: &NavigationState) -> &'static str {
    if state.mobile_menu_open {
        "mobile-navbar navbar-hidden"
    } else {
        "mobile-navbar navbar-visible"
    }
}

#[component]
pub fn MobileNavbar(nav: Navigation, owner_name: String) -> Element {
    let mut nav = nav;
    let state = nav.snapshot();

    rsx! {
        nav {
            class: navbar_class(&state),
            div { class: "navbar-content",
                span { class: "navbar-user-name", "{owner_name}" }
                button {
                    class: "navbar-menu-btn",
                    title: "Show Menu",
                    onclick: move |_| nav.show_mobile_menu(),
                    IconGlyph { icon: Icon::Bars }
                }
            }
        }
    }
}
