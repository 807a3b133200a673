use dioxus::prelude::*;

use crate::components::icons::IconGlyph;
use crate::components::layout::{MenuFooter, ProfileCard};
use crate::components::navigation::{MenuList, MobileNavbar};
use crate::config::SiteConfig;
use crate::hooks::use_navigation;
use crate::types::{Icon, NavigationState};

/// Classes for the panel; the stylesheet hides `mobile-closed` on narrow screens.
pub fn side_menu_class(state: &NavigationState) -> String {
    let mut class = String::from("side-menu");
    if state.collapsed {
        class.push_str(" collapsed");
    }
    class.push_str(if state.mobile_menu_open {
        " mobile-open"
    } else {
        " mobile-closed"
    });
    class
}

pub fn mobile_menu_button_title(state: &NavigationState) -> &'static str {
    if state.mobile_menu_open {
        "Hide Menu"
    } else {
        "Show Menu"
    }
}

pub fn collapse_button_title(state: &NavigationState) -> &'static str {
    if state.collapsed {
        "Expand navigation"
    } else {
        "Collapse navigation"
    }
}

#[component]
pub fn SideMenu() -> Element {
    let config = use_context::<SiteConfig>();
    let mut nav = use_navigation();
    let state = nav.snapshot();

    rsx! {
        MobileNavbar { nav, owner_name: config.owner_name.clone() }

        div {
            class: "{side_menu_class(&state)}",

            button {
                class: "mobile-menu-btn",
                title: mobile_menu_button_title(&state),
                onclick: move |_| nav.toggle_mobile_menu(),
                IconGlyph { icon: Icon::Bars }
            }

            button {
                class: "btn-collapse",
                title: collapse_button_title(&state),
                onclick: move |_| nav.toggle_collapsed(),
                if state.collapsed { "›" } else { "‹" }
            }

            ProfileCard { collapsed: state.collapsed }
            MenuList { nav }
            MenuFooter { collapsed: state.collapsed }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_panel_class() {
        let state = NavigationState::default();
        assert_eq!(side_menu_class(&state), "side-menu mobile-open");
        assert_eq!(mobile_menu_button_title(&state), "Hide Menu");
    }

    #[test]
    fn test_collapsed_and_closed_panel_class() {
        let state = NavigationState {
            collapsed: true,
            mobile_menu_open: false,
            ..NavigationState::default()
        };
        assert_eq!(side_menu_class(&state), "side-menu collapsed mobile-closed");
        assert_eq!(mobile_menu_button_title(&state), "Show Menu");
        assert_eq!(collapse_button_title(&state), "Expand navigation");
    }
}
