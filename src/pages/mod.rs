use dioxus::prelude::*;

use crate::components::SideMenu;
use crate::types::{Section, MENU_ITEMS};

/// Demo host page: the menu beside one placeholder block per section anchor.
#[component]
pub fn Portfolio() -> Element {
    rsx! {
        div { class: "portfolio-layout",
            SideMenu {}
            main { class: "portfolio-content",
                for item in MENU_ITEMS {
                    SectionBlock { key: "{item.section}", section: item.section, title: item.label }
                }
            }
        }
    }
}

#[component]
fn SectionBlock(section: Section, title: &'static str) -> Element {
    rsx! {
        section { id: section.id(), class: "portfolio-section",
            h2 { "{title}" }
        }
    }
}
