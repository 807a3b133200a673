use dioxus::prelude::*;

use crate::config::SiteConfig;

#[component]
pub fn MenuFooter(collapsed: bool) -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        div { class: "menu-footer",
            if !collapsed {
                div { class: "copyright-info",
                    span { class: "copyright-text", "{config.copyright}" }
                    span { class: "copyright-subtext", "All rights reserved" }
                }
            }
        }
    }
}
