use dioxus::prelude::*;

use crate::components::icons::IconGlyph;
use crate::config::SiteConfig;
use crate::dom::open_in_new_tab;
use crate::types::Icon;

const AVATAR: Asset = asset!("/assets/avatar.svg");

#[component]
pub fn ProfileCard(collapsed: bool) -> Element {
    let config = use_context::<SiteConfig>();
    let github_url = config.github_url.clone();
    let mailto_url = config.mailto_url();

    rsx! {
        div { class: "user-profile",
            div { class: "profile-avatar",
                img { src: AVATAR, alt: "Avatar of {config.owner_name}" }
            }

            if !collapsed {
                div { class: "profile-info",
                    div { class: "profile-name", "{config.owner_name}" }
                    div { class: "social-links",
                        button {
                            class: "social-btn",
                            title: "GitHub",
                            onclick: move |_| open_in_new_tab(&github_url),
                            IconGlyph { icon: Icon::Github }
                        }
                        button {
                            class: "social-btn",
                            title: "Mail",
                            onclick: move |_| open_in_new_tab(&mailto_url),
                            IconGlyph { icon: Icon::Envelope }
                        }
                    }
                }
            }
        }
    }
}
