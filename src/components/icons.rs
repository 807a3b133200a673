use dioxus::prelude::*;

use crate::types::Icon;

pub fn glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::User => "👤",
        Icon::Tools => "🛠",
        Icon::Rocket => "🚀",
        Icon::Briefcase => "💼",
        Icon::Github => "⎇",
        Icon::Envelope => "✉",
        Icon::Bars => "☰",
    }
}

#[component]
pub fn IconGlyph(icon: Icon) -> Element {
    rsx! {
        span { class: "icon", aria_hidden: "true", "{glyph(icon)}" }
    }
}
