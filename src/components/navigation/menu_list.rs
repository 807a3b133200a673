use dioxus::prelude::*;

use crate::components::icons::IconGlyph;
use crate::hooks::Navigation;
use crate::types::{MenuItem, NavigationState, MENU_ITEMS};

pub fn menu_button_class(item: &MenuItem, state: &NavigationState) -> &'static str {
    if item.section == state.active_section {
        "menu-button active"
    } else {
        "menu-button"
    }
}

/// Collapsed buttons show the label as a tooltip instead of inline text.
pub fn menu_button_title(item: &MenuItem, state: &NavigationState) -> &'static str {
    if state.collapsed {
        item.label
    } else {
        ""
    }
}

#[component]
pub fn MenuList(nav: Navigation) -> Element {
    let state = nav.snapshot();

    rsx! {
        nav { class: "menu-nav",
            ul { class: "menu-list",
                for item in MENU_ITEMS {
                    {
                        let mut nav = nav;
                        let section = item.section;

                        rsx! {
                            li {
                                key: "{section}",
                                class: "menu-item",
                                button {
                                    class: menu_button_class(&item, &state),
                                    title: menu_button_title(&item, &state),
                                    onclick: move |_| nav.select_section(section),
                                    span { class: "menu-icon", IconGlyph { icon: item.icon } }
                                    if !state.collapsed {
                                        span { class: "menu-label", "{item.label}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Section;

    #[test]
    fn test_only_active_item_is_highlighted() {
        let state = NavigationState {
            active_section: Section::Projects,
            ..NavigationState::default()
        };
        let active: Vec<Section> = MENU_ITEMS
            .iter()
            .filter(|item| menu_button_class(item, &state) == "menu-button active")
            .map(|item| item.section)
            .collect();
        assert_eq!(active, vec![Section::Projects]);
    }

    #[test]
    fn test_title_only_when_collapsed() {
        let mut state = NavigationState::default();
        assert_eq!(menu_button_title(&MENU_ITEMS[1], &state), "");

        state.toggle_collapsed();
        assert_eq!(menu_button_title(&MENU_ITEMS[1], &state), "Skills");
    }
}
