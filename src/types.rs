use std::fmt;

use serde::{Deserialize, Serialize};

/// A named region of the host page the menu can scroll to.
///
/// The DOM id of the anchor element is the lowercase name (`about`, `skills`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    About,
    Skills,
    Projects,
    Experiences,
}

impl Section {
    /// Sections in document order.
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Skills,
        Section::Projects,
        Section::Experiences,
    ];

    /// DOM element id of the section anchor.
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Experiences => "experiences",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|section| section.id() == id)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Icon {
    User,
    Tools,
    Rocket,
    Briefcase,
    Github,
    Envelope,
    Bars,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct MenuItem {
    pub section: Section,
    pub label: &'static str,
    pub icon: Icon,
}

/// Menu entries in display order, one per section.
pub const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem { section: Section::About, label: "About Me", icon: Icon::User },
    MenuItem { section: Section::Skills, label: "Skills", icon: Icon::Tools },
    MenuItem { section: Section::Projects, label: "Projects", icon: Icon::Rocket },
    MenuItem { section: Section::Experiences, label: "Experiences", icon: Icon::Briefcase },
];

/// UI state owned by one mounted side menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    pub active_section: Section,
    pub collapsed: bool,
    pub mobile_menu_open: bool,
}

impl Default for NavigationState {
    /// The panel starts open, including on narrow screens.
    fn default() -> Self {
        Self {
            active_section: Section::About,
            collapsed: false,
            mobile_menu_open: true,
        }
    }
}
