pub mod icons;
pub mod layout;
pub mod navigation;

pub use navigation::SideMenu;
