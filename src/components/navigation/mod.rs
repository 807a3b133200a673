pub mod menu_list;
pub mod mobile_navbar;
pub mod side_menu;

pub use menu_list::MenuList;
pub use mobile_navbar::MobileNavbar;
pub use side_menu::SideMenu;
