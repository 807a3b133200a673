pub mod menu_footer;
pub mod profile_card;

pub use menu_footer::MenuFooter;
pub use profile_card::ProfileCard;
