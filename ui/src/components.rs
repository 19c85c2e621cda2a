pub mod footer;
pub mod icons;
pub mod layout;
pub mod navbar;
pub mod quick_actions;
