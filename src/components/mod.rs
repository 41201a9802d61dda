//! Reusable UI components.

pub mod create_menu;
pub mod dismissible;
pub mod drawer;
pub mod navbar;
pub mod profile_menu;
