//! Routed pages.

pub mod groups;
pub mod home;
pub mod login;
pub mod register;
