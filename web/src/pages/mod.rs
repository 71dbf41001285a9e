//! Application pages.
pub mod admin;
pub mod auth;
pub mod directory;
pub mod donations;
pub mod events;
pub mod forums;
pub mod gallery;
pub mod home;
pub mod news;
pub mod not_found;
pub mod profile;
