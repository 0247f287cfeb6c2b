//! Database models and boundary types shared across the repository.

pub mod auth;
pub mod client;
pub mod config;
pub mod sale;
pub mod user;
