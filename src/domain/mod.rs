//! Domain entities exposed by the service layer.

pub mod client;
pub mod sale;
pub mod stats;
pub mod user;
