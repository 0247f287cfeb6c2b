//! Wire-facing request and response shapes.

pub mod auth;
pub mod client;
