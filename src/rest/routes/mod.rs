//! REST API route handlers.

pub mod docs;
pub mod health;
pub mod projects;
