//! docsmith - AI-assisted API documentation service
//!
//! Accepts source code plus an API endpoint descriptor, generates
//! human-readable documentation through an external AI provider, and
//! persists the result keyed by (project, endpoint).

pub mod ai;
pub mod config;
pub mod error;
pub mod logging;
pub mod rest;
pub mod service;
pub mod store;
