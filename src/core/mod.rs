//! Core utilities for the team roster console
//!
//! - `config`: configuration resolved from CLI flags and the environment
//! - `identity`: the session's LRU identity map
//! - `logging`: tracing subscriber setup

pub mod config;
pub mod identity;
pub mod logging;

pub use config::{AppConfig, DatabaseLocation};
pub use identity::IdentityMap;
