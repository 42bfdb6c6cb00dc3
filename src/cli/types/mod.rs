//! Type-safe wrappers and enums for roster data.

pub mod command;
pub mod ids;
