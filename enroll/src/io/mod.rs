//! Filesystem helpers: roster persistence and configuration.

pub mod config;
pub mod roster_store;
