//! cookiesweep - a Firefox container cookie deleter
//!
//! This crate locates a Firefox profile's cookie database on disk and
//! deletes cookie rows, optionally scoped to a contextual-identity
//! container resolved through the profile's containers.json.

pub mod browser;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit_code;
pub mod logging;
pub mod utils;

pub use error::{Result, SweepError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
