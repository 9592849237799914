//! Browser cookie deletion module
//!
//! This module handles locating a browser's cookie database and
//! deleting rows from it, per browser family.

use crate::config::{Browser, BrowserSpec};
use crate::error::Result;
use crate::logging::Logger;

pub mod firefox;

/// Main interface for deleting browser cookies
pub struct CookieDeleter {
    spec: BrowserSpec,
}

impl CookieDeleter {
    /// Create a new deleter for the given browser specification
    pub fn new(spec: BrowserSpec) -> Self {
        Self { spec }
    }

    /// Delete cookies according to the specification and report how
    /// many rows were removed.
    pub fn delete_cookies(&self, logger: &dyn Logger) -> Result<u64> {
        match self.spec.browser {
            Browser::Firefox => firefox::delete_cookies(&self.spec, logger),
        }
    }
}
