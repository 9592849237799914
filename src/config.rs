//! Configuration management for cookiesweep

use std::str::FromStr;

use crate::error::{Result, SweepError};
use crate::utils::FileUtils;

/// Browser families supported for cookie deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Browser {
    Firefox,
}

impl FromStr for Browser {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "firefox" => Ok(Browser::Firefox),
            _ => Err(()),
        }
    }
}

/// The four-element browser specification: browser, profile, keyring,
/// container. The keyring slot is part of the contract but unused by
/// the current deletion logic.
#[derive(Debug, Clone)]
pub struct BrowserSpec {
    pub browser: Browser,
    pub profile: Option<String>,
    pub keyring: Option<String>,
    pub container: Option<String>,
}

impl BrowserSpec {
    /// Validate a raw specification tuple.
    ///
    /// A path-like profile argument is shell-expanded here so the rest
    /// of the crate only ever sees ready-to-use paths.
    pub fn parse(
        browser: &str,
        profile: Option<String>,
        keyring: Option<String>,
        container: Option<String>,
    ) -> Result<Self> {
        let browser = browser
            .parse::<Browser>()
            .map_err(|_| SweepError::UnsupportedBrowser(browser.to_string()))?;

        let profile = match profile {
            Some(profile) if FileUtils::is_path_like(&profile) => {
                Some(FileUtils::expand_path(&profile)?.to_string_lossy().into_owned())
            }
            other => other,
        };

        Ok(BrowserSpec {
            browser,
            profile,
            keyring,
            container,
        })
    }
}
