//! Logging initialization and the injected logging capability.

use env_logger::Env;

/// Initialize logging with a default filter level.
pub fn init() {
    let env = Env::default().default_filter_or("info");
    env_logger::Builder::from_env(env).init();
}

/// Logging sink passed into every library entry point.
///
/// The library never logs through a process-wide singleton directly;
/// callers inject an implementation of this trait instead.
pub trait Logger {
    fn info(&self, message: &str);
    fn debug(&self, message: &str);
    fn warn(&self, message: &str);
}

/// Default [`Logger`] forwarding to the `log` crate macros.
#[derive(Debug, Default)]
pub struct LogFacade;

impl Logger for LogFacade {
    fn info(&self, message: &str) {
        log::info!("{message}");
    }

    fn debug(&self, message: &str) {
        log::debug!("{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }
}
