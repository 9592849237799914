//! CLI argument parsing module
//!
//! This module handles command-line argument parsing and the
//! application entry point.

use crate::browser::CookieDeleter;
use crate::config::BrowserSpec;
use crate::error::{Result, SweepError};
use crate::exit_code::exit_code_for_error;
use crate::logging::LogFacade;
use clap::{Arg, ArgMatches, Command};

/// Main entry point for the CLI application
pub fn run() {
    crate::logging::init();

    let app = create_app();
    let matches = app.get_matches();

    match run_with_args(&matches) {
        Ok(deleted) => println!("Successfully deleted {deleted} cookies."),
        Err(e) => {
            eprintln!("cookiesweep: error: {e}");
            std::process::exit(exit_code_for_error(&e));
        }
    }
}

/// Run the deletion with parsed command line arguments
fn run_with_args(matches: &ArgMatches) -> Result<u64> {
    let browser = matches
        .get_one::<String>("browser")
        .ok_or_else(|| SweepError::Config("A browser must be given".to_string()))?;

    let spec = BrowserSpec::parse(
        browser,
        matches.get_one::<String>("profile").cloned(),
        matches.get_one::<String>("keyring").cloned(),
        matches.get_one::<String>("container").cloned(),
    )?;

    CookieDeleter::new(spec).delete_cookies(&LogFacade)
}

/// Create the CLI application structure
fn create_app() -> Command {
    Command::new("cookiesweep")
        .version(crate::VERSION)
        .about("Delete Firefox cookies, optionally scoped to a container")
        .arg(
            Arg::new("browser")
                .short('b')
                .long("browser")
                .value_name("BROWSER")
                .help("Browser to delete cookies from (currently only \"firefox\")")
                .required(true),
        )
        .arg(
            Arg::new("profile")
                .short('p')
                .long("profile")
                .value_name("PATH|NAME")
                .help("Profile directory path, or a profile name under the default root"),
        )
        .arg(
            Arg::new("keyring")
                .long("keyring")
                .value_name("KEYRING")
                .help("Credential keyring reference (accepted but unused for firefox)"),
        )
        .arg(
            Arg::new("container")
                .short('c')
                .long("container")
                .value_name("CONTAINER")
                .help("Container name or label; \"none\" deletes only uncontained cookies"),
        )
}
