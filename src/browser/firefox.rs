//! Firefox cookie deletion
//!
//! Locates the profile's cookies.sqlite, optionally resolves a
//! container selector through the side-car containers.json, and runs
//! exactly one bulk DELETE against moz_cookies.

use crate::config::BrowserSpec;
use crate::error::{Result, SweepError};
use crate::logging::Logger;
use crate::utils::FileUtils;
use rusqlite::Connection;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Delete Firefox cookies per the specification.
///
/// The database must not be held open by a running Firefox process;
/// a locked database surfaces as a [`SweepError::DatabaseAccess`].
pub fn delete_cookies(spec: &BrowserSpec, logger: &dyn Logger) -> Result<u64> {
    logger.info("Deleting cookies from firefox");
    if let Some(keyring) = spec.keyring.as_deref() {
        logger.debug(&format!("Keyring \"{keyring}\" is not used for firefox"));
    }

    let search_root = firefox_search_root(spec.profile.as_deref())?;
    let cookie_db = find_most_recent_file(&search_root, "cookies.sqlite", logger)
        .ok_or_else(|| SweepError::DatabaseNotFound(search_root.to_string_lossy().into_owned()))?;
    logger.debug(&format!(
        "Deleting cookies from: \"{}\"",
        cookie_db.display()
    ));

    let mode = resolve_container(&cookie_db, spec.container.as_deref(), logger)?;
    delete_rows(&cookie_db, &mode, logger)
}

fn firefox_search_root(profile: Option<&str>) -> Result<PathBuf> {
    match profile {
        None => default_profile_root(),
        Some(profile) if FileUtils::is_path_like(profile) => FileUtils::expand_path(profile),
        Some(profile) => Ok(default_profile_root()?.join(profile)),
    }
}

fn default_profile_root() -> Result<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        let appdata = dirs::config_dir().ok_or_else(|| {
            SweepError::Config("Cannot determine the roaming AppData directory".to_string())
        })?;
        Ok(appdata.join("Mozilla").join("Firefox").join("Profiles"))
    }
    #[cfg(target_os = "macos")]
    {
        Ok(home_dir()?.join("Library/Application Support/Firefox"))
    }
    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        Ok(home_dir()?.join(".mozilla/firefox"))
    }
}

#[cfg(not(target_os = "windows"))]
fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| SweepError::Config("Cannot determine home directory".to_string()))
}

/// Walk `root` and return the matching file with the most recent
/// modification time, or `None` if there is no match.
///
/// Unreadable directories are skipped rather than aborting the search.
/// Ties on the modification time are broken by taking the
/// lexicographically smallest path, so repeated runs pick the same
/// profile. A `root` that is itself the target file is accepted as-is.
pub fn find_most_recent_file(root: &Path, filename: &str, logger: &dyn Logger) -> Option<PathBuf> {
    if root.is_file() && root.file_name().and_then(|name| name.to_str()) == Some(filename) {
        return Some(root.to_path_buf());
    }

    let mut scanned = 0usize;
    let mut matches = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(dir) = stack.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                stack.push(path);
            } else {
                scanned += 1;
                if scanned % 100 == 0 {
                    logger.info(&format!(
                        "Searching for \"{filename}\": {scanned} files searched"
                    ));
                }
                if path.file_name().and_then(|name| name.to_str()) == Some(filename) {
                    matches.push(path);
                }
            }
        }
    }
    logger.debug(&format!(
        "Searched {scanned} files under \"{}\"",
        root.display()
    ));

    newest_path(matches)
}

fn newest_path(paths: Vec<PathBuf>) -> Option<PathBuf> {
    paths
        .into_iter()
        .filter_map(|path| {
            let modified = fs::metadata(&path).ok()?.modified().ok()?;
            Some((modified, path))
        })
        .max_by(|(a_time, a_path), (b_time, b_path)| {
            a_time.cmp(b_time).then_with(|| b_path.cmp(a_path))
        })
        .map(|(_, path)| path)
}

/// Side-car registry mapping container names and labels to numeric
/// context IDs. Read fresh on every deletion call, never cached.
#[derive(Debug, Deserialize)]
struct ContainerRegistry {
    #[serde(default)]
    identities: Vec<ContainerIdentity>,
}

#[derive(Debug, Deserialize)]
struct ContainerIdentity {
    #[serde(default)]
    name: Option<String>,
    #[serde(rename = "l10nID", default)]
    l10n_id: Option<String>,
    #[serde(rename = "userContextId", default)]
    user_context_id: Option<i64>,
}

enum DeletionMode {
    All,
    Uncontained,
    Container(i64),
}

fn resolve_container(
    cookie_db: &Path,
    container: Option<&str>,
    logger: &dyn Logger,
) -> Result<DeletionMode> {
    // A selector literally named "none" always means "uncontained
    // cookies only"; a container named "none" is unreachable.
    let container = match container {
        None | Some("") => return Ok(DeletionMode::All),
        Some("none") => return Ok(DeletionMode::Uncontained),
        Some(container) => container,
    };

    let containers_path = cookie_db
        .parent()
        .map(|dir| dir.join("containers.json"))
        .ok_or_else(|| {
            SweepError::RegistryUnreadable(cookie_db.to_string_lossy().into_owned())
        })?;
    if !containers_path.is_file() {
        return Err(SweepError::RegistryUnreadable(
            containers_path.to_string_lossy().into_owned(),
        ));
    }

    let data = fs::read_to_string(&containers_path).map_err(|_| {
        SweepError::RegistryUnreadable(containers_path.to_string_lossy().into_owned())
    })?;
    let registry: ContainerRegistry = serde_json::from_str(&data)?;

    let id = resolve_context_id(&registry, container)
        .ok_or_else(|| SweepError::ContainerNotFound(container.to_string()))?;
    logger.debug(&format!(
        "Only deleting cookies from firefox container \"{container}\", ID {id}"
    ));
    Ok(DeletionMode::Container(id))
}

type Matcher = fn(&ContainerIdentity, &str) -> bool;

/// Ordered matcher predicates; the first identity in registry order
/// for which any predicate holds wins.
const MATCHERS: &[Matcher] = &[name_matches, l10n_label_matches];

fn resolve_context_id(registry: &ContainerRegistry, selector: &str) -> Option<i64> {
    registry
        .identities
        .iter()
        .find(|identity| MATCHERS.iter().any(|matches| matches(identity, selector)))
        .and_then(|identity| identity.user_context_id)
}

fn name_matches(identity: &ContainerIdentity, selector: &str) -> bool {
    identity.name.as_deref() == Some(selector)
}

fn l10n_label_matches(identity: &ContainerIdentity, selector: &str) -> bool {
    let Some(l10n_id) = identity.l10n_id.as_deref() else {
        return false;
    };
    let label = match l10n_id
        .strip_prefix("userContext")
        .and_then(|rest| rest.strip_suffix(".label"))
    {
        Some(label) if !label.is_empty() && !label.contains('.') => label,
        _ => return false,
    };
    label == selector
}

fn delete_rows(cookie_db: &Path, mode: &DeletionMode, logger: &dyn Logger) -> Result<u64> {
    // The connection closes on every exit path when it drops, including
    // when the DELETE statement fails.
    let conn = Connection::open(cookie_db)?;
    let deleted = match mode {
        DeletionMode::Container(id) => conn.execute(
            "DELETE FROM moz_cookies WHERE originAttributes LIKE ?1 OR originAttributes LIKE ?2",
            [
                format!("%userContextId={id}"),
                format!("%userContextId={id}&%"),
            ],
        )?,
        DeletionMode::Uncontained => {
            logger.debug("Only deleting cookies not belonging to any container");
            conn.execute(
                "DELETE FROM moz_cookies WHERE NOT INSTR(originAttributes, 'userContextId=')",
                [],
            )?
        }
        DeletionMode::All => conn.execute("DELETE FROM moz_cookies", [])?,
    };
    logger.info(&format!("Deleted {deleted} cookies from firefox"));
    Ok(deleted as u64)
}
