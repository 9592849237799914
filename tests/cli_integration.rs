mod common;

use assert_cmd::Command;
use common::{create_cookie_db, write_containers_json, FIXTURE_ROWS};
use tempfile::tempdir;

fn cookiesweep() -> Command {
    Command::cargo_bin("cookiesweep").expect("binary built")
}

#[test]
fn unsupported_browser_exits_with_distinct_code() {
    cookiesweep()
        .args(["--browser", "chrome"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn missing_database_exits_with_not_found_code() {
    let dir = tempdir().expect("tempdir");
    cookiesweep()
        .args(["-b", "firefox", "-p"])
        .arg(dir.path())
        .assert()
        .failure()
        .code(37);
}

#[test]
fn unknown_container_exits_with_not_found_code() {
    let dir = tempdir().expect("tempdir");
    create_cookie_db(&dir.path().join("cookies.sqlite"), FIXTURE_ROWS);
    write_containers_json(dir.path());

    cookiesweep()
        .args(["-b", "firefox", "-c", "shopping", "-p"])
        .arg(dir.path())
        .assert()
        .failure()
        .code(40);
}

#[test]
fn reports_the_deleted_cookie_count() {
    let dir = tempdir().expect("tempdir");
    create_cookie_db(&dir.path().join("cookies.sqlite"), FIXTURE_ROWS);

    cookiesweep()
        .args(["-b", "firefox", "-p"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(format!("Successfully deleted {} cookies.\n", FIXTURE_ROWS.len()));

    // A second run has nothing left to delete.
    cookiesweep()
        .args(["-b", "firefox", "-p"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout("Successfully deleted 0 cookies.\n");
}

#[test]
fn scoped_run_reports_only_container_rows() {
    let dir = tempdir().expect("tempdir");
    create_cookie_db(&dir.path().join("cookies.sqlite"), FIXTURE_ROWS);
    write_containers_json(dir.path());

    cookiesweep()
        .args(["-b", "firefox", "-c", "personal", "-p"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout("Successfully deleted 2 cookies.\n");
}
