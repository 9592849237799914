use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// Build a Firefox-shaped cookie database at `path`. Each row is
/// (cookie name, originAttributes).
pub fn create_cookie_db(path: &Path, rows: &[(&str, &str)]) {
    let conn = Connection::open(path).expect("open cookies db");
    conn.execute("PRAGMA user_version = 16", [])
        .expect("set schema version");
    conn.execute(
        "CREATE TABLE moz_cookies (
            id INTEGER PRIMARY KEY,
            originAttributes TEXT NOT NULL DEFAULT '',
            name TEXT,
            value TEXT,
            host TEXT,
            path TEXT,
            expiry INTEGER,
            isSecure INTEGER,
            isHttpOnly INTEGER
        )",
        [],
    )
    .expect("create moz_cookies");
    for (name, attributes) in rows {
        conn.execute(
            "INSERT INTO moz_cookies (
                originAttributes, name, value, host, path, expiry, isSecure, isHttpOnly
            ) VALUES (?1, ?2, 'value', 'example.com', '/', 0, 0, 0)",
            (attributes, name),
        )
        .expect("insert cookie");
    }
}

/// The standard fixture rows: two uncontained cookies, two in
/// container 1, one in container 2 and one in container 11.
pub const FIXTURE_ROWS: &[(&str, &str)] = &[
    ("plain", ""),
    ("partitioned", "^partitionKey=(https,example.com)"),
    ("personal", "^userContextId=1"),
    (
        "personal-partitioned",
        "^userContextId=1&partitionKey=(https,example.com)",
    ),
    ("work", "^userContextId=2"),
    ("eleven", "^userContextId=11"),
];

/// Write a realistic containers.json next to the cookie database,
/// including the extra per-identity fields Firefox ships.
pub fn write_containers_json(profile_dir: &Path) {
    let registry = r#"{
  "version": 5,
  "lastUserContextId": 3,
  "identities": [
    {
      "userContextId": 1,
      "public": true,
      "icon": "fingerprint",
      "color": "blue",
      "name": "personal",
      "l10nID": "userContextPersonal.label"
    },
    {
      "userContextId": 2,
      "public": true,
      "icon": "briefcase",
      "color": "orange",
      "name": "work",
      "l10nID": "userContextWork.label"
    },
    {
      "userContextId": 3,
      "public": true,
      "icon": "dollar",
      "color": "green",
      "name": "banking",
      "l10nID": "userContextBanking.label"
    }
  ]
}"#;
    fs::write(profile_dir.join("containers.json"), registry).expect("write containers.json");
}

pub fn count_rows(path: &Path) -> u64 {
    let conn = Connection::open(path).expect("open cookies db");
    conn.query_row("SELECT COUNT(*) FROM moz_cookies", [], |row| row.get(0))
        .expect("count rows")
}

pub fn remaining_attributes(path: &Path) -> Vec<String> {
    let conn = Connection::open(path).expect("open cookies db");
    let mut stmt = conn
        .prepare("SELECT originAttributes FROM moz_cookies ORDER BY id")
        .expect("prepare");
    let rows = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .expect("query");
    rows.collect::<Result<_, _>>().expect("read rows")
}
