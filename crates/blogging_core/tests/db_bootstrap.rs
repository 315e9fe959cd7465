use blogging_core::db::{open_db, open_db_in_memory};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_schema() {
    let conn = open_db_in_memory().unwrap();

    assert_table_exists(&conn, "blogs");
    assert_table_exists(&conn, "posts");
}

#[test]
fn open_db_creates_missing_file_and_reopens_idempotently() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("blogging.db");
    assert!(!path.exists());

    let conn_first = open_db(&path).unwrap();
    conn_first
        .execute("INSERT INTO blogs (name) VALUES ('Tech');", [])
        .unwrap();
    drop(conn_first);
    assert!(path.exists());

    let conn_second = open_db(&path).unwrap();
    let blog_count: i64 = conn_second
        .query_row("SELECT COUNT(*) FROM blogs;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(blog_count, 1);
}

#[test]
fn open_db_keeps_rows_written_by_other_connections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shared.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(
        "CREATE TABLE blogs (
            blog_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        );
        INSERT INTO blogs (name) VALUES ('Existing');",
    )
    .unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_table_exists(&conn, "posts");
    let name: String = conn
        .query_row("SELECT name FROM blogs;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(name, "Existing");
}

#[test]
fn foreign_keys_are_enforced_on_opened_connections() {
    let conn = open_db_in_memory().unwrap();
    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);

    let result = conn.execute(
        "INSERT INTO posts (title, content, blog_id) VALUES ('orphan', NULL, 42);",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn schema_rejects_blank_names_and_titles() {
    let conn = open_db_in_memory().unwrap();
    assert!(conn
        .execute("INSERT INTO blogs (name) VALUES ('   ');", [])
        .is_err());

    conn.execute("INSERT INTO blogs (name) VALUES ('Tech');", [])
        .unwrap();
    assert!(conn
        .execute(
            "INSERT INTO posts (title, content, blog_id) VALUES ('', NULL, 1);",
            [],
        )
        .is_err());
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
