use blogging_core::db::open_db_in_memory;
use blogging_core::{
    BloggingRepository, EntityValidationError, RepoError, SqliteBloggingRepository,
};
use rusqlite::Connection;
use std::collections::HashSet;

#[test]
fn list_blogs_is_sorted_by_name_with_unique_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBloggingRepository::new(&conn);

    let names = ["Tech", "Life", "Art", "travel", "Zoo"];
    let mut ids = HashSet::new();
    for name in names {
        let id = repo.add_blog(name).unwrap();
        assert!(ids.insert(id), "id {id} was reused");
    }

    let listed: Vec<String> = repo
        .list_blogs()
        .unwrap()
        .into_iter()
        .map(|blog| blog.name)
        .collect();
    // Binary collation: uppercase sorts before lowercase.
    assert_eq!(listed, vec!["Art", "Life", "Tech", "Zoo", "travel"]);
}

#[test]
fn duplicate_names_keep_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBloggingRepository::new(&conn);

    let first = repo.add_blog("Same").unwrap();
    let second = repo.add_blog("Same").unwrap();

    let listed = repo.list_blogs().unwrap();
    assert_eq!(listed[0].blog_id, first);
    assert_eq!(listed[1].blog_id, second);
}

#[test]
fn add_blog_rejects_blank_name_without_writing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBloggingRepository::new(&conn);

    let err = repo.add_blog(" \t ").unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(EntityValidationError::BlankBlogName)
    ));
    assert_eq!(count_rows(&conn, "blogs"), 0);
}

#[test]
fn blog_exists_reflects_inserted_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBloggingRepository::new(&conn);
    let id = repo.add_blog("Tech").unwrap();

    assert!(repo.blog_exists(id).unwrap());
    assert!(!repo.blog_exists(id + 1).unwrap());
    assert!(!repo.blog_exists(0).unwrap());
}

#[test]
fn add_post_to_missing_blog_fails_in_storage() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBloggingRepository::new(&conn);

    let err = repo.add_post("Hello", None, 99).unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
    assert_eq!(count_rows(&conn, "posts"), 0);
}

#[test]
fn add_post_rejects_blank_title() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBloggingRepository::new(&conn);
    let blog_id = repo.add_blog("Tech").unwrap();

    let err = repo.add_post("   ", Some("body"), blog_id).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(EntityValidationError::BlankPostTitle)
    ));
    assert_eq!(count_rows(&conn, "posts"), 0);
}

#[test]
fn list_posts_joins_blog_name_and_filters() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBloggingRepository::new(&conn);
    let tech = repo.add_blog("Tech").unwrap();
    let life = repo.add_blog("Life").unwrap();

    let first = repo.add_post("Hello", Some("World"), tech).unwrap();
    let second = repo.add_post("Morning", None, life).unwrap();
    let third = repo.add_post("Rust", Some("ownership"), tech).unwrap();

    let all = repo.list_posts(None).unwrap();
    let all_ids: Vec<i64> = all.iter().map(|listing| listing.post.post_id).collect();
    assert_eq!(all_ids, vec![first, second, third]);
    assert_eq!(all[1].blog_name, "Life");
    assert_eq!(all[1].post.content, None);

    let tech_only = repo.list_posts(Some(tech)).unwrap();
    assert_eq!(tech_only.len(), 2);
    assert!(tech_only
        .iter()
        .all(|listing| listing.post.blog_id == tech && listing.blog_name == "Tech"));

    assert!(repo.list_posts(Some(99)).unwrap().is_empty());
}

#[test]
fn list_posts_reports_corrupted_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBloggingRepository::new(&conn);
    let blog_id = repo.add_blog("Tech").unwrap();
    repo.add_post("Hello", None, blog_id).unwrap();

    conn.execute_batch("PRAGMA ignore_check_constraints = ON;")
        .unwrap();
    conn.execute("UPDATE posts SET title = '  ';", []).unwrap();

    let err = repo.list_posts(None).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

fn count_rows(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
        row.get(0)
    })
    .unwrap()
}
