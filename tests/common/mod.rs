#![allow(dead_code)]

use juicebox::db;
use juicebox::models::*;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tempfile::TempDir;

/// 마이그레이션이 적용된 인메모리 SQLite 풀.
///
/// 인메모리 DB는 연결마다 따로 생기므로 연결 하나만 유지하고, 닫히지 않도록
/// idle/lifetime 회수를 끕니다.
pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
        .unwrap();

    db::migrate(&pool).await.unwrap();
    pool
}

/// 임시 디렉토리의 파일 DB에 연결하는, 연결이 여러 개인 풀.
///
/// 기본 설정과 같은 조건(파일 DB, 연결 5개)에서 동시 쓰기를 검증할 때 씁니다.
/// 반환된 `TempDir`이 살아 있는 동안만 DB 파일이 유지됩니다.
pub async fn test_file_pool() -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().unwrap();
    let options = SqliteConnectOptions::new()
        .filename(dir.path().join("juicebox.db"))
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .unwrap();

    db::migrate(&pool).await.unwrap();
    (dir, pool)
}

pub fn user_request(username: &str) -> CreateUserRequest {
    CreateUserRequest {
        username: username.to_string(),
        password: format!("{username}-secret"),
        name: format!("{username} name"),
        location: "Nowhere".to_string(),
    }
}

pub async fn create_user(pool: &SqlitePool, username: &str) -> User {
    db::create_user(pool, &user_request(username)).await.unwrap()
}

pub fn post_request(author_id: i64, title: &str, tags: &[&str]) -> CreatePostRequest {
    CreatePostRequest {
        author_id,
        title: title.to_string(),
        content: format!("{title} content"),
        tags: names(tags),
    }
}

pub fn names(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| t.to_string()).collect()
}

/// 게시글의 태그 이름을 정렬해서 반환
pub fn sorted_tag_names(post: &Post) -> Vec<String> {
    let mut names: Vec<String> = post.tags.iter().map(|t| t.name.clone()).collect();
    names.sort();
    names
}

pub async fn count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
