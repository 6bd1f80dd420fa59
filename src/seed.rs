//! # 데모 데이터
//!
//! 빈 데이터베이스에 사용자 세 명과 태그가 달린 게시글 세 개를 채웁니다.
//! 이미 사용자가 있으면 아무것도 하지 않습니다.

use crate::db;
use crate::error::AppError;
use crate::models::*;
use sqlx::SqlitePool;

fn demo_user(username: &str, password: &str, name: &str, location: &str) -> CreateUserRequest {
    CreateUserRequest {
        username: username.to_string(),
        password: password.to_string(),
        name: name.to_string(),
        location: location.to_string(),
    }
}

fn demo_post(author_id: i64, title: &str, content: &str, tags: &[&str]) -> CreatePostRequest {
    CreatePostRequest {
        author_id,
        title: title.to_string(),
        content: content.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// 데모 데이터를 채웠으면 `true`, 이미 데이터가 있어 건너뛰었으면 `false`
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<bool, AppError> {
    if !db::list_users(pool).await?.is_empty() {
        tracing::info!("Users already present, skipping demo data");
        return Ok(false);
    }

    tracing::info!("Starting to create users...");
    let albert = db::create_user(pool, &demo_user("albert", "bertie99", "Al Bert", "Sidney, Australia")).await?;
    let sandra = db::create_user(pool, &demo_user("sandra", "2sandy4me", "Just Sandra", "Ain't tellin'")).await?;
    let glamgal = db::create_user(pool, &demo_user("glamgal", "soglam", "Joshua", "Upper East Side")).await?;
    tracing::info!("Finished creating users!");

    tracing::info!("Starting to create posts...");
    db::create_post(
        pool,
        &demo_post(
            albert.id,
            "First Post",
            "This is my first post. I hope I love writing blogs as much as I love writing them.",
            &["#happy", "#youcandoanything"],
        ),
    )
    .await?;
    db::create_post(
        pool,
        &demo_post(
            sandra.id,
            "Second Post",
            "Maybe I live in a desert, you'll never know.",
            &["#worst-day-ever", "#youcandoanything"],
        ),
    )
    .await?;
    db::create_post(
        pool,
        &demo_post(
            glamgal.id,
            "Third Post",
            "My first step on the road to being an influencer.",
            &["#happy", "#youcandoanything", "#catmandoeverything"],
        ),
    )
    .await?;
    tracing::info!("Finished creating posts!");

    Ok(true)
}
