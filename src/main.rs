//! # juicebox 부트스트랩 진입점
//!
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. SQLite 연결 풀 생성 및 마이그레이션
//! 4. 빈 DB라면 데모 데이터 채우기
//! 5. 주요 조회/수정 함수를 한 번씩 호출하고 결과를 JSON으로 출력

use anyhow::Result;
use juicebox::{
    db,
    models::{UpdatePostRequest, UpdateUserRequest},
    seed, Config,
};
use serde::Serialize;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "juicebox=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!("Connecting to {}", config.database_url);

    // 파일 기반 SQLite라면 DB 파일이 들어갈 디렉토리를 먼저 만듭니다.
    if let Some(parent) = sqlite_file_dir(&config.database_url) {
        if !parent.exists() {
            tokio::fs::create_dir_all(parent).await?;
            tracing::info!("Created database directory: {}", parent.display());
        }
    }

    let pool = db::connect(&config).await?;
    db::migrate(&pool).await?;

    if config.seed_demo_data {
        seed::seed_demo_data(&pool).await?;
    }

    let result = exercise(&pool).await;
    pool.close().await;
    result
}

/// 데모 데이터 위에서 주요 연산을 차례로 실행합니다.
async fn exercise(pool: &sqlx::SqlitePool) -> Result<()> {
    let users = db::list_users(pool).await?;
    print_json("list_users", &users)?;

    let Some(first_user) = users.first() else {
        tracing::warn!("No users in database, nothing else to do");
        return Ok(());
    };

    let updated = db::update_user(
        pool,
        first_user.id,
        &UpdateUserRequest {
            name: Some("Newname Sogood".to_string()),
            location: Some("Lesterville, KY".to_string()),
            ..Default::default()
        },
    )
    .await?;
    print_json("update_user", &updated)?;

    let posts = db::list_posts(pool).await?;
    print_json("list_posts", &posts)?;

    if let Some(first_post) = posts.first() {
        let edited = db::update_post(
            pool,
            first_post.id,
            &UpdatePostRequest {
                title: Some("Edited First Post".to_string()),
                content: Some(
                    "This is my first post. I hope people love reading my blogs as much as I love writing them."
                        .to_string(),
                ),
                ..Default::default()
            },
        )
        .await?;
        print_json("update_post", &edited)?;
    }

    if let Some(second_post) = posts.get(1) {
        let retagged = db::update_post(
            pool,
            second_post.id,
            &UpdatePostRequest {
                tags: Some(vec![
                    "#youcandoanything".to_string(),
                    "#redfish".to_string(),
                    "#bluefish".to_string(),
                ]),
                ..Default::default()
            },
        )
        .await?;
        print_json("update_post (tags only)", &retagged)?;
    }

    let profile = db::get_user_by_id(pool, first_user.id).await?;
    print_json("get_user_by_id", &profile)?;

    let happy = db::list_posts_by_tag_name(pool, "#happy").await?;
    print_json("list_posts_by_tag_name #happy", &happy)?;

    let tags = db::list_tags(pool).await?;
    print_json("list_tags", &tags)?;

    Ok(())
}

/// "sqlite:data/juicebox.db?mode=rwc" → Some("data")
fn sqlite_file_dir(url: &str) -> Option<&Path> {
    let path = url.strip_prefix("sqlite:")?.trim_start_matches("//");
    let path = path.split('?').next()?;
    if path.is_empty() || path.starts_with(':') {
        return None;
    }
    Path::new(path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
}

fn print_json<T: Serialize>(label: &str, value: &T) -> Result<()> {
    println!("{label}:\n{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
