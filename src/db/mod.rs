//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 블로그 데이터(사용자, 게시글, 태그)와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 모든 함수는 호출자가 넘겨준 `SqlitePool`에서 연결을 빌려 쓰고 작업이 끝나면 반환합니다.
//!
//! 각 하위 모듈:
//! - `users`: 사용자 생성/수정/조회
//! - `posts`: 게시글 생성/수정/조회와 hydration
//! - `tags`: 태그 보장(upsert), 게시글-태그 연결

pub mod posts;
pub mod tags;
pub mod users;

pub use posts::*;
pub use tags::*;
pub use users::*;

use crate::config::Config;
use crate::error::AppError;
use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// `./migrations` 폴더의 SQL 파일을 컴파일 타임에 포함한 마이그레이터
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// 설정값으로 SQLite 연결 풀을 생성합니다.
pub async fn connect(config: &Config) -> Result<SqlitePool, AppError> {
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await?;

    Ok(pool)
}

/// 아직 적용되지 않은 마이그레이션을 순서대로 실행합니다.
pub async fn migrate(pool: &SqlitePool) -> Result<(), AppError> {
    tracing::info!("Running database migrations...");
    MIGRATOR.run(pool).await?;
    Ok(())
}
