//! # juicebox
//!
//! 작은 블로그 애플리케이션의 데이터 접근 계층입니다.
//! 사용자가 게시글을 쓰고, 게시글에는 태그가 붙습니다 (게시글-태그 다대다).
//!
//! ```ignore
//! let pool = juicebox::db::connect(&juicebox::Config::from_env()).await?;
//! juicebox::db::migrate(&pool).await?;
//! let posts = juicebox::db::list_posts_by_tag_name(&pool, "#happy").await?;
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod seed;

pub use config::Config;
pub use error::AppError;
