//! # 에러 처리 모듈
//!
//! 데이터 접근 계층에서 발생할 수 있는 모든 에러를 `AppError` 하나로 통합합니다.
//! 모든 `db::*` 함수는 `Result<T, AppError>`를 반환합니다.
//!
//! ## 규칙
//! - 선택적으로 존재하는 행 조회(`get_tag_by_id`, `get_user_by_id` 등)는
//!   에러 대신 `Ok(None)`을 반환합니다.
//! - 게시글 hydration은 행이 없으면 `AppError::PostNotFound`를 반환합니다.
//! - 사용자명 충돌은 빈 결과 대신 `AppError::Conflict`로 알립니다.
//! - 드라이버 에러(`sqlx::Error`)는 변환 없이 `AppError::Database`로 감쌉니다.

use thiserror::Error;

/// 데이터 접근 계층의 에러 종류
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 ID의 게시글이 없음
    #[error("Could not find a post with id {0}")]
    PostNotFound(i64),

    /// 유일성 충돌 (예: 이미 존재하는 사용자명)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// 데이터베이스 드라이버 에러 (제약 조건 위반, 연결 실패 등)
    /// #[from] 덕분에 sqlx 호출 뒤의 `?`가 자동으로 이 variant로 변환됩니다.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// 마이그레이션 실행 실패
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

impl AppError {
    /// 게시글 미존재 에러인지 확인합니다.
    pub fn is_post_not_found(&self) -> bool {
        matches!(self, AppError::PostNotFound(_))
    }
}
