//! # 데이터 모델 모듈
//!
//! 블로그 도메인의 데이터 구조체들을 정의합니다.
//! - `user`: 사용자(User)와 공개 프로젝션, 생성/수정 요청
//! - `post`: 게시글 원본 행과 hydration된 게시글, 생성/수정 요청
//! - `tag`: 태그와 게시글-태그 연결 행
//!
//! 하위 모듈의 항목을 재공개하므로 `crate::models::Post`처럼 짧게 쓸 수 있습니다.

pub mod post;
pub mod tag;
pub mod user;

pub use post::*;
pub use tag::*;
pub use user::*;
