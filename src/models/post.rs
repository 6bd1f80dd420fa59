//! # 게시글 모델 정의
//!
//! ## 구조체 역할
//! - `PostRow`: `posts` 테이블의 원본 행 (author_id 포함)
//! - `Post`: 태그와 작성자를 붙인(hydration) 응답용 게시글. author_id는 노출하지 않습니다.
//! - `CreatePostRequest` / `UpdatePostRequest`: 생성·수정 요청

use serde::{Deserialize, Serialize};

use super::tag::Tag;
use super::user::PublicUser;

/// `posts` 테이블 한 행
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct PostRow {
    pub id: i64,
    pub author_id: i64,
    pub title: String,
    pub content: String,
    pub active: bool,
}

/// 태그와 작성자가 채워진 게시글
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub active: bool,
    pub tags: Vec<Tag>,
    pub author: PublicUser,
}

impl Post {
    /// 원본 행에 태그와 작성자를 붙여 `Post`를 만듭니다. `author_id`는 버려집니다.
    pub fn hydrate(row: PostRow, tags: Vec<Tag>, author: PublicUser) -> Self {
        Self {
            id: row.id,
            title: row.title,
            content: row.content,
            active: row.active,
            tags,
            author,
        }
    }
}

/// 새 게시글 생성 요청
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostRequest {
    pub author_id: i64,
    pub title: String,
    pub content: String,
    /// 태그 이름 목록. 없는 태그는 생성됩니다.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// 게시글 수정 요청
///
/// `tags`가 None이면 태그 연결을 건드리지 않고,
/// Some(목록)이면 태그 집합을 그 목록으로 교체합니다 (빈 목록이면 모두 해제).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub active: Option<bool>,
    pub tags: Option<Vec<String>>,
}

impl UpdatePostRequest {
    /// 스칼라 필드(title, content, active) 중 하나라도 있는지
    pub fn has_scalar_fields(&self) -> bool {
        self.title.is_some() || self.content.is_some() || self.active.is_some()
    }
}
