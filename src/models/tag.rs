//! # 태그 모델 정의
//!
//! 태그는 게시글을 분류하는 라벨이며, 이름은 전역적으로 유일합니다.
//! 게시글과 태그는 `post_tags` 연결 테이블을 통한 다대다(N:M) 관계입니다.

use serde::{Deserialize, Serialize};

/// 태그 엔티티 — DB의 `tags` 테이블 한 행에 대응합니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::FromRow)]
pub struct Tag {
    pub id: i64,
    /// 태그 이름 (예: "#happy")
    pub name: String,
}

/// 게시글-태그 연결 행 — `(post_id, tag_id)` 쌍은 유일합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PostTag {
    pub post_id: i64,
    pub tag_id: i64,
}
