//! # 게시글 데이터베이스 쿼리 모듈
//!
//! `posts` 테이블에 대한 생성/수정/조회 함수와, 게시글에 태그·작성자를 붙이는
//! hydration 로직이 정의되어 있습니다.
//!
//! 여러 문장으로 이루어진 쓰기 작업(`create_post`, `update_post`)은 하나의 트랜잭션으로
//! 묶이고, hydration은 커밋 이후 풀에서 수행됩니다.

use super::tags;
use crate::error::AppError;
use crate::models::*;
use futures_util::future::try_join_all;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

/// 새 게시글을 만들고 태그를 연결한 뒤, hydration된 게시글을 반환합니다.
///
/// 게시글 INSERT, 태그 보장(`ensure_tags`), 연결 INSERT가 한 트랜잭션에서 실행되므로
/// 중간에 실패하면 게시글도 남지 않습니다.
pub async fn create_post(pool: &SqlitePool, req: &CreatePostRequest) -> Result<Post, AppError> {
    tracing::debug!(author_id = req.author_id, tags = ?req.tags, "Creating post");

    let post_id = insert_post_with_tags(pool, req)
        .await
        .inspect_err(|e| tracing::error!(author_id = req.author_id, "Error creating post: {}", e))?;

    get_post_by_id(pool, post_id).await
}

async fn insert_post_with_tags(pool: &SqlitePool, req: &CreatePostRequest) -> Result<i64, AppError> {
    let mut tx = pool.begin().await?;

    let post_id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO posts (author_id, title, content)
        VALUES (?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(req.author_id)
    .bind(&req.title)
    .bind(&req.content)
    .fetch_one(&mut *tx)
    .await?;

    let tag_list = tags::ensure_tags(&mut *tx, &req.tags).await?;
    for tag in &tag_list {
        tags::link_tag(&mut *tx, post_id, tag.id).await?;
    }

    tx.commit().await?;
    Ok(post_id)
}

/// 게시글을 수정하고 hydration된 게시글을 반환합니다.
///
/// - 스칼라 필드(title, content, active)가 있으면 게시글 ID로 행을 찾아 UPDATE
/// - `tags`가 Some이면 태그 집합을 교체: 필요한 태그를 만들고, 새 집합에 없는 연결은
///   삭제하고, 빠진 연결은 추가합니다. 이미 있는 연결은 그대로 둡니다.
///
/// 게시글이 없으면 `AppError::PostNotFound`를 반환합니다.
pub async fn update_post(
    pool: &SqlitePool,
    post_id: i64,
    req: &UpdatePostRequest,
) -> Result<Post, AppError> {
    tracing::debug!(post_id, "Updating post");

    apply_post_update(pool, post_id, req)
        .await
        .inspect_err(|e| tracing::error!(post_id, "Error updating post: {}", e))?;

    get_post_by_id(pool, post_id).await
}

async fn apply_post_update(
    pool: &SqlitePool,
    post_id: i64,
    req: &UpdatePostRequest,
) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;

    // 첫 문장은 항상 쓰기여야 합니다. 읽기로 시작한 트랜잭션은 다른 연결이 커밋한 뒤
    // 쓰기 잠금으로 올라갈 수 없어 곧바로 SQLITE_BUSY가 됩니다.
    // 영향받은 행이 없으면 게시글이 없는 것입니다.
    let touched = if req.has_scalar_fields() {
        let mut query = QueryBuilder::<Sqlite>::new("UPDATE posts SET ");
        push_post_assignments(&mut query, req);
        query.push(" WHERE id = ");
        query.push_bind(post_id);
        let result = query.build().execute(&mut *tx).await?;
        result.rows_affected()
    } else {
        sqlx::query("UPDATE posts SET id = id WHERE id = ?")
            .bind(post_id)
            .execute(&mut *tx)
            .await?
            .rows_affected()
    };
    if touched == 0 {
        return Err(AppError::PostNotFound(post_id));
    }

    if let Some(names) = &req.tags {
        let tag_list = tags::ensure_tags(&mut *tx, names).await?;
        let keep: Vec<i64> = tag_list.iter().map(|t| t.id).collect();

        let (removed, added) = tags::sync_post_tags(&mut *tx, post_id, &keep).await?;
        tracing::debug!(post_id, removed, added, kept = keep.len(), "Replaced post tags");
    }

    tx.commit().await?;
    Ok(())
}

/// `title = ?, content = ?, active = ?` 중 값이 있는 항목만 추가합니다.
fn push_post_assignments<'args>(query: &mut QueryBuilder<'args, Sqlite>, req: &'args UpdatePostRequest) {
    let mut set = query.separated(", ");
    if let Some(title) = &req.title {
        set.push("title = ").push_bind_unseparated(title.as_str());
    }
    if let Some(content) = &req.content {
        set.push("content = ").push_bind_unseparated(content.as_str());
    }
    if let Some(active) = req.active {
        set.push("active = ").push_bind_unseparated(active);
    }
}

/// 모든 게시글을 조회합니다. 각 게시글은 개별적으로, 동시에 hydration됩니다.
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<Post>, AppError> {
    let ids: Vec<i64> = sqlx::query_scalar("SELECT id FROM posts ORDER BY id")
        .fetch_all(pool)
        .await?;

    hydrate_all(pool, ids).await
}

/// 특정 사용자가 작성한 게시글을 조회합니다.
pub async fn list_posts_by_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Post>, AppError> {
    let ids: Vec<i64> = sqlx::query_scalar("SELECT id FROM posts WHERE author_id = ? ORDER BY id")
        .bind(user_id)
        .fetch_all(pool)
        .await?;

    hydrate_all(pool, ids).await
}

/// 주어진 이름의 태그가 붙은 게시글을 조회합니다. 태그가 없으면 빈 Vec입니다.
pub async fn list_posts_by_tag_name(
    pool: &SqlitePool,
    tag_name: &str,
) -> Result<Vec<Post>, AppError> {
    let ids: Vec<i64> = sqlx::query_scalar(
        r#"
        SELECT p.id
        FROM posts p
        JOIN post_tags pt ON pt.post_id = p.id
        JOIN tags t ON t.id = pt.tag_id
        WHERE t.name = ?
        ORDER BY p.id
        "#,
    )
    .bind(tag_name)
    .fetch_all(pool)
    .await?;

    hydrate_all(pool, ids).await
}

/// ID로 게시글 하나를 조회하고 태그와 작성자를 붙입니다.
///
/// 조회 순서: 게시글 행 → 연결된 태그 → 작성자 공개 프로젝션.
/// 게시글이 없으면 `AppError::PostNotFound(id)`를 반환합니다.
pub async fn get_post_by_id(pool: &SqlitePool, id: i64) -> Result<Post, AppError> {
    let row = sqlx::query_as::<_, PostRow>(
        "SELECT id, author_id, title, content, active FROM posts WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| {
        tracing::debug!(post_id = id, "Post not found");
        AppError::PostNotFound(id)
    })?;

    let tag_list = tags::get_post_tags(pool, id).await?;

    // author_id는 NOT NULL 외래키이므로 작성자 행은 항상 존재합니다.
    let author = sqlx::query_as::<_, PublicUser>(
        "SELECT id, username, name, location, active FROM users WHERE id = ?",
    )
    .bind(row.author_id)
    .fetch_one(pool)
    .await?;

    Ok(Post::hydrate(row, tag_list, author))
}

async fn hydrate_all(pool: &SqlitePool, ids: Vec<i64>) -> Result<Vec<Post>, AppError> {
    try_join_all(ids.into_iter().map(|id| get_post_by_id(pool, id))).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_assignments_skip_missing_fields() {
        let req = UpdatePostRequest {
            title: Some("Edited".into()),
            active: Some(false),
            ..Default::default()
        };
        let mut query = QueryBuilder::<Sqlite>::new("UPDATE posts SET ");
        push_post_assignments(&mut query, &req);
        assert_eq!(query.sql(), "UPDATE posts SET title = ?, active = ?");
    }
}
