//! # 태그 데이터베이스 쿼리 모듈
//!
//! 태그 생성/조회 및 게시글-태그 관계를 관리하는 SQL 쿼리 함수들입니다.
//!
//! ## 테이블 구조
//! - `tags`: 태그 엔티티 (id, name) — name은 UNIQUE
//! - `post_tags`: 게시글과 태그의 다대다(N:M) 관계 테이블 — (post_id, tag_id) UNIQUE
//!
//! 공개 함수는 `&SqlitePool`을 받고, 게시글 모듈의 트랜잭션 안에서 재사용되는
//! 내부 함수(`ensure_tags`, `link_tag`, `sync_post_tags`)는 연결이나 executor를 받습니다.

use crate::error::AppError;
use crate::models::*;
use futures_util::future::try_join_all;
use sqlx::{Executor, QueryBuilder, Sqlite, SqliteConnection, SqlitePool};
use std::collections::HashSet;

/// 한 문장에 바인딩하는 값의 최대 개수. SQLite의 바인딩 한도(32766)보다 충분히 작게 잡습니다.
pub(crate) const BIND_CHUNK: usize = 500;

/// 태그 이름 목록에 해당하는 태그들이 존재하도록 보장하고, 그 행들을 반환합니다.
///
/// 이미 있는 이름은 `ON CONFLICT (name) DO NOTHING`으로 건너뛰므로 몇 번을 호출해도
/// 중복 행이 생기지 않습니다. 반환값은 요청한 고유 이름마다 한 행이며 ID 순입니다.
/// 빈 목록이면 쿼리 없이 빈 Vec을 반환합니다. 목록 길이에는 제한이 없습니다.
pub async fn create_tags(pool: &SqlitePool, names: &[String]) -> Result<Vec<Tag>, AppError> {
    let mut conn = pool.acquire().await?;
    ensure_tags(&mut *conn, names).await
}

/// `create_tags`의 본체. 트랜잭션 안에서도 쓸 수 있도록 연결을 직접 받습니다.
pub(crate) async fn ensure_tags(
    conn: &mut SqliteConnection,
    names: &[String],
) -> Result<Vec<Tag>, AppError> {
    let unique = unique_names(names);
    if unique.is_empty() {
        return Ok(Vec::new());
    }

    let mut tags = Vec::with_capacity(unique.len());
    for chunk in unique.chunks(BIND_CHUNK) {
        // INSERT INTO tags (name) VALUES (?), (?), ... ON CONFLICT (name) DO NOTHING
        let mut insert = QueryBuilder::<Sqlite>::new("INSERT INTO tags (name) ");
        insert.push_values(chunk.iter(), |mut row, name| {
            row.push_bind(*name);
        });
        insert.push(" ON CONFLICT (name) DO NOTHING");
        insert.build().execute(&mut *conn).await?;

        // 새로 생긴 태그와 기존 태그를 함께 조회
        let mut select = QueryBuilder::<Sqlite>::new("SELECT id, name FROM tags WHERE name IN (");
        let mut separated = select.separated(", ");
        for name in chunk {
            separated.push_bind(*name);
        }
        separated.push_unseparated(")");

        tags.extend(select.build_query_as::<Tag>().fetch_all(&mut *conn).await?);
    }

    tags.sort_by_key(|t| t.id);
    Ok(tags)
}

/// 게시글과 태그를 연결합니다.
///
/// 새로 연결되면 `Some(PostTag)`, 이미 연결되어 있으면 아무것도 하지 않고 `None`입니다.
pub async fn create_post_tag(
    pool: &SqlitePool,
    post_id: i64,
    tag_id: i64,
) -> Result<Option<PostTag>, AppError> {
    link_tag(pool, post_id, tag_id).await
}

pub(crate) async fn link_tag<'e, E>(
    executor: E,
    post_id: i64,
    tag_id: i64,
) -> Result<Option<PostTag>, AppError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let link = sqlx::query_as::<_, PostTag>(
        r#"
        INSERT INTO post_tags (post_id, tag_id)
        VALUES (?, ?)
        ON CONFLICT (post_id, tag_id) DO NOTHING
        RETURNING post_id, tag_id
        "#,
    )
    .bind(post_id)
    .bind(tag_id)
    .fetch_optional(executor)
    .await?;

    Ok(link)
}

/// 게시글의 태그 연결을 `keep` 집합과 같게 맞춥니다.
///
/// 현재 연결을 읽어 `keep`에 없는 것은 삭제하고, 빠진 것만 추가합니다.
/// 이미 있는 연결은 건드리지 않습니다. 반환값은 (삭제 수, 추가 수)입니다.
pub(crate) async fn sync_post_tags(
    conn: &mut SqliteConnection,
    post_id: i64,
    keep: &[i64],
) -> Result<(usize, usize), AppError> {
    let current: HashSet<i64> = sqlx::query_scalar("SELECT tag_id FROM post_tags WHERE post_id = ?")
        .bind(post_id)
        .fetch_all(&mut *conn)
        .await?
        .into_iter()
        .collect();
    let wanted: HashSet<i64> = keep.iter().copied().collect();

    let stale: Vec<i64> = current.difference(&wanted).copied().collect();
    for chunk in stale.chunks(BIND_CHUNK) {
        let mut delete = QueryBuilder::<Sqlite>::new("DELETE FROM post_tags WHERE post_id = ");
        delete.push_bind(post_id);
        delete.push(" AND tag_id IN (");
        let mut separated = delete.separated(", ");
        for tag_id in chunk {
            separated.push_bind(*tag_id);
        }
        separated.push_unseparated(")");
        delete.build().execute(&mut *conn).await?;
    }

    let mut added = 0;
    for tag_id in wanted.difference(&current) {
        if link_tag(&mut *conn, post_id, *tag_id).await?.is_some() {
            added += 1;
        }
    }

    Ok((stale.len(), added))
}

/// 게시글에 태그 목록을 연결한 뒤, hydration된 게시글을 반환합니다.
///
/// 연결은 한 트랜잭션 안에서 수행되며, 하나라도 실패하면 전부 롤백됩니다.
pub async fn add_tags_to_post(
    pool: &SqlitePool,
    post_id: i64,
    tags: &[Tag],
) -> Result<Post, AppError> {
    let mut tx = pool.begin().await?;
    for tag in tags {
        link_tag(&mut *tx, post_id, tag.id)
            .await
            .inspect_err(|e| tracing::error!(post_id, tag_id = tag.id, "Error linking tag: {}", e))?;
    }
    tx.commit().await?;

    super::posts::get_post_by_id(pool, post_id).await
}

/// 모든 태그를 조회합니다.
///
/// 먼저 ID 목록을 가져온 뒤 각 태그를 `get_tag_by_id`로 동시에 조회합니다.
pub async fn list_tags(pool: &SqlitePool) -> Result<Vec<Tag>, AppError> {
    let ids: Vec<i64> = sqlx::query_scalar("SELECT id FROM tags ORDER BY id")
        .fetch_all(pool)
        .await?;

    let tags = try_join_all(ids.into_iter().map(|id| get_tag_by_id(pool, id))).await?;

    // 태그는 삭제되지 않으므로 None은 나오지 않지만, 나오더라도 건너뜁니다.
    Ok(tags.into_iter().flatten().collect())
}

/// ID로 태그 하나를 조회합니다. 없으면 에러 대신 `Ok(None)`을 반환합니다.
pub async fn get_tag_by_id(pool: &SqlitePool, id: i64) -> Result<Option<Tag>, AppError> {
    let tag = sqlx::query_as::<_, Tag>("SELECT id, name FROM tags WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(tag)
}

/// 특정 게시글에 연결된 모든 태그를 조회합니다.
///
/// ```sql
/// tags ←── post_tags ──→ posts
/// ```
pub async fn get_post_tags<'e, E>(executor: E, post_id: i64) -> Result<Vec<Tag>, AppError>
where
    E: Executor<'e, Database = Sqlite>,
{
    let tags = sqlx::query_as::<_, Tag>(
        r#"
        SELECT t.id, t.name
        FROM tags t
        JOIN post_tags pt ON pt.tag_id = t.id
        WHERE pt.post_id = ?
        ORDER BY t.id
        "#,
    )
    .bind(post_id)
    .fetch_all(executor)
    .await?;

    Ok(tags)
}

/// 순서를 유지하면서 중복 이름을 제거합니다.
fn unique_names(names: &[String]) -> Vec<&str> {
    let mut seen = HashSet::new();
    names
        .iter()
        .map(String::as_str)
        .filter(|name| seen.insert(*name))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_names_keeps_first_occurrence_order() {
        let names: Vec<String> = ["#b", "#a", "#b", "#c", "#a"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(unique_names(&names), vec!["#b", "#a", "#c"]);
    }
}
