use super::posts;
use crate::error::AppError;
use crate::models::*;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

pub async fn list_users(pool: &SqlitePool) -> Result<Vec<PublicUser>, AppError> {
    let users = sqlx::query_as::<_, PublicUser>(
        r#"
        SELECT id, username, name, location, active
        FROM users
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// 새 사용자를 만듭니다. 사용자명이 이미 있으면 아무것도 삽입하지 않고
/// `AppError::Conflict`를 반환합니다.
pub async fn create_user(pool: &SqlitePool, req: &CreateUserRequest) -> Result<User, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (username, password, name, location)
        VALUES (?, ?, ?, ?)
        ON CONFLICT (username) DO NOTHING
        RETURNING id, username, password, name, location, active
        "#,
    )
    .bind(&req.username)
    .bind(&req.password)
    .bind(&req.name)
    .bind(&req.location)
    .fetch_optional(pool)
    .await?;

    user.ok_or_else(|| {
        tracing::warn!(username = %req.username, "Username already exists, insert skipped");
        AppError::Conflict(format!("username '{}' already exists", req.username))
    })
}

/// 요청에 들어 있는 필드만 수정합니다.
///
/// - 수정할 필드가 없으면 쿼리 없이 `Ok(None)`
/// - 해당 ID의 사용자가 없으면 `Ok(None)`
/// - 그 외에는 수정된 전체 행
pub async fn update_user(
    pool: &SqlitePool,
    id: i64,
    req: &UpdateUserRequest,
) -> Result<Option<User>, AppError> {
    if req.is_empty() {
        return Ok(None);
    }

    let mut query = QueryBuilder::<Sqlite>::new("UPDATE users SET ");
    push_user_assignments(&mut query, req);
    query.push(" WHERE id = ");
    query.push_bind(id);
    query.push(" RETURNING id, username, password, name, location, active");

    let user = query.build_query_as::<User>().fetch_optional(pool).await?;
    Ok(user)
}

fn push_user_assignments<'args>(query: &mut QueryBuilder<'args, Sqlite>, req: &'args UpdateUserRequest) {
    let mut set = query.separated(", ");
    if let Some(username) = &req.username {
        set.push("username = ").push_bind_unseparated(username.as_str());
    }
    if let Some(password) = &req.password {
        set.push("password = ").push_bind_unseparated(password.as_str());
    }
    if let Some(name) = &req.name {
        set.push("name = ").push_bind_unseparated(name.as_str());
    }
    if let Some(location) = &req.location {
        set.push("location = ").push_bind_unseparated(location.as_str());
    }
    if let Some(active) = req.active {
        set.push("active = ").push_bind_unseparated(active);
    }
}

/// 공개 프로젝션과 작성한 게시글(태그·작성자 포함)을 함께 반환합니다.
pub async fn get_user_by_id(pool: &SqlitePool, id: i64) -> Result<Option<UserProfile>, AppError> {
    let user = sqlx::query_as::<_, PublicUser>(
        r#"
        SELECT id, username, name, location, active
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    let Some(user) = user else {
        return Ok(None);
    };

    let posts = posts::list_posts_by_user(pool, user.id).await?;
    Ok(Some(UserProfile { user, posts }))
}

/// 비밀번호를 포함한 전체 행을 사용자명으로 조회합니다. 인증 용도.
pub async fn get_user_by_username(pool: &SqlitePool, username: &str) -> Result<Option<User>, AppError> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password, name, location, active
        FROM users
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
