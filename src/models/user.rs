use serde::{Deserialize, Serialize};

use super::post::Post;

/// `users` 테이블의 전체 행. 비밀번호를 포함하므로 인증 조회에만 씁니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub name: String,
    pub location: String,
    pub active: bool,
}

/// 외부에 노출해도 되는 사용자 필드 (비밀번호 제외)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PublicUser {
    pub id: i64,
    pub username: String,
    pub name: String,
    pub location: String,
    pub active: bool,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            name: user.name,
            location: user.location,
            active: user.active,
        }
    }
}

/// `get_user_by_id`의 결과: 공개 필드와 작성한 게시글을 함께 담습니다.
#[derive(Debug, Clone, Serialize)]
pub struct UserProfile {
    #[serde(flatten)]
    pub user: PublicUser,
    pub posts: Vec<Post>,
}

/// 새 사용자 생성 요청. `active`는 DB 기본값(true)을 따릅니다.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
    pub name: String,
    pub location: String,
}

/// 수정 가능한 사용자 필드. None인 필드는 변경하지 않습니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub active: Option<bool>,
}

impl UpdateUserRequest {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.password.is_none()
            && self.name.is_none()
            && self.location.is_none()
            && self.active.is_none()
    }
}
