//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 데이터베이스 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목:
//! - `DATABASE_URL`: SQLite 데이터베이스 주소 (기본값: 로컬 개발용 DB)
//! - `DATABASE_MAX_CONNECTIONS`: 연결 풀의 최대 연결 수
//! - `SEED_DEMO_DATA`: 빈 DB에 데모 데이터를 넣을지 여부

use std::env;

/// 로컬 개발용 기본 데이터베이스 주소. `mode=rwc`는 파일이 없으면 생성합니다.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:data/juicebox.db?mode=rwc";

/// 연결 풀 기본 크기
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// 애플리케이션 전체 설정을 담는 구조체
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite 데이터베이스 주소 (예: "sqlite:data/juicebox.db?mode=rwc")
    pub database_url: String,
    /// 연결 풀의 최대 연결 수
    pub max_connections: u32,
    /// 사용자가 없는 DB에 데모 데이터를 채울지 여부
    pub seed_demo_data: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            seed_demo_data: true,
        }
    }
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// 모든 항목에 기본값이 있으므로 실패하지 않습니다.
    /// 숫자/불리언 파싱에 실패하면 기본값을 사용합니다.
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_CONNECTIONS),
            seed_demo_data: env::var("SEED_DEMO_DATA")
                .map(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }
}

/// "0", "false", "no", "off"(대소문자 무시)는 false, 그 외는 true
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
