//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 실행 환경, 비밀번호 해싱 비용 설정을 관리합니다.
//! 모든 값은 환경 변수에서 읽으며, 잘못된 숫자 값은 경고 로그와 함께 기본값으로 대체됩니다.

use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경 - JWT 비밀키 필수
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let env = Environment::current();
    /// if env.is_production() {
    ///     // 비밀키 기본값 사용 금지
    /// }
    /// ```
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 환경 변수 값을 파싱하고, 없거나 잘못된 값이면 기본값을 사용합니다.
///
/// 잘못된 값은 경고 로그를 남깁니다. 값 자체는 비밀 정보가 아닌 숫자/플래그에만 사용하세요.
pub fn parse_or_default<T>(name: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Display + Copy,
{
    match raw {
        None => default,
        Some(value) => match value.trim().parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                log::warn!("{} 값 '{}'이(가) 올바르지 않아 기본값 {}을(를) 사용합니다", name, value, default);
                default
            }
        },
    }
}

/// 환경 변수를 읽어 [`parse_or_default`]로 해석합니다.
pub fn env_or<T>(name: &str, default: T) -> T
where
    T: FromStr + Display + Copy,
{
    parse_or_default(name, env::var(name).ok(), default)
}

/// bcrypt 해싱 비용 설정
pub struct PasswordConfig;

impl PasswordConfig {
    pub const DEFAULT_COST: u32 = 10;
    pub const MIN_COST: u32 = 4;
    pub const MAX_COST: u32 = 31;

    /// `BCRYPT_COST` 환경 변수에서 비용 인수를 읽습니다. (기본값 10)
    pub fn bcrypt_cost() -> u32 {
        Self::bcrypt_cost_from(env::var("BCRYPT_COST").ok())
    }

    /// 허용 범위(4-31)를 벗어난 값은 기본값으로 대체합니다.
    pub fn bcrypt_cost_from(raw: Option<String>) -> u32 {
        let cost = parse_or_default("BCRYPT_COST", raw, Self::DEFAULT_COST);
        if (Self::MIN_COST..=Self::MAX_COST).contains(&cost) {
            cost
        } else {
            log::warn!(
                "BCRYPT_COST {}은(는) 허용 범위({}-{})를 벗어나 기본값 {}을(를) 사용합니다",
                cost, Self::MIN_COST, Self::MAX_COST, Self::DEFAULT_COST
            );
            Self::DEFAULT_COST
        }
    }
}

/// HTTP 서버 바인딩 및 요청 제한 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env_or("PORT", 8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// 초당 허용 요청 수 (actix-governor)
    pub fn rate_limit_per_second() -> u64 {
        env_or("RATE_LIMIT_PER_SECOND", 100)
    }

    pub fn rate_limit_burst_size() -> u32 {
        env_or("RATE_LIMIT_BURST_SIZE", 200)
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database_name: String,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            uri: env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME").unwrap_or_else(|_| "marketplace_auth".to_string()),
        }
    }

    /// MongoDB 대신 메모리 저장소 사용 여부 (`USE_IN_MEMORY_STORE`, 로컬 실행용)
    pub fn use_in_memory_store() -> bool {
        env_or("USE_IN_MEMORY_STORE", false)
    }
}
