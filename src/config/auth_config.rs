//! 인증 관련 설정 관리 모듈
//!
//! JWT 서명 비밀키와 각종 토큰 유효 기간, 로그인 정책을 관리합니다.
//! 서버 시작 시 [`AuthSettings::from_env`]로 한 번 읽어서 서비스에 주입하며,
//! 요청마다 환경 변수를 다시 읽지 않습니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! export JWT_SECRET="$(openssl rand -hex 32)"
//! export JWT_ACCESS_TOKEN_MINUTES=15
//! export JWT_REFRESH_TOKEN_DAYS=7
//! export EMAIL_VERIFICATION_HOURS=24
//! export PASSWORD_RESET_MINUTES=60
//! export REQUIRE_VERIFIED_EMAIL=false
//! ```

use std::env;
use chrono::Duration;
use crate::config::data_config::{env_or, parse_or_default, Environment, PasswordConfig};
use crate::errors::errors::{AppError, AppResult};

/// 개발 환경 전용 비밀키 (프로덕션에서는 사용 불가)
const DEVELOPMENT_FALLBACK_SECRET: &str = "development-only-jwt-secret-change-me";

/// 유효 기간 값을 읽고, 1 미만이거나 `max`를 넘으면 경고 후 기본값을 사용합니다.
///
/// 0 이하는 모든 토큰을 발급 즉시 만료시키고, 너무 큰 값은 `chrono::Duration` 생성 시 패닉을 일으킵니다.
pub fn lifetime_from(name: &str, raw: Option<String>, default: i64, max: i64) -> i64 {
    let value = parse_or_default(name, raw, default);
    if (1..=max).contains(&value) {
        value
    } else {
        log::warn!(
            "{} {}은(는) 허용 범위(1-{})를 벗어나 기본값 {}을(를) 사용합니다",
            name, value, max, default
        );
        default
    }
}

fn lifetime(name: &str, default: i64, max: i64) -> i64 {
    lifetime_from(name, env::var(name).ok(), default, max)
}

/// JSON Web Token (JWT) 관련 설정
///
/// ## 권장 설정값
///
/// - 액세스 토큰: 15분
/// - 리프레시 토큰: 7일
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// # Errors
    ///
    /// 프로덕션 환경에서 `JWT_SECRET`이 없거나 비어 있으면 `AppError::InternalError`
    pub fn secret(environment: &Environment) -> AppResult<String> {
        Self::resolve_secret(env::var("JWT_SECRET").ok(), environment)
    }

    /// 비밀키 결정 규칙
    ///
    /// 프로덕션은 반드시 외부에서 주입된 값을 사용하고,
    /// 그 외 환경에서는 경고와 함께 개발용 값을 허용합니다.
    pub fn resolve_secret(raw: Option<String>, environment: &Environment) -> AppResult<String> {
        match raw.filter(|secret| !secret.trim().is_empty()) {
            Some(secret) => Ok(secret),
            None if environment.is_production() => Err(AppError::InternalError(
                "JWT_SECRET must be set in production".to_string(),
            )),
            None => {
                log::warn!("JWT_SECRET not set, using development fallback (not secure for production!)");
                Ok(DEVELOPMENT_FALLBACK_SECRET.to_string())
            }
        }
    }

    /// 액세스 토큰 유효 기간 (분, 기본값 15, 최대 1일)
    pub fn access_token_minutes() -> i64 {
        lifetime("JWT_ACCESS_TOKEN_MINUTES", 15, 24 * 60)
    }

    /// 리프레시 토큰 유효 기간 (일, 기본값 7, 최대 365일)
    pub fn refresh_token_days() -> i64 {
        lifetime("JWT_REFRESH_TOKEN_DAYS", 7, 365)
    }
}

/// 계정 생명주기 설정 (일회용 토큰 유효 기간, 로그인 정책)
pub struct AccountConfig;

impl AccountConfig {
    /// 이메일 인증 토큰 유효 기간 (시간, 기본값 24, 최대 30일)
    pub fn email_verification_hours() -> i64 {
        lifetime("EMAIL_VERIFICATION_HOURS", 24, 30 * 24)
    }

    /// 비밀번호 재설정 토큰 유효 기간 (분, 기본값 60)
    ///
    /// 이메일 인증보다 짧게 유지합니다.
    pub fn password_reset_minutes() -> i64 {
        lifetime("PASSWORD_RESET_MINUTES", 60, 24 * 60)
    }

    /// 이메일 인증 전 로그인 차단 여부 (기본값 false)
    pub fn require_verified_email() -> bool {
        env_or("REQUIRE_VERIFIED_EMAIL", false)
    }
}

/// 인증 서비스에 주입되는 불변 설정 묶음
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub jwt_secret: String,
    pub access_token_ttl: Duration,
    pub refresh_token_ttl: Duration,
    pub email_verification_ttl: Duration,
    pub password_reset_ttl: Duration,
    pub require_verified_email: bool,
    pub bcrypt_cost: u32,
}

impl AuthSettings {
    /// 기본 유효 기간(15분 / 7일 / 24시간 / 1시간)으로 설정을 만듭니다.
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            access_token_ttl: Duration::minutes(15),
            refresh_token_ttl: Duration::days(7),
            email_verification_ttl: Duration::hours(24),
            password_reset_ttl: Duration::hours(1),
            require_verified_email: false,
            bcrypt_cost: PasswordConfig::DEFAULT_COST,
        }
    }

    /// 환경 변수에서 전체 설정을 읽습니다.
    ///
    /// # Errors
    ///
    /// 프로덕션에서 `JWT_SECRET`이 없으면 시작 단계 에러를 반환합니다.
    pub fn from_env() -> AppResult<Self> {
        let environment = Environment::current();

        Ok(Self {
            jwt_secret: JwtConfig::secret(&environment)?,
            access_token_ttl: Duration::minutes(JwtConfig::access_token_minutes()),
            refresh_token_ttl: Duration::days(JwtConfig::refresh_token_days()),
            email_verification_ttl: Duration::hours(AccountConfig::email_verification_hours()),
            password_reset_ttl: Duration::minutes(AccountConfig::password_reset_minutes()),
            require_verified_email: AccountConfig::require_verified_email(),
            bcrypt_cost: PasswordConfig::bcrypt_cost(),
        })
    }
}
