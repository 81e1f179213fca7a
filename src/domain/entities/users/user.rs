//! User Entity Implementation
//!
//! 계정(사용자) 엔티티의 핵심 구현체입니다.
//! 이메일/비밀번호 자격 증명, 역할, 이메일 인증 상태와
//! 두 종류의 일회용 토큰(이메일 인증, 비밀번호 재설정)을 보관합니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 사용자 역할
///
/// 마켓플레이스의 닫힌 역할 집합입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// 서비스를 요청하는 고객
    Customer,
    /// 서비스를 제공하는 사업자
    ServiceProvider,
    /// 관리자 (자가 가입 불가)
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Customer => "customer",
            UserRole::ServiceProvider => "service_provider",
            UserRole::Admin => "admin",
        }
    }

    /// 회원가입 요청으로 선택할 수 있는 역할인지 확인
    pub fn is_self_registrable(&self) -> bool {
        matches!(self, UserRole::Customer | UserRole::ServiceProvider)
    }
}

/// 일회용 토큰과 만료 시각
///
/// 토큰과 만료 시각은 항상 함께 존재하거나 함께 없어야 하므로
/// 하나의 값으로 묶어 `Option`으로 보관합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneTimeToken {
    /// 64자 16진수 문자열
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

impl OneTimeToken {
    pub fn new(token: String, expires_at: DateTime<Utc>) -> Self {
        Self { token, expires_at }
    }

    /// `now`가 만료 시각을 지났는지 확인 (경계값은 유효)
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}

/// 사용자 엔티티
///
/// `password_hash`와 토큰 필드는 외부 응답으로 절대 나가지 않습니다.
/// 응답에는 [`UserSummary`](crate::domain::dto::users::response::UserSummary)를 사용하세요.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// 불투명 식별자 (UUID v4 문자열)
    #[serde(rename = "_id")]
    pub id: String,
    /// 사용자 이메일 (unique, 저장된 그대로 대소문자 구분)
    pub email: String,
    /// 표시 이름
    pub display_name: String,
    /// bcrypt 해시
    pub password_hash: String,
    pub role: UserRole,
    /// 이메일 인증 여부
    pub is_email_verified: bool,
    /// 이메일 인증 토큰
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_verification: Option<OneTimeToken>,
    /// 비밀번호 재설정 토큰
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_reset: Option<OneTimeToken>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// 새 로컬 사용자 생성
    ///
    /// 이메일 인증이 필요한 상태(`is_email_verified = false`)로 시작하며,
    /// 인증 토큰이 함께 발급되어 있어야 합니다.
    pub fn new_local(
        email: String,
        display_name: String,
        password_hash: String,
        role: UserRole,
        email_verification: OneTimeToken,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            email,
            display_name,
            password_hash,
            role,
            is_email_verified: false,
            email_verification: Some(email_verification),
            password_reset: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// 이메일 인증 완료 처리
    ///
    /// 인증 토큰과 만료 시각을 함께 제거합니다.
    pub fn mark_email_verified(&mut self, now: DateTime<Utc>) {
        self.is_email_verified = true;
        self.email_verification = None;
        self.updated_at = now;
    }

    /// 비밀번호 재설정 토큰 발급 (이전 토큰은 덮어씀)
    pub fn begin_password_reset(&mut self, reset: OneTimeToken, now: DateTime<Utc>) {
        self.password_reset = Some(reset);
        self.updated_at = now;
    }

    /// 비밀번호 교체 및 재설정 토큰 소멸
    pub fn complete_password_reset(&mut self, password_hash: String, now: DateTime<Utc>) {
        self.password_hash = password_hash;
        self.password_reset = None;
        self.updated_at = now;
    }
}
