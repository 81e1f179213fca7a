//! 비밀번호 해싱 서비스
//!
//! bcrypt 기반 단방향 해싱과 검증을 담당합니다.
//! 해싱 전에 비밀번호 정책(길이, 문자 종류)을 먼저 확인합니다.
//!
//! bcrypt는 72바이트 이후 입력을 무시하므로, 72바이트를 넘는 비밀번호는
//! 정책 단계에서 거부하고 해싱/검증은 잘라내지 않는 API만 사용합니다.

use crate::errors::errors::{AuthError, AuthResult, ErrorContext};

/// 최소 비밀번호 길이 (유니코드 문자 수 기준)
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// 최대 비밀번호 길이 (UTF-8 바이트 기준, bcrypt 입력 한계)
pub const MAX_PASSWORD_BYTES: usize = 72;

/// 비밀번호 해싱 서비스
///
/// 비용 인수는 생성 시점에 고정됩니다. 테스트에서는 [`PasswordService::with_cost`]로
/// 낮은 비용(4)을 사용합니다.
#[derive(Debug, Clone, Copy)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// 비밀번호 정책 검사
    ///
    /// # Errors
    ///
    /// * `AuthError::PasswordTooShort` - 8자 미만
    /// * `AuthError::PasswordTooLong` - UTF-8로 72바이트 초과
    /// * `AuthError::PasswordTooWeak` - 대문자, 소문자, 숫자 중 하나라도 없음
    pub fn check_strength(password: &str) -> AuthResult<()> {
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AuthError::PasswordTooShort);
        }

        if password.len() > MAX_PASSWORD_BYTES {
            return Err(AuthError::PasswordTooLong);
        }

        let has_upper = password.chars().any(char::is_uppercase);
        let has_lower = password.chars().any(char::is_lowercase);
        let has_digit = password.chars().any(char::is_numeric);

        if !(has_upper && has_lower && has_digit) {
            return Err(AuthError::PasswordTooWeak);
        }

        Ok(())
    }

    /// 정책을 통과한 비밀번호를 bcrypt로 해싱
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let service = PasswordService::with_cost(4);
    /// let hash = service.hash("Passw0rd!")?;
    /// service.verify(&hash, "Passw0rd!")?;
    /// ```
    pub fn hash(&self, password: &str) -> AuthResult<String> {
        Self::check_strength(password)?;

        bcrypt::non_truncating_hash(password, self.cost).context("비밀번호 해싱 실패")
    }

    /// 저장된 해시와 평문 비밀번호 비교
    ///
    /// 불일치, 72바이트 초과 입력, 손상된 해시 모두 `InvalidCredentials`로 처리합니다.
    pub fn verify(&self, password_hash: &str, password: &str) -> AuthResult<()> {
        match bcrypt::non_truncating_verify(password, password_hash) {
            Ok(true) => Ok(()),
            Ok(false) | Err(bcrypt::BcryptError::Truncation(_)) => Err(AuthError::InvalidCredentials),
            Err(e) => {
                log::warn!("저장된 비밀번호 해시를 해석할 수 없습니다: {}", e);
                Err(AuthError::InvalidCredentials)
            }
        }
    }
}
