//! 인증 요청관련 DTO
//!
//! 인증/계정 생명주기 엔드포인트의 요청 정보를 매핑합니다.
//! 여기서는 형식만 검증합니다. 비밀번호 강도는 `PasswordService`가 판정하여
//! `PasswordTooShort`/`PasswordTooLong`/`PasswordTooWeak`를 그대로 돌려줍니다.
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::domain::entities::users::user::UserRole;

/// 회원가입 요청 구조체
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,

    #[validate(custom(function = "validate_registrable_role"))]
    pub role: UserRole,

    /// 표시 이름 (2-50자)
    #[validate(length(min = 2, max = 50, message = "이름은 2-50자 사이여야 합니다"))]
    pub display_name: String,
}

/// 로컬 로그인 요청 구조체
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 리프레시 토큰 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct RefreshTokenRequest {
    #[validate(length(min = 1, message = "리프레시 토큰이 필요합니다"))]
    pub refresh_token: String,
}

/// 이메일 인증 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyEmailRequest {
    #[validate(length(min = 1, message = "인증 토큰이 필요합니다"))]
    pub token: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ForgotPasswordRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ResetPasswordRequest {
    #[validate(length(min = 1, message = "재설정 토큰이 필요합니다"))]
    pub token: String,

    #[validate(length(min = 1, message = "새 비밀번호를 입력해주세요"))]
    pub password: String,
}

/// 자가 가입 가능한 역할인지 검증 (관리자 계정은 별도 절차로 생성)
fn validate_registrable_role(role: &UserRole) -> Result<(), ValidationError> {
    if !role.is_self_registrable() {
        return Err(ValidationError::new("invalid_role")
            .with_message("customer 또는 service_provider 역할만 가입할 수 있습니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn register_request(email: &str, role: UserRole, display_name: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: "Passw0rd!".to_string(),
            role,
            display_name: display_name.to_string(),
        }
    }

    #[test]
    fn test_valid_register_request() {
        let request = register_request("alice@example.com", UserRole::Customer, "Alice");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_register_rejects_admin_role() {
        let request = register_request("alice@example.com", UserRole::Admin, "Alice");
        let errors = request.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("role"));
    }

    #[test]
    fn test_register_rejects_bad_email_and_short_name() {
        let request = register_request("not-an-email", UserRole::ServiceProvider, "A");
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("display_name"));
    }

    #[test]
    fn test_register_does_not_judge_password_strength() {
        let mut request = register_request("bob@example.com", UserRole::Customer, "Bob");
        request.password = "weak".to_string();

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_tokens_are_rejected() {
        let verify = VerifyEmailRequest { token: String::new() };
        let reset = ResetPasswordRequest { token: String::new(), password: "NewPassw0rd!".to_string() };

        assert!(verify.validate().is_err());
        assert!(reset.validate().is_err());
    }
}
