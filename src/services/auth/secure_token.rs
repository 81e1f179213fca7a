//! 일회용 토큰 생성기
//!
//! 이메일 인증과 비밀번호 재설정에 쓰이는 불투명 토큰을 만듭니다.
//! 32바이트(256비트) 난수를 16진수 64자로 인코딩합니다.

use rand::RngCore;
use rand::rngs::OsRng;
use crate::errors::errors::{AuthResult, ErrorContext};

/// 토큰 원시 바이트 길이
pub const TOKEN_BYTES: usize = 32;

/// 일회용 토큰 생성기
///
/// 서비스에는 trait 객체로 주입되어, 테스트에서 고정 토큰 생성기로 교체할 수 있습니다.
pub trait SecureTokenGenerator: Send + Sync {
    /// 64자 16진수 토큰 생성
    ///
    /// 난수원 실패는 복구 불가능한 `InfrastructureError`로 전파됩니다.
    fn generate(&self) -> AuthResult<String>;
}

/// 운영체제 CSPRNG 기반 생성기
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRngTokenGenerator;

impl SecureTokenGenerator for OsRngTokenGenerator {
    fn generate(&self) -> AuthResult<String> {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng
            .try_fill_bytes(&mut bytes)
            .context("보안 난수 생성 실패")?;

        Ok(hex::encode(bytes))
    }
}
