//! 도메인 모델 모듈
//!
//! 영구 저장되지 않는 인증 관련 값 객체들입니다.
//!
//! - [`token`]: JWT 클레임, 토큰 종류, 세션 토큰 쌍
//! - [`auth`]: 인증된 사용자 정보와 역할 요구사항

pub mod token {
    pub mod token;

    pub use token::*;
}

pub mod auth {
    pub mod authenticated_user;
    pub mod authentication_request;

    pub use authenticated_user::*;
    pub use authentication_request::*;
}

pub use token::*;
pub use auth::*;
