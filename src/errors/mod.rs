//! 에러 타입 모듈
//!
//! 도메인 에러([`AuthError`](errors::AuthError)), 저장소 에러([`StoreError`](errors::StoreError)),
//! 전송 계층 에러([`AppError`](errors::AppError))를 제공합니다.

pub mod errors;

pub use errors::*;
