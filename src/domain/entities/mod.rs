//! 도메인 엔티티 모듈
//!
//! 저장소에 영구 저장되는 엔티티들입니다.

pub mod users;

pub use users::*;
