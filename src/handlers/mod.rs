//! HTTP 핸들러 모듈
//!
//! 핸들러는 요청을 DTO로 바인딩하고 검증한 뒤 서비스에 위임합니다.
//! 서비스는 `web::Data<AuthService>`로 주입됩니다.

pub mod auth;
