//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <token>` 헤더에서 액세스 토큰 추출
//! - 리프레시 토큰은 거부 (토큰 종류 판별)
//! - 사용자 정보를 request extension에 저장하여
//!   [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser) 추출자로 제공
//! - 선택적 역할 요구사항 (단일 역할 / 여러 역할 중 하나)
//!
//! # 응답
//!
//! | 상황 | 상태 코드 | `code` |
//! |------|-----------|--------|
//! | 헤더 없음, 형식 오류, 위조/종류 불일치 | 401 | `INVALID_TOKEN` |
//! | 만료된 액세스 토큰 | 401 | `TOKEN_EXPIRED` |
//! | 역할 부족 | 403 | `FORBIDDEN` |
//!
//! ## 특정 스코프에만 적용
//! ```rust,ignore
//! web::resource("/me")
//!     .wrap(AuthMiddleware::required())
//!     .route(web::get().to(handlers::auth::me))
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
