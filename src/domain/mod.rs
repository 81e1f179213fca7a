//! # Domain Layer Module
//!
//! 마켓플레이스 인증 서비스의 도메인 계층입니다.
//! 서비스/저장소/전송 계층이 공유하는 데이터 구조를 정의합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 영속되는 계정 레코드 (User, OneTimeToken, UserRole)
//! ├── DTOs      - 요청/응답 데이터 전송 객체
//! └── Models    - 토큰 클레임, 인증된 사용자 정보
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`entities`]
//!
//! 저장소에 보관되는 계정 레코드입니다. 비밀번호 해시와 일회용 토큰을 포함하므로
//! API 응답으로 직접 직렬화하지 않고 [`dto`]의 `UserSummary`로 변환합니다.
//!
//! ### [`dto`]
//!
//! `validator`로 형식을 검증하는 요청 구조체와 응답 구조체입니다.
//!
//! ### [`models`]
//!
//! JWT 클레임([`TokenClaims`])과 토큰 쌍([`TokenPair`]),
//! 그리고 미들웨어가 요청에 주입하는 [`AuthenticatedUser`]를 담습니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;
