//! # 설정 모듈
//!
//! 환경 변수 기반 설정을 제공합니다.
//!
//! - [`data_config`]: 실행 환경, 서버 바인딩, MongoDB, bcrypt 비용
//! - [`auth_config`]: JWT 비밀키, 토큰 유효 기간, 로그인 정책
//!
//! `.env` 프로필은 `main`에서 `dotenv`로 먼저 로드됩니다.
//! (`PROFILE=dev` → `.env.dev`, `PROFILE=prod` → `.env.prod`, 그 외 `.env`)

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
