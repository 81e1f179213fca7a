//! 공통 유틸리티 모듈
//!
//! 서비스 전반에서 공유하는 작은 헬퍼들입니다.
//!
//! - [`clock`]: 주입 가능한 시간 소스 (`SystemClock`, `ManualClock`)

pub mod clock;

pub use clock::*;
