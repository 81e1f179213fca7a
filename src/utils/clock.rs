//! # 시간 소스
//!
//! 토큰 발급/만료 판정에 쓰이는 현재 시각을 주입 가능한 의존성으로 제공합니다.
//! 운영에서는 [`SystemClock`], 테스트에서는 [`ManualClock`]을 사용합니다.

use std::sync::Mutex;
use chrono::{DateTime, Duration, Utc};

/// 현재 시각 제공자
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 시스템 시계
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 수동으로 진행시키는 시계
///
/// 만료 시나리오(예: 재설정 토큰 발급 후 2시간 경과)를 결정적으로 재현할 때 사용합니다.
///
/// ```rust,ignore
/// let clock = ManualClock::new(Utc::now());
/// clock.advance(Duration::hours(2));
/// ```
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *current += by;
    }

    pub fn set(&self, at: DateTime<Utc>) {
        let mut current = self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = at;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
