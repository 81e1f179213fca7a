//! # Repository Layer
//!
//! 계정 데이터 액세스 계층입니다.
//!
//! 서비스는 구체 타입이 아닌 [`UserStore`](users::UserStore) trait 객체에 의존합니다.
//!
//! ```rust,ignore
//! let store: Arc<dyn UserStore> = Arc::new(UserRepository::new(Arc::new(database)));
//! let auth_service = AuthService::from_settings(store, &settings);
//! ```

pub mod users;
