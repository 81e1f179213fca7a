//! 사용자 저장소 모듈

pub mod user_store;
pub mod user_repo;
pub mod in_memory_user_repo;

pub use user_store::UserStore;
pub use user_repo::UserRepository;
pub use in_memory_user_repo::InMemoryUserRepository;
