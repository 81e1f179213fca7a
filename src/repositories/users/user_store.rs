//! 계정 저장소 추상화
//!
//! 인증 서비스가 소비하는 저장소 기능입니다. 구현체는 MongoDB([`UserRepository`])와
//! 메모리([`InMemoryUserRepository`]) 두 가지이며, 시작 시점에 생성되어 주입됩니다.
//!
//! 모든 메서드는 "없음"([`StoreError::NotFound`])과 저장소 장애를 구분해야 합니다.
//!
//! [`UserRepository`]: super::user_repo::UserRepository
//! [`InMemoryUserRepository`]: super::in_memory_user_repo::InMemoryUserRepository

use async_trait::async_trait;
use crate::domain::entities::users::user::User;
use crate::errors::errors::StoreError;

#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<User, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<User, StoreError>;

    async fn find_by_email_verification_token(&self, token: &str) -> Result<User, StoreError>;

    async fn find_by_password_reset_token(&self, token: &str) -> Result<User, StoreError>;

    /// 새 계정 저장
    ///
    /// 이메일 중복은 `StoreError::DuplicateEmail`로 보고합니다.
    /// 동시 가입 경쟁의 최종 판정은 이 제약이 담당합니다.
    async fn insert(&self, user: &User) -> Result<(), StoreError>;

    /// 계정 전체 레코드 갱신
    async fn save(&self, user: &User) -> Result<(), StoreError>;
}
