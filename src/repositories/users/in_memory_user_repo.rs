//! 메모리 기반 사용자 저장소
//!
//! 테스트와 로컬 실행에서 MongoDB 대신 주입하는 [`UserStore`] 구현체입니다.
//! MongoDB 구현과 같은 규칙(이메일 유니크, NotFound 구분)을 따릅니다.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use crate::domain::entities::users::user::User;
use crate::errors::errors::StoreError;
use crate::repositories::users::user_store::UserStore;

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, User>> {
        self.users.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, User>> {
        self.users.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn find_where<F>(&self, predicate: F) -> Result<User, StoreError>
    where
        F: Fn(&User) -> bool,
    {
        self.read()
            .values()
            .find(|user| predicate(user))
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// 관리자 작업용 계정 삭제
    ///
    /// 삭제된 계정이 있으면 `true`
    pub fn remove(&self, id: &str) -> bool {
        self.write().remove(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

#[async_trait]
impl UserStore for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<User, StoreError> {
        self.find_where(|user| user.email == email)
    }

    async fn find_by_id(&self, id: &str) -> Result<User, StoreError> {
        self.read().get(id).cloned().ok_or(StoreError::NotFound)
    }

    async fn find_by_email_verification_token(&self, token: &str) -> Result<User, StoreError> {
        self.find_where(|user| {
            user.email_verification
                .as_ref()
                .is_some_and(|verification| verification.token == token)
        })
    }

    async fn find_by_password_reset_token(&self, token: &str) -> Result<User, StoreError> {
        self.find_where(|user| {
            user.password_reset
                .as_ref()
                .is_some_and(|reset| reset.token == token)
        })
    }

    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.write();

        if users.values().any(|existing| existing.email == user.email) {
            return Err(StoreError::DuplicateEmail);
        }

        users.insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn save(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.write();

        match users.get_mut(&user.id) {
            Some(existing) => {
                *existing = user.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }
}
