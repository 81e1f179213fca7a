//! # 사용자 리포지토리 구현
//!
//! MongoDB `users` 컬렉션 기반의 [`UserStore`] 구현체입니다.
//!
//! ## 특징
//!
//! - **명시적 주입**: 시작 시점에 만든 [`Database`]를 생성자로 받습니다
//! - **데이터 무결성**: 이메일 유니크 인덱스가 중복 가입의 최종 판정을 담당합니다
//! - **토큰 조회 인덱스**: 이메일 인증/비밀번호 재설정 토큰 필드에 sparse 인덱스

use std::sync::Arc;
use async_trait::async_trait;
use mongodb::{
    bson::doc,
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::db::Database;
use crate::domain::entities::users::user::User;
use crate::errors::errors::StoreError;
use crate::repositories::users::user_store::UserStore;

const COLLECTION_NAME: &str = "users";

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 데이터 액세스 리포지토리
///
/// ## 인덱스
///
/// - `email` (unique)
/// - `email_verification.token` (sparse)
/// - `password_reset.token` (sparse)
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(Arc::new(database));
/// repo.create_indexes().await?;
///
/// let user = repo.find_by_email("alice@example.com").await?;
/// ```
#[derive(Clone)]
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(COLLECTION_NAME)
    }

    /// 단일 필드 조회 공통 처리
    async fn find_one_by(&self, field: &str, value: &str) -> Result<User, StoreError> {
        self.collection()
            .find_one(doc! { field: value })
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?
            .ok_or(StoreError::NotFound)
    }

    /// 컬렉션 인덱스 생성
    ///
    /// 애플리케이션 시작 시 한 번 호출합니다.
    ///
    /// # 주의사항
    ///
    /// - **기존 데이터**: 이미 중복 이메일이 있는 경우 유니크 인덱스 생성 실패
    pub async fn create_indexes(&self) -> Result<(), StoreError> {
        // 이메일 유니크 인덱스
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let verification_index = IndexModel::builder()
            .keys(doc! { "email_verification.token": 1 })
            .options(IndexOptions::builder()
                .sparse(true)
                .name("email_verification_token".to_string())
                .build())
            .build();

        let reset_index = IndexModel::builder()
            .keys(doc! { "password_reset.token": 1 })
            .options(IndexOptions::builder()
                .sparse(true)
                .name("password_reset_token".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, verification_index, reset_index])
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        log::info!("사용자 컬렉션 인덱스 준비 완료");
        Ok(())
    }
}

/// 중복 키 위반 여부 확인
fn is_duplicate_key(error: &MongoError) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => write_error.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> Result<User, StoreError> {
        self.find_one_by("email", email).await
    }

    async fn find_by_id(&self, id: &str) -> Result<User, StoreError> {
        self.find_one_by("_id", id).await
    }

    async fn find_by_email_verification_token(&self, token: &str) -> Result<User, StoreError> {
        self.find_one_by("email_verification.token", token).await
    }

    async fn find_by_password_reset_token(&self, token: &str) -> Result<User, StoreError> {
        self.find_one_by("password_reset.token", token).await
    }

    async fn insert(&self, user: &User) -> Result<(), StoreError> {
        self.collection()
            .insert_one(user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    StoreError::DuplicateEmail
                } else {
                    StoreError::Database(e.to_string())
                }
            })?;

        Ok(())
    }

    async fn save(&self, user: &User) -> Result<(), StoreError> {
        let result = self.collection()
            .replace_one(doc! { "_id": user.id.as_str() }, user)
            .await
            .map_err(|e| StoreError::Database(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(StoreError::NotFound);
        }

        Ok(())
    }
}
