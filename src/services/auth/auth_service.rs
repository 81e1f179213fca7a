//! 계정 인증 서비스 구현
//!
//! 회원가입, 로그인, 토큰 갱신, 이메일 인증, 비밀번호 재설정을 조율합니다.
//! 비즈니스 규칙과 에러 의미는 모두 이 서비스가 결정하며, HTTP는 알지 못합니다.
//!
//! ## 계정 상태 전이
//!
//! ```text
//! Unverified --[유효한 인증 토큰]--> Verified --[모든 토큰]--> EmailAlreadyVerified
//! NoResetPending --[forgot_password]--> ResetPending --[reset_password, 만료 전]--> NoResetPending
//! ```
//!
//! ## 열거 공격 방지
//!
//! - `login`: 계정 없음, 비밀번호 불일치, 저장소 장애 모두 `InvalidCredentials`
//! - `forgot_password`: 계정 존재 여부와 관계없이 항상 성공
//! - `refresh_token`: 만료, 위조, 삭제된 계정 모두 `InvalidToken`

use std::sync::Arc;
use chrono::Duration;
use log::{error, info, warn};
use crate::config::AuthSettings;
use crate::domain::dto::users::request::{LoginRequest, RegisterRequest};
use crate::domain::dto::users::response::{AuthResponse, UserSummary};
use crate::domain::entities::users::user::{OneTimeToken, User};
use crate::domain::models::token::token::{TokenClaims, TokenKind};
use crate::errors::errors::{AuthError, AuthResult, ErrorContext, StoreError, TokenValidationError};
use crate::repositories::users::UserStore;
use crate::services::auth::password_service::PasswordService;
use crate::services::auth::secure_token::{OsRngTokenGenerator, SecureTokenGenerator};
use crate::services::auth::token_service::TokenService;
use crate::utils::clock::{Clock, SystemClock};

/// 계정 생명주기 정책
#[derive(Debug, Clone, Copy)]
pub struct AccountPolicy {
    /// 이메일 인증 토큰 유효 기간
    pub email_verification_ttl: Duration,
    /// 비밀번호 재설정 토큰 유효 기간
    pub password_reset_ttl: Duration,
    /// 이메일 인증 전 로그인 차단 여부
    pub require_verified_email: bool,
}

impl Default for AccountPolicy {
    fn default() -> Self {
        Self {
            email_verification_ttl: Duration::hours(24),
            password_reset_ttl: Duration::hours(1),
            require_verified_email: false,
        }
    }
}

impl From<&AuthSettings> for AccountPolicy {
    fn from(settings: &AuthSettings) -> Self {
        Self {
            email_verification_ttl: settings.email_verification_ttl,
            password_reset_ttl: settings.password_reset_ttl,
            require_verified_email: settings.require_verified_email,
        }
    }
}

/// 계정 인증 서비스
///
/// 모든 의존성은 생성자로 주입되며 생성 후 변경되지 않습니다.
/// 여러 요청에서 동시에 호출해도 안전합니다.
///
/// # Examples
///
/// ```rust,ignore
/// let store: Arc<dyn UserStore> = Arc::new(InMemoryUserRepository::new());
/// let service = AuthService::from_settings(store, &AuthSettings::from_env()?);
///
/// let response = service.register(request).await?;
/// println!("access token expires in {}s", response.expires_in);
/// ```
pub struct AuthService {
    store: Arc<dyn UserStore>,
    passwords: PasswordService,
    tokens: TokenService,
    token_generator: Arc<dyn SecureTokenGenerator>,
    clock: Arc<dyn Clock>,
    policy: AccountPolicy,
}

impl AuthService {
    pub fn new(
        store: Arc<dyn UserStore>,
        passwords: PasswordService,
        tokens: TokenService,
        token_generator: Arc<dyn SecureTokenGenerator>,
        clock: Arc<dyn Clock>,
        policy: AccountPolicy,
    ) -> Self {
        Self {
            store,
            passwords,
            tokens,
            token_generator,
            clock,
            policy,
        }
    }

    /// 시스템 시계와 OS 난수원을 사용하는 운영용 구성
    pub fn from_settings(store: Arc<dyn UserStore>, settings: &AuthSettings) -> Self {
        Self::with_clock(store, settings, Arc::new(SystemClock))
    }

    pub fn with_clock(store: Arc<dyn UserStore>, settings: &AuthSettings, clock: Arc<dyn Clock>) -> Self {
        Self::new(
            store,
            PasswordService::with_cost(settings.bcrypt_cost),
            TokenService::from_settings(settings, clock.clone()),
            Arc::new(OsRngTokenGenerator),
            clock,
            AccountPolicy::from(settings),
        )
    }

    /// 회원가입
    ///
    /// 인증 토큰은 계정 레코드에 저장되어 외부 발송기가 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AccountAlreadyExists` - 사전 조회 또는 insert 시점의 이메일 중복
    /// * `PasswordTooShort` / `PasswordTooLong` / `PasswordTooWeak` - 비밀번호 정책 위반
    /// * `InfrastructureError` - 저장소 장애, 난수원 실패
    pub async fn register(&self, request: RegisterRequest) -> AuthResult<AuthResponse> {
        match self.store.find_by_email(&request.email).await {
            Ok(existing) => {
                warn!("회원가입 거부: 이미 존재하는 계정 (user_id={})", existing.id);
                return Err(AuthError::AccountAlreadyExists);
            }
            Err(StoreError::NotFound) => {}
            Err(e) => {
                error!("회원가입 중 이메일 중복 확인 실패: {}", e);
                return Err(AuthError::InfrastructureError(format!("이메일 중복 확인 실패: {}", e)));
            }
        }

        let password_hash = self.passwords.hash(&request.password)?;

        let now = self.clock.now();
        let verification = OneTimeToken::new(
            self.token_generator.generate()?,
            now + self.policy.email_verification_ttl,
        );

        let user = User::new_local(
            request.email,
            request.display_name,
            password_hash,
            request.role,
            verification,
            now,
        );

        match self.store.insert(&user).await {
            Ok(()) => {}
            // 사전 조회 이후 동시 가입이 먼저 저장된 경우
            Err(StoreError::DuplicateEmail) => {
                warn!("회원가입 거부: 저장 시점 이메일 중복");
                return Err(AuthError::AccountAlreadyExists);
            }
            Err(e) => {
                error!("신규 계정 저장 실패: {}", e);
                return Err(AuthError::InfrastructureError(format!("신규 계정 저장 실패: {}", e)));
            }
        }

        let tokens = self.tokens.issue_pair(&user)?;
        info!("회원가입 완료: user_id={}, role={}", user.id, user.role.as_str());

        Ok(AuthResponse::new(tokens, &user))
    }

    /// 로컬 로그인
    ///
    /// 실패 원인은 서버 로그에만 남기고, 호출자에게는 `InvalidCredentials` 하나로 보고합니다.
    pub async fn login(&self, request: LoginRequest) -> AuthResult<AuthResponse> {
        let user = match self.store.find_by_email(&request.email).await {
            Ok(user) => user,
            Err(StoreError::NotFound) => {
                warn!("로그인 실패: 등록되지 않은 이메일");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                error!("로그인 중 계정 조회 실패: {}", e);
                return Err(AuthError::InvalidCredentials);
            }
        };

        if self.passwords.verify(&user.password_hash, &request.password).is_err() {
            warn!("로그인 실패: 비밀번호 불일치 (user_id={})", user.id);
            return Err(AuthError::InvalidCredentials);
        }

        if self.policy.require_verified_email && !user.is_email_verified {
            warn!("로그인 거부: 이메일 미인증 (user_id={})", user.id);
            return Err(AuthError::EmailNotVerified);
        }

        let tokens = self.tokens.issue_pair(&user)?;
        info!("로그인 성공: user_id={}", user.id);

        Ok(AuthResponse::new(tokens, &user))
    }

    /// 리프레시 토큰으로 새 토큰 쌍 발급
    ///
    /// 액세스/리프레시 토큰을 모두 새로 발급합니다.
    pub async fn refresh_token(&self, refresh_token: &str) -> AuthResult<AuthResponse> {
        let claims = self.tokens
            .validate_kind(refresh_token, TokenKind::Refresh)
            .map_err(|e| {
                warn!("토큰 갱신 거부: {}", e);
                AuthError::InvalidToken
            })?;

        let user = self.store.find_by_id(&claims.sub).await.map_err(|e| {
            warn!("토큰 갱신 거부: 계정 조회 실패 (user_id={}): {}", claims.sub, e);
            AuthError::InvalidToken
        })?;

        let tokens = self.tokens.issue_pair(&user)?;
        info!("토큰 갱신 완료: user_id={}", user.id);

        Ok(AuthResponse::new(tokens, &user))
    }

    /// 이메일 인증
    ///
    /// # Errors
    ///
    /// * `InvalidToken` - 토큰에 해당하는 계정 없음 (이미 사용된 토큰 포함)
    /// * `EmailAlreadyVerified` - 이미 인증된 계정
    /// * `TokenExpired` - 인증 기간 경과
    pub async fn verify_email(&self, token: &str) -> AuthResult<()> {
        let mut user = match self.store.find_by_email_verification_token(token).await {
            Ok(user) => user,
            Err(StoreError::NotFound) => {
                warn!("이메일 인증 실패: 알 수 없는 토큰");
                return Err(AuthError::InvalidToken);
            }
            Err(e) => {
                error!("이메일 인증 중 계정 조회 실패: {}", e);
                return Err(AuthError::InfrastructureError(format!("인증 토큰 조회 실패: {}", e)));
            }
        };

        if user.is_email_verified {
            warn!("이메일 인증 거부: 이미 인증됨 (user_id={})", user.id);
            return Err(AuthError::EmailAlreadyVerified);
        }

        let now = self.clock.now();
        match &user.email_verification {
            Some(verification) if verification.is_expired_at(now) => {
                warn!("이메일 인증 실패: 토큰 만료 (user_id={})", user.id);
                return Err(AuthError::TokenExpired);
            }
            Some(_) => {}
            None => return Err(AuthError::InvalidToken),
        }

        user.mark_email_verified(now);
        self.store.save(&user).await.context("이메일 인증 상태 저장 실패")?;

        info!("이메일 인증 완료: user_id={}", user.id);
        Ok(())
    }

    /// 비밀번호 재설정 토큰 발급
    ///
    /// 계정 존재 여부가 결과로 드러나지 않도록, 조회/토큰 생성/저장 중
    /// 어느 단계가 실패해도 서버 로그만 남기고 성공을 반환합니다.
    /// 토큰 발송은 이 서비스의 범위가 아닙니다.
    pub async fn forgot_password(&self, email: &str) -> AuthResult<()> {
        let mut user = match self.store.find_by_email(email).await {
            Ok(user) => user,
            Err(StoreError::NotFound) => {
                info!("비밀번호 재설정 요청: 등록되지 않은 이메일");
                return Ok(());
            }
            Err(e) => {
                error!("비밀번호 재설정 요청 중 계정 조회 실패: {}", e);
                return Ok(());
            }
        };

        let now = self.clock.now();
        let token = match self.token_generator.generate() {
            Ok(token) => token,
            Err(e) => {
                error!("비밀번호 재설정 토큰 생성 실패: user_id={}, {}", user.id, e);
                return Ok(());
            }
        };

        user.begin_password_reset(OneTimeToken::new(token, now + self.policy.password_reset_ttl), now);
        if let Err(e) = self.store.save(&user).await {
            error!("비밀번호 재설정 토큰 저장 실패: user_id={}, {}", user.id, e);
            return Ok(());
        }

        info!("비밀번호 재설정 토큰 발급: user_id={}", user.id);
        Ok(())
    }

    /// 재설정 토큰으로 비밀번호 변경
    ///
    /// 만료 확인이 비밀번호 정책 검사보다 먼저 수행됩니다.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> AuthResult<()> {
        let mut user = match self.store.find_by_password_reset_token(token).await {
            Ok(user) => user,
            Err(StoreError::NotFound) => {
                warn!("비밀번호 재설정 실패: 알 수 없는 토큰");
                return Err(AuthError::InvalidToken);
            }
            Err(e) => {
                error!("비밀번호 재설정 중 계정 조회 실패: {}", e);
                return Err(AuthError::InfrastructureError(format!("재설정 토큰 조회 실패: {}", e)));
            }
        };

        let now = self.clock.now();
        match &user.password_reset {
            Some(reset) if reset.is_expired_at(now) => {
                warn!("비밀번호 재설정 실패: 토큰 만료 (user_id={})", user.id);
                return Err(AuthError::TokenExpired);
            }
            Some(_) => {}
            None => return Err(AuthError::InvalidToken),
        }

        let password_hash = self.passwords.hash(new_password)?;

        user.complete_password_reset(password_hash, now);
        self.store.save(&user).await.context("새 비밀번호 저장 실패")?;

        info!("비밀번호 재설정 완료: user_id={}", user.id);
        Ok(())
    }

    /// 액세스 토큰 검증
    ///
    /// 리프레시 토큰은 액세스 토큰 자리에서 `InvalidToken`으로 거부됩니다.
    pub fn authenticate(&self, access_token: &str) -> AuthResult<TokenClaims> {
        self.tokens
            .validate_kind(access_token, TokenKind::Access)
            .map_err(|e| match e {
                TokenValidationError::Expired => AuthError::TokenExpired,
                TokenValidationError::Invalid => AuthError::InvalidToken,
            })
    }

    /// 인증된 사용자의 계정 요약 조회
    pub async fn current_user(&self, user_id: &str) -> AuthResult<UserSummary> {
        match self.store.find_by_id(user_id).await {
            Ok(user) => Ok(UserSummary::from(&user)),
            Err(StoreError::NotFound) => {
                warn!("현재 사용자 조회 실패: 삭제된 계정 (user_id={})", user_id);
                Err(AuthError::InvalidToken)
            }
            Err(e) => Err(AuthError::InfrastructureError(format!("계정 조회 실패: {}", e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use crate::domain::entities::users::user::UserRole;
    use crate::repositories::users::InMemoryUserRepository;
    use crate::utils::clock::ManualClock;

    const SECRET: &str = "test-secret";

    struct Harness {
        service: AuthService,
        store: Arc<InMemoryUserRepository>,
        clock: Arc<ManualClock>,
    }

    fn test_settings() -> AuthSettings {
        let mut settings = AuthSettings::new(SECRET);
        settings.bcrypt_cost = 4;
        settings
    }

    fn harness_with(settings: AuthSettings) -> Harness {
        let store = Arc::new(InMemoryUserRepository::new());
        let clock = Arc::new(ManualClock::new(Utc::now()));
        let service = AuthService::with_clock(store.clone(), &settings, clock.clone());

        Harness { service, store, clock }
    }

    fn harness() -> Harness {
        harness_with(test_settings())
    }

    fn service_over(store: Arc<dyn UserStore>) -> AuthService {
        AuthService::with_clock(store, &test_settings(), Arc::new(ManualClock::new(Utc::now())))
    }

    fn register_request(email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            role: UserRole::Customer,
            display_name: "Alice".to_string(),
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    /// 모든 호출이 저장소 장애로 실패하는 저장소
    struct FailingStore;

    #[async_trait]
    impl UserStore for FailingStore {
        async fn find_by_email(&self, _email: &str) -> Result<User, StoreError> {
            Err(StoreError::Database("connection refused".to_string()))
        }
        async fn find_by_id(&self, _id: &str) -> Result<User, StoreError> {
            Err(StoreError::Database("connection refused".to_string()))
        }
        async fn find_by_email_verification_token(&self, _token: &str) -> Result<User, StoreError> {
            Err(StoreError::Database("connection refused".to_string()))
        }
        async fn find_by_password_reset_token(&self, _token: &str) -> Result<User, StoreError> {
            Err(StoreError::Database("connection refused".to_string()))
        }
        async fn insert(&self, _user: &User) -> Result<(), StoreError> {
            Err(StoreError::Database("connection refused".to_string()))
        }
        async fn save(&self, _user: &User) -> Result<(), StoreError> {
            Err(StoreError::Database("connection refused".to_string()))
        }
    }

    /// 사전 조회와 insert 사이에 같은 이메일이 먼저 저장된 상황
    struct RacingStore;

    #[async_trait]
    impl UserStore for RacingStore {
        async fn find_by_email(&self, _email: &str) -> Result<User, StoreError> {
            Err(StoreError::NotFound)
        }
        async fn find_by_id(&self, _id: &str) -> Result<User, StoreError> {
            Err(StoreError::NotFound)
        }
        async fn find_by_email_verification_token(&self, _token: &str) -> Result<User, StoreError> {
            Err(StoreError::NotFound)
        }
        async fn find_by_password_reset_token(&self, _token: &str) -> Result<User, StoreError> {
            Err(StoreError::NotFound)
        }
        async fn insert(&self, _user: &User) -> Result<(), StoreError> {
            Err(StoreError::DuplicateEmail)
        }
        async fn save(&self, _user: &User) -> Result<(), StoreError> {
            Err(StoreError::NotFound)
        }
    }

    #[actix_web::test]
    async fn test_register_then_verify_email() {
        let h = harness();
        let registered_at = h.clock.now();

        let response = h.service.register(register_request("alice@example.com", "Passw0rd!")).await.unwrap();
        assert!(!response.user.is_email_verified);
        assert_eq!(response.user.role, UserRole::Customer);
        assert_eq!(response.token_type, "Bearer");

        let stored = h.store.find_by_email("alice@example.com").await.unwrap();
        let verification = stored.email_verification.clone().unwrap();
        assert_eq!(verification.token.len(), 64);
        assert!(verification.token.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(verification.expires_at, registered_at + Duration::hours(24));
        assert_ne!(stored.password_hash, "Passw0rd!");

        h.service.verify_email(&verification.token).await.unwrap();

        let verified = h.store.find_by_id(&stored.id).await.unwrap();
        assert!(verified.is_email_verified);
        assert!(verified.email_verification.is_none());

        // 사용된 토큰은 더 이상 존재하지 않음
        assert_eq!(
            h.service.verify_email(&verification.token).await,
            Err(AuthError::InvalidToken)
        );
    }

    #[actix_web::test]
    async fn test_register_duplicate_email() {
        let h = harness();
        h.service.register(register_request("alice@example.com", "Passw0rd!")).await.unwrap();

        let result = h.service.register(register_request("alice@example.com", "An0therPass")).await;

        assert!(matches!(result, Err(AuthError::AccountAlreadyExists)));
        assert_eq!(h.store.len(), 1);
    }

    #[actix_web::test]
    async fn test_register_surfaces_password_policy_errors() {
        let h = harness();

        let short = h.service.register(register_request("a@example.com", "Ab1")).await;
        let weak = h.service.register(register_request("b@example.com", "password123")).await;

        assert!(matches!(short, Err(AuthError::PasswordTooShort)));
        assert!(matches!(weak, Err(AuthError::PasswordTooWeak)));
        assert!(h.store.is_empty());
    }

    #[actix_web::test]
    async fn test_register_propagates_store_outage() {
        let service = service_over(Arc::new(FailingStore));

        let result = service.register(register_request("alice@example.com", "Passw0rd!")).await;

        assert!(matches!(result, Err(AuthError::InfrastructureError(_))));
    }

    #[actix_web::test]
    async fn test_register_insert_race_is_duplicate() {
        let service = service_over(Arc::new(RacingStore));

        let result = service.register(register_request("alice@example.com", "Passw0rd!")).await;

        assert!(matches!(result, Err(AuthError::AccountAlreadyExists)));
    }

    #[actix_web::test]
    async fn test_login_success() {
        let h = harness();
        h.service.register(register_request("alice@example.com", "Passw0rd!")).await.unwrap();

        let response = h.service.login(login_request("alice@example.com", "Passw0rd!")).await.unwrap();

        let claims = h.service.authenticate(&response.access_token).unwrap();
        assert_eq!(claims.sub, response.user.id);
        assert_eq!(claims.email, "alice@example.com");
        assert_eq!(response.expires_in, 900);
    }

    #[actix_web::test]
    async fn test_login_does_not_reveal_account_existence() {
        let h = harness();
        h.service.register(register_request("real@example.com", "Passw0rd!")).await.unwrap();

        let unknown = h.service.login(login_request("nonexistent@x.com", "anything")).await;
        let wrong = h.service.login(login_request("real@example.com", "wrongpassword")).await;
        let outage = service_over(Arc::new(FailingStore))
            .login(login_request("real@example.com", "Passw0rd!"))
            .await;

        assert!(matches!(unknown, Err(AuthError::InvalidCredentials)));
        assert!(matches!(wrong, Err(AuthError::InvalidCredentials)));
        assert!(matches!(outage, Err(AuthError::InvalidCredentials)));
    }

    #[actix_web::test]
    async fn test_login_requires_verified_email_when_enabled() {
        let mut settings = test_settings();
        settings.require_verified_email = true;
        let h = harness_with(settings);

        h.service.register(register_request("alice@example.com", "Passw0rd!")).await.unwrap();

        let before = h.service.login(login_request("alice@example.com", "Passw0rd!")).await;
        assert!(matches!(before, Err(AuthError::EmailNotVerified)));

        // 잘못된 비밀번호는 미인증 여부보다 먼저 판정
        let wrong = h.service.login(login_request("alice@example.com", "Wr0ngPass")).await;
        assert!(matches!(wrong, Err(AuthError::InvalidCredentials)));

        let token = h.store.find_by_email("alice@example.com").await.unwrap()
            .email_verification.unwrap().token;
        h.service.verify_email(&token).await.unwrap();

        assert!(h.service.login(login_request("alice@example.com", "Passw0rd!")).await.is_ok());
    }

    #[actix_web::test]
    async fn test_refresh_token_rotates_pair() {
        let h = harness();
        let registered = h.service.register(register_request("alice@example.com", "Passw0rd!")).await.unwrap();

        h.clock.advance(Duration::minutes(30));
        let refreshed = h.service.refresh_token(&registered.refresh_token).await.unwrap();

        assert_ne!(refreshed.access_token, registered.access_token);
        assert_ne!(refreshed.refresh_token, registered.refresh_token);
        assert_eq!(refreshed.user.id, registered.user.id);
        assert!(h.service.authenticate(&refreshed.access_token).is_ok());
    }

    #[actix_web::test]
    async fn test_refresh_rejects_access_token() {
        let h = harness();
        let registered = h.service.register(register_request("alice@example.com", "Passw0rd!")).await.unwrap();

        let result = h.service.refresh_token(&registered.access_token).await;

        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }

    #[actix_web::test]
    async fn test_refresh_collapses_expired_and_deleted_accounts() {
        let h = harness();
        let registered = h.service.register(register_request("alice@example.com", "Passw0rd!")).await.unwrap();

        assert!(h.store.remove(&registered.user.id));
        let deleted = h.service.refresh_token(&registered.refresh_token).await;
        assert!(matches!(deleted, Err(AuthError::InvalidToken)));

        let other = h.service.register(register_request("bob@example.com", "Passw0rd!")).await.unwrap();
        h.clock.advance(Duration::days(8));
        let expired = h.service.refresh_token(&other.refresh_token).await;
        assert!(matches!(expired, Err(AuthError::InvalidToken)));

        let forged = h.service.refresh_token("forged.token.value").await;
        assert!(matches!(forged, Err(AuthError::InvalidToken)));
    }

    #[actix_web::test]
    async fn test_verify_email_expired_token() {
        let h = harness();
        h.service.register(register_request("alice@example.com", "Passw0rd!")).await.unwrap();
        let token = h.store.find_by_email("alice@example.com").await.unwrap()
            .email_verification.unwrap().token;

        h.clock.advance(Duration::hours(25));

        assert_eq!(h.service.verify_email(&token).await, Err(AuthError::TokenExpired));
        assert!(!h.store.find_by_email("alice@example.com").await.unwrap().is_email_verified);
    }

    #[actix_web::test]
    async fn test_verify_email_on_verified_account() {
        let h = harness();
        h.service.register(register_request("alice@example.com", "Passw0rd!")).await.unwrap();

        // 인증 완료 상태인데 토큰이 남아 있는 비정상 레코드
        let mut user = h.store.find_by_email("alice@example.com").await.unwrap();
        user.is_email_verified = true;
        h.store.save(&user).await.unwrap();
        let token = user.email_verification.unwrap().token;

        assert_eq!(h.service.verify_email(&token).await, Err(AuthError::EmailAlreadyVerified));
    }

    #[actix_web::test]
    async fn test_forgot_password_is_silent_for_unknown_email() {
        let h = harness();

        assert!(h.service.forgot_password("nobody@example.com").await.is_ok());
        assert!(service_over(Arc::new(FailingStore)).forgot_password("alice@example.com").await.is_ok());
        assert!(h.store.is_empty());
    }

    /// 조회는 내부 저장소에 위임하고 `save`만 실패하는 저장소
    struct SaveFailingStore(Arc<InMemoryUserRepository>);

    #[async_trait]
    impl UserStore for SaveFailingStore {
        async fn find_by_email(&self, email: &str) -> Result<User, StoreError> {
            self.0.find_by_email(email).await
        }
        async fn find_by_id(&self, id: &str) -> Result<User, StoreError> {
            self.0.find_by_id(id).await
        }
        async fn find_by_email_verification_token(&self, token: &str) -> Result<User, StoreError> {
            self.0.find_by_email_verification_token(token).await
        }
        async fn find_by_password_reset_token(&self, token: &str) -> Result<User, StoreError> {
            self.0.find_by_password_reset_token(token).await
        }
        async fn insert(&self, user: &User) -> Result<(), StoreError> {
            self.0.insert(user).await
        }
        async fn save(&self, _user: &User) -> Result<(), StoreError> {
            Err(StoreError::Database("write timeout".to_string()))
        }
    }

    #[actix_web::test]
    async fn test_forgot_password_hides_save_failure_for_existing_account() {
        let h = harness();
        h.service.register(register_request("alice@example.com", "Passw0rd!")).await.unwrap();
        let service = service_over(Arc::new(SaveFailingStore(h.store.clone())));

        let known = service.forgot_password("alice@example.com").await;
        let unknown = service.forgot_password("nobody@example.com").await;

        assert_eq!(known, Ok(()));
        assert_eq!(known, unknown);
        let stored = h.store.find_by_email("alice@example.com").await.unwrap();
        assert!(stored.password_reset.is_none());
    }

    #[actix_web::test]
    async fn test_forgot_then_reset_password() {
        let h = harness();
        h.service.register(register_request("alice@example.com", "Passw0rd!")).await.unwrap();
        let requested_at = h.clock.now();

        h.service.forgot_password("alice@example.com").await.unwrap();
        let reset = h.store.find_by_email("alice@example.com").await.unwrap()
            .password_reset.unwrap();
        assert_eq!(reset.token.len(), 64);
        assert_eq!(reset.expires_at, requested_at + Duration::hours(1));

        h.service.reset_password(&reset.token, "NewPassw0rd!").await.unwrap();

        assert!(h.service.login(login_request("alice@example.com", "NewPassw0rd!")).await.is_ok());
        assert!(matches!(
            h.service.login(login_request("alice@example.com", "Passw0rd!")).await,
            Err(AuthError::InvalidCredentials)
        ));
        assert_eq!(
            h.service.reset_password(&reset.token, "An0therPass!").await,
            Err(AuthError::InvalidToken)
        );
    }

    #[actix_web::test]
    async fn test_reset_password_with_expired_token() {
        let h = harness();
        h.service.register(register_request("alice@example.com", "Passw0rd!")).await.unwrap();
        h.service.forgot_password("alice@example.com").await.unwrap();
        let before = h.store.find_by_email("alice@example.com").await.unwrap();
        let token = before.password_reset.clone().unwrap().token;

        h.clock.advance(Duration::hours(2));

        assert_eq!(
            h.service.reset_password(&token, "NewPassw0rd!").await,
            Err(AuthError::TokenExpired)
        );
        let after = h.store.find_by_email("alice@example.com").await.unwrap();
        assert_eq!(after.password_hash, before.password_hash);
    }

    #[actix_web::test]
    async fn test_reset_password_rejects_weak_password() {
        let h = harness();
        h.service.register(register_request("alice@example.com", "Passw0rd!")).await.unwrap();
        h.service.forgot_password("alice@example.com").await.unwrap();
        let token = h.store.find_by_email("alice@example.com").await.unwrap()
            .password_reset.unwrap().token;

        assert_eq!(h.service.reset_password(&token, "short").await, Err(AuthError::PasswordTooShort));
        assert_eq!(h.service.reset_password(&token, "alllowercase1").await, Err(AuthError::PasswordTooWeak));

        // 토큰은 그대로 유지
        assert!(h.service.reset_password(&token, "NewPassw0rd!").await.is_ok());
    }

    #[actix_web::test]
    async fn test_token_lookups_propagate_store_outage() {
        let service = service_over(Arc::new(FailingStore));

        assert!(matches!(
            service.verify_email("token").await,
            Err(AuthError::InfrastructureError(_))
        ));
        assert!(matches!(
            service.reset_password("token", "NewPassw0rd!").await,
            Err(AuthError::InfrastructureError(_))
        ));
    }

    #[actix_web::test]
    async fn test_authenticate_access_tokens_only() {
        let h = harness();
        let registered = h.service.register(register_request("alice@example.com", "Passw0rd!")).await.unwrap();

        assert!(h.service.authenticate(&registered.access_token).is_ok());
        assert_eq!(
            h.service.authenticate(&registered.refresh_token),
            Err(AuthError::InvalidToken)
        );

        h.clock.advance(Duration::minutes(16));
        assert_eq!(
            h.service.authenticate(&registered.access_token),
            Err(AuthError::TokenExpired)
        );
    }

    #[actix_web::test]
    async fn test_current_user() {
        let h = harness();
        let registered = h.service.register(register_request("alice@example.com", "Passw0rd!")).await.unwrap();

        let summary = h.service.current_user(&registered.user.id).await.unwrap();
        assert_eq!(summary, registered.user);

        h.store.remove(&registered.user.id);
        assert_eq!(
            h.service.current_user(&registered.user.id).await,
            Err(AuthError::InvalidToken)
        );
    }
}
