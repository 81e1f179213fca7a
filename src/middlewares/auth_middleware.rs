//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 액세스 토큰을 검증하고 사용자 정보를 추출합니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::domain::entities::users::user::UserRole;
use crate::domain::models::auth::authentication_request::RequiredRole;
use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
///
/// 토큰 검증은 `web::Data<AuthService>`에 위임합니다.
/// 앱에 `AuthService`가 등록되어 있어야 합니다.
///
/// ```rust,ignore
/// web::resource("/me")
///     .wrap(AuthMiddleware::required())
///     .route(web::get().to(me));
/// ```
pub struct AuthMiddleware {
    /// 접근에 필요한 역할 (선택사항)
    required_role: Option<RequiredRole>,
}

impl AuthMiddleware {
    /// 유효한 액세스 토큰만 요구
    pub fn required() -> Self {
        Self { required_role: None }
    }

    /// 특정 역할이 필요한 인증 미들웨어
    pub fn required_with_role(role: UserRole) -> Self {
        Self {
            required_role: Some(RequiredRole::Single(role)),
        }
    }

    /// 여러 역할 중 하나가 필요한 인증 미들웨어
    pub fn required_with_roles(roles: Vec<UserRole>) -> Self {
        Self {
            required_role: Some(RequiredRole::Any(roles)),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
            required_role: self.required_role.clone(),
        }))
    }
}
