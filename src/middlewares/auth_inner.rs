//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{web, Error, HttpMessage, HttpResponse, ResponseError};
use futures_util::future::LocalBoxFuture;
use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
use crate::domain::models::auth::authentication_request::RequiredRole;
use crate::errors::errors::{AppError, AuthError};
use crate::services::auth::{AuthService, TokenService};

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
    pub required_role: Option<RequiredRole>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let required_role = self.required_role.clone();

        Box::pin(async move {
            let user = match authenticate_request(&req) {
                Ok(user) => user,
                Err(err) => {
                    log::warn!("인증 실패: {}", err);
                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            };

            // 역할 검증
            if let Some(ref required) = required_role {
                if !required.is_satisfied(user.role) {
                    log::warn!("권한 부족: 사용자 ID {} ({}), 필요 권한: {:?}",
                        user.user_id, user.role.as_str(), required);
                    let response = HttpResponse::Forbidden()
                        .json(serde_json::json!({
                            "error": "insufficient permissions",
                            "code": "FORBIDDEN"
                        }));
                    let (req, _) = req.into_parts();
                    return Ok(ServiceResponse::new(req, response).map_into_right_body());
                }
            }

            log::debug!("인증 성공: 사용자 ID {}", user.user_id);
            // 사용자 정보를 Request Extensions에 저장
            req.extensions_mut().insert(user);

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

fn authenticate_request(req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
    let auth_service = req
        .app_data::<web::Data<AuthService>>()
        .ok_or_else(|| AppError::InternalError("AuthService가 등록되지 않았습니다".to_string()))?;

    // Authorization 헤더 추출
    let auth_header = req.headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Auth(AuthError::InvalidToken))?;

    let token = TokenService::extract_bearer_token(auth_header)?;
    let claims = auth_service.authenticate(token)?;

    Ok(AuthenticatedUser::from(claims))
}
