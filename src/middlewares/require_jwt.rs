/*!
 * JWT 认证中间件
 *
 * 验证 access token 并把当前用户解析到请求扩展中。令牌由外部身份系统
 * 签发，这里只做校验和用户解析。
 *
 * 1. 客户端在请求头中包含 `Authorization: Bearer <JWT_TOKEN>`
 * 2. 中间件验证令牌并从存储层加载用户
 * 3. 令牌有效则把用户信息放入请求扩展，继续处理请求
 * 4. 令牌无效或缺失则返回 401
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

use crate::models::users::entities::{self, UserRole};
use crate::models::ErrorCode;
use crate::storage::Storage;

use super::create_error_response;

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireJWT;

// 辅助函数：提取并验证 JWT access token，再从存储层解析用户
async fn extract_and_validate_jwt(req: &ServiceRequest) -> Result<entities::User, String> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| "Missing or invalid Authorization header".to_string())?;

    let claims = crate::utils::jwt::JwtUtils::verify_access_token(token).map_err(|err| {
        info!("JWT token validation failed: {}", err);
        "Invalid JWT token".to_string()
    })?;

    let user_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| "Invalid user ID in JWT".to_string())?;

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone();

    let user = storage
        .get_user_by_id(user_id)
        .await
        .map_err(|_| "Failed to retrieve user from storage".to_string())?
        .ok_or_else(|| "User not found".to_string())?;

    Ok(user)
}

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireJWTMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        Box::pin(async move {
            // 处理 OPTIONS 请求
            if req.method() == actix_web::http::Method::OPTIONS {
                return Ok(req.into_response(
                    create_error_response(StatusCode::NO_CONTENT, ErrorCode::Success, "")
                        .map_into_right_body(),
                ));
            }

            // 验证 JWT token
            match extract_and_validate_jwt(&req).await {
                Ok(user) => {
                    debug!("JWT authentication successful for ID: {}", user.id);
                    req.extensions_mut().insert(user);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "JWT authentication failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            &format!("Unauthorized: {err}"),
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}

// 辅助函数：从请求中提取用户信息
impl RequireJWT {
    /// 从请求扩展中提取当前用户，须在应用了 RequireJWT 的路由中使用
    pub fn extract_user(req: &actix_web::HttpRequest) -> Option<entities::User> {
        req.extensions().get::<entities::User>().cloned()
    }

    /// 从请求扩展中提取用户ID
    pub fn extract_user_id(req: &actix_web::HttpRequest) -> Option<i64> {
        req.extensions().get::<entities::User>().map(|user| user.id)
    }

    /// 从请求扩展中提取用户角色
    pub fn extract_user_role(req: &actix_web::HttpRequest) -> Option<UserRole> {
        req.extensions()
            .get::<entities::User>()
            .map(|user| user.role.clone())
    }
}
