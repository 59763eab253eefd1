/*!
 * 基于角色的访问控制中间件
 *
 * 必须在 RequireJWT 之后使用。创建/编辑报告和批量导出等教务操作用它
 * 限制为 staff/admin。
 *
 * ```rust,ignore
 * .wrap(RequireRole::new_any(UserRole::staff_roles()))  // 任一角色即可
 * ```
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use tracing::info;

use crate::{
    middlewares::RequireJWT,
    models::{
        ErrorCode,
        users::entities::{self, UserRole},
    },
};

use super::create_error_response;

#[derive(Clone)]
pub struct RequireRole {
    required_roles: Vec<UserRole>,
}

impl RequireRole {
    /// 创建需要特定角色的中间件
    pub fn new(role: &UserRole) -> Self {
        Self {
            required_roles: vec![role.clone()],
        }
    }

    /// 创建需要任一角色的中间件
    pub fn new_any(roles: &[&UserRole]) -> Self {
        Self {
            required_roles: roles.iter().map(|r| (*r).clone()).collect(),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            required_roles: self.required_roles.clone(),
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    required_roles: Vec<UserRole>,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
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
        let required_roles = self.required_roles.clone();

        Box::pin(async move {
            // 从请求扩展中获取用户信息
            let user = req.extensions().get::<entities::User>().cloned();

            match user {
                Some(user) => {
                    let user_role = RequireJWT::extract_user_role(req.request());
                    let has_permission = required_roles
                        .iter()
                        .any(|role| user_role.as_ref() == Some(role));

                    if has_permission {
                        let res = srv.call(req).await?.map_into_left_body();
                        Ok(res)
                    } else {
                        info!(
                            "Access denied for user {} (role: {:?}). Required roles: {:?}",
                            user.id, user_role, required_roles
                        );
                        Ok(req.into_response(
                            create_error_response(
                                StatusCode::FORBIDDEN,
                                ErrorCode::PermissionDenied,
                                "Access denied.",
                            )
                            .map_into_right_body(),
                        ))
                    }
                }
                None => {
                    info!(
                        "Role check failed: No user found in request. Make sure RequireJWT middleware is applied first."
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            "Authentication required",
                        )
                        .map_into_right_body(),
                    ))
                }
            }
        })
    }
}
