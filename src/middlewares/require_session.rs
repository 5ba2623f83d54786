/*!
 * 会话校验中间件
 *
 * 平台在外层完成登录并签发会话 JWT；此中间件校验令牌并把学生档案
 * 放进请求扩展，处理程序从扩展里取显式的用户上下文，聚合逻辑中
 * 不存在环境全局量。
 *
 * ## 使用方法
 *
 * 1. 在路由上应用中间件：
 * ```rust,ignore
 * web::scope("/api/v1/dashboard")
 *     .wrap(RequireSession)
 *     .route("", web::get().to(fetch_dashboard))
 * ```
 *
 * 2. 在处理程序中提取用户信息：
 * ```rust,ignore
 * if let Some(user) = RequireSession::extract_user(&req) {
 *     // user 是完整的 UserProfile
 * }
 * if let Some(user_id) = RequireSession::extract_user_id(&req) {
 *     // 只需要 ID 时
 * }
 * ```
 *
 * ## 校验流程
 *
 * 1. 客户端在请求头中包含 `Authorization: Bearer <TOKEN>`
 * 2. 中间件用共享密钥校验令牌
 * 3. 令牌有效则按 sub 取学生档案存入请求扩展，继续处理请求
 * 4. 令牌无效、缺失或用户不存在时返回 401
 */

use crate::models::AjaxResponse;
use crate::models::users::entities::UserProfile;
use crate::storage::Storage;
use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
    http::header::CONTENT_TYPE,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};
use tracing::{debug, info};

const BEARER_PREFIX: &str = "Bearer ";
const AUTHORIZATION_HEADER: &str = "Authorization";

#[derive(Clone)]
pub struct RequireSession;

// 辅助函数：创建错误响应
fn create_error_response(status: StatusCode, message: &str) -> HttpResponse {
    match status {
        StatusCode::NO_CONTENT => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "text/plain; charset=utf-8"))
            .finish(),
        _ => HttpResponse::build(status)
            .insert_header((CONTENT_TYPE, "application/json; charset=utf-8"))
            .json(AjaxResponse::failure(message)),
    }
}

// 辅助函数：提取并校验会话令牌
async fn extract_and_validate_session(req: &ServiceRequest) -> Result<UserProfile, String> {
    let token = req
        .headers()
        .get(AUTHORIZATION_HEADER)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix(BEARER_PREFIX))
        .ok_or_else(|| "Missing or invalid Authorization header".to_string())?;

    let claims = crate::utils::jwt::SessionTokenUtils::verify_token(token).map_err(|err| {
        info!("Session token validation failed: {}", err);
        "Invalid session token".to_string()
    })?;

    let user_id = claims
        .sub
        .parse::<i64>()
        .map_err(|_| "Invalid user ID in session token".to_string())?;

    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .expect("Storage not found in app data")
        .get_ref()
        .clone();

    storage
        .get_user_by_id(user_id)
        .await
        .map_err(|_| "Failed to retrieve user from storage".to_string())?
        .ok_or_else(|| "User not found".to_string())
}

impl<S, B> Transform<S, ServiceRequest> for RequireSession
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireSessionMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireSessionMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireSessionMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireSessionMiddleware<S>
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
                    create_error_response(StatusCode::NO_CONTENT, "").map_into_right_body(),
                ));
            }

            // 校验会话令牌
            match extract_and_validate_session(&req).await {
                Ok(user) => {
                    debug!("Session validated for user ID: {}", user.id);
                    req.extensions_mut().insert(user);
                    let res = srv.call(req).await?.map_into_left_body();
                    Ok(res)
                }
                Err(err) => {
                    info!(
                        "Session validation failed for request to {}: {}",
                        req.path(),
                        err
                    );
                    Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
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
impl RequireSession {
    /// 从请求扩展中提取学生档案
    /// 此函数应该在应用了RequireSession中间件的路由处理程序中使用
    pub fn extract_user(req: &actix_web::HttpRequest) -> Option<UserProfile> {
        req.extensions().get::<UserProfile>().cloned()
    }

    /// 从请求扩展中提取用户ID
    /// 此函数应该在应用了RequireSession中间件的路由处理程序中使用
    pub fn extract_user_id(req: &actix_web::HttpRequest) -> Option<i64> {
        req.extensions().get::<UserProfile>().map(|user| user.id)
    }
}
