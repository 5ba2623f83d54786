use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::{method_not_allowed, scope_cors};
use crate::middlewares;
use crate::models::activities::requests::{CreateActivityRequest, DeleteActivityRequest};
use crate::services::ActivityService;

// 懒加载的全局 ActivityService 实例
static ACTIVITY_SERVICE: Lazy<ActivityService> = Lazy::new(ActivityService::new_lazy);

// 创建个人待办
pub async fn create_activity(
    req: HttpRequest,
    body: web::Json<CreateActivityRequest>,
) -> ActixResult<HttpResponse> {
    ACTIVITY_SERVICE
        .create_activity(&req, body.into_inner())
        .await
}

// 删除个人待办
pub async fn delete_activity(
    req: HttpRequest,
    body: web::Json<DeleteActivityRequest>,
) -> ActixResult<HttpResponse> {
    ACTIVITY_SERVICE
        .delete_activity(&req, body.into_inner())
        .await
}

// 配置路由
pub fn configure_activities_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/activities")
            .wrap(middlewares::RequireSession)
            .wrap(scope_cors(vec!["POST", "DELETE"]))
            .service(
                web::resource("")
                    // 创建待办 - 记在当前会话用户名下
                    .route(web::post().to(create_activity))
                    // 删除待办 - 只作用于当前会话用户自己的记录
                    .route(web::delete().to(delete_activity))
                    .default_service(web::route().to(method_not_allowed)),
            ),
    );
}
