use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::{method_not_allowed, scope_cors};
use crate::middlewares;
use crate::models::meetings::requests::{CreateMeetingRequest, UpdateMeetingStatusRequest};
use crate::services::MeetingService;

// 懒加载的全局 MeetingService 实例
static MEETING_SERVICE: Lazy<MeetingService> = Lazy::new(MeetingService::new_lazy);

// 创建会议录像
pub async fn create_meeting(
    req: HttpRequest,
    body: web::Json<CreateMeetingRequest>,
) -> ActixResult<HttpResponse> {
    MEETING_SERVICE.create_meeting(&req, body.into_inner()).await
}

// 更新会议录像状态
pub async fn update_meeting_status(
    req: HttpRequest,
    body: web::Json<UpdateMeetingStatusRequest>,
) -> ActixResult<HttpResponse> {
    MEETING_SERVICE
        .update_meeting_status(&req, body.into_inner())
        .await
}

// 配置路由
pub fn configure_meetings_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/meetings")
            .wrap(middlewares::RequireSession)
            .wrap(scope_cors(vec!["POST", "PATCH"]))
            .service(
                web::resource("")
                    // 创建录像条目 - 记在当前会话用户名下
                    .route(web::post().to(create_meeting))
                    .default_service(web::route().to(method_not_allowed)),
            )
            .service(
                web::resource("/status")
                    // 更新状态 - 服务层校验创建者
                    .route(web::patch().to(update_meeting_status))
                    .default_service(web::route().to(method_not_allowed)),
            ),
    );
}
