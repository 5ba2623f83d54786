//! 更新会议录像状态

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MeetingService;
use crate::middlewares::RequireSession;
use crate::models::AjaxResponse;
use crate::models::meetings::requests::UpdateMeetingStatusRequest;

pub async fn update_meeting_status(
    service: &MeetingService,
    request: &HttpRequest,
    req: UpdateMeetingStatusRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 获取当前用户
    let user_id = match RequireSession::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(AjaxResponse::failure("Unauthorized: no session user")));
        }
    };

    let record_id = match req
        .zoom_record_id
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<i64>().ok())
    {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Ok().json(AjaxResponse::failure("Invalid input")));
        }
    };

    let status = match req.status.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(status) => status,
        None => {
            return Ok(HttpResponse::Ok().json(AjaxResponse::failure("Invalid input")));
        }
    };

    // 更新按 id + 创建者双重过滤；未命中不区分“不存在”与“不属于该用户”
    match storage
        .update_meeting_status(record_id, user_id, status)
        .await
    {
        Ok(true) => Ok(HttpResponse::Ok().json(AjaxResponse::ok())),
        Ok(false) => Ok(HttpResponse::Ok().json(AjaxResponse::failure("Record not found"))),
        Err(e) => Ok(HttpResponse::Ok().json(AjaxResponse::failure(e.format_simple()))),
    }
}
