//! 删除个人待办

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ActivityService;
use crate::middlewares::RequireSession;
use crate::models::AjaxResponse;
use crate::models::activities::requests::DeleteActivityRequest;

pub async fn delete_activity(
    service: &ActivityService,
    request: &HttpRequest,
    req: DeleteActivityRequest,
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

    let task_id = match req
        .task_id
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

    // 删除按 id + 所属用户双重过滤；零行命中同样算成功，
    // 不泄露他人记录是否存在
    match storage.delete_personal_activity(user_id, task_id).await {
        Ok(_) => Ok(HttpResponse::Ok().json(AjaxResponse::ok())),
        Err(e) => Ok(HttpResponse::Ok().json(AjaxResponse::failure(e.format_simple()))),
    }
}
