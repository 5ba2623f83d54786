//! 创建个人待办

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::ActivityService;
use crate::errors::{Result, StudentDashError};
use crate::middlewares::RequireSession;
use crate::models::AjaxResponse;
use crate::models::activities::requests::{CreateActivityRequest, NewPersonalActivity};
use crate::utils::datetime::parse_request_date;

pub async fn create_activity(
    service: &ActivityService,
    request: &HttpRequest,
    req: CreateActivityRequest,
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

    // 字段校验在任何写入之前完成；失败统一回 "Invalid input"
    let activity = match validate_create_request(&req) {
        Ok(activity) => activity,
        Err(e) => {
            debug!("Activity validation failed: {}", e);
            return Ok(HttpResponse::Ok().json(AjaxResponse::failure("Invalid input")));
        }
    };

    match storage.create_personal_activity(user_id, activity).await {
        Ok(created) => Ok(HttpResponse::Ok().json(AjaxResponse::created(created.id))),
        Err(e) => Ok(HttpResponse::Ok().json(AjaxResponse::failure(e.format_simple()))),
    }
}

/// 校验并解析创建请求
///
/// 五个字段都必须存在且非空，日期从文本解析成时间戳。
pub(crate) fn validate_create_request(
    req: &CreateActivityRequest,
) -> Result<NewPersonalActivity> {
    let course_id = required_field(req.course_id.as_deref(), "courseId")?;
    let task_name = required_field(req.task_name.as_deref(), "taskName")?;
    let due_date = required_field(req.due_date.as_deref(), "dueDate")?;
    let modify_date = required_field(req.modify_date.as_deref(), "modifyDate")?;
    let status = required_field(req.status.as_deref(), "status")?;

    let course_id = course_id
        .parse::<i64>()
        .map_err(|_| StudentDashError::validation(format!("courseId 不是数字: {course_id}")))?;

    Ok(NewPersonalActivity {
        course_id,
        task_name: task_name.to_string(),
        due_date: parse_request_date(due_date)?,
        modify_date: parse_request_date(modify_date)?,
        status: status.to_string(),
    })
}

fn required_field<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(StudentDashError::validation(format!("缺少字段: {field}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateActivityRequest {
        CreateActivityRequest {
            course_id: Some("5".to_string()),
            task_name: Some("Essay".to_string()),
            due_date: Some("2025-01-10".to_string()),
            modify_date: Some("2025-01-10".to_string()),
            status: Some("open".to_string()),
        }
    }

    #[test]
    fn test_valid_request_parses() {
        let activity = validate_create_request(&valid_request()).unwrap();
        assert_eq!(activity.course_id, 5);
        assert_eq!(activity.task_name, "Essay");
        assert_eq!(activity.status, "open");
    }

    #[test]
    fn test_missing_task_name_rejected() {
        let mut req = valid_request();
        req.task_name = None;
        assert!(validate_create_request(&req).is_err());
    }

    #[test]
    fn test_empty_status_rejected() {
        let mut req = valid_request();
        req.status = Some("   ".to_string());
        assert!(validate_create_request(&req).is_err());
    }

    #[test]
    fn test_non_numeric_course_id_rejected() {
        let mut req = valid_request();
        req.course_id = Some("algebra".to_string());
        assert!(validate_create_request(&req).is_err());
    }

    #[test]
    fn test_bad_due_date_rejected() {
        let mut req = valid_request();
        req.due_date = Some("10/01/2025".to_string());
        assert!(validate_create_request(&req).is_err());
    }
}
