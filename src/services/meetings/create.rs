//! 创建会议录像

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::MeetingService;
use crate::errors::{Result, StudentDashError};
use crate::middlewares::RequireSession;
use crate::models::AjaxResponse;
use crate::models::meetings::requests::{CreateMeetingRequest, NewMeetingRecord};
use crate::utils::datetime::parse_request_date;

pub async fn create_meeting(
    service: &MeetingService,
    request: &HttpRequest,
    req: CreateMeetingRequest,
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

    let record = match validate_create_request(&req) {
        Ok(record) => record,
        Err(e) => {
            debug!("Meeting record validation failed: {}", e);
            return Ok(HttpResponse::Ok().json(AjaxResponse::failure("Invalid input")));
        }
    };

    match storage.create_meeting_record(user_id, record).await {
        Ok(created) => Ok(HttpResponse::Ok().json(AjaxResponse::created(created.id))),
        Err(e) => Ok(HttpResponse::Ok().json(AjaxResponse::failure(e.format_simple()))),
    }
}

/// 校验并解析创建请求；url 可缺省
pub(crate) fn validate_create_request(req: &CreateMeetingRequest) -> Result<NewMeetingRecord> {
    let course_id = required_field(req.course_id.as_deref(), "courseId")?;
    let record_type = required_field(req.record_type.as_deref(), "recordType")?;
    let name = required_field(req.name.as_deref(), "name")?;
    let meeting_date = required_field(req.meeting_date.as_deref(), "meetingDate")?;
    let status = required_field(req.status.as_deref(), "status")?;

    let course_id = course_id
        .parse::<i64>()
        .map_err(|_| StudentDashError::validation(format!("courseId 不是数字: {course_id}")))?;

    Ok(NewMeetingRecord {
        course_id,
        record_type: record_type.to_string(),
        name: name.to_string(),
        meeting_date: parse_request_date(meeting_date)?,
        status: status.to_string(),
        url: req
            .url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
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

    fn valid_request() -> CreateMeetingRequest {
        CreateMeetingRequest {
            course_id: Some("3".to_string()),
            record_type: Some("cloud".to_string()),
            name: Some("Week 4 lecture".to_string()),
            meeting_date: Some("2025-03-24 10:00".to_string()),
            status: Some("available".to_string()),
            url: None,
        }
    }

    #[test]
    fn test_valid_request_parses() {
        let record = validate_create_request(&valid_request()).unwrap();
        assert_eq!(record.course_id, 3);
        assert_eq!(record.record_type, "cloud");
        assert!(record.url.is_none());
    }

    #[test]
    fn test_missing_name_rejected() {
        let mut req = valid_request();
        req.name = None;
        assert!(validate_create_request(&req).is_err());
    }

    #[test]
    fn test_blank_url_becomes_none() {
        let mut req = valid_request();
        req.url = Some("   ".to_string());
        let record = validate_create_request(&req).unwrap();
        assert!(record.url.is_none());
    }
}
