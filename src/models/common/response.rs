use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 写接口的统一响应结构
//
// 校验失败与存储失败都以 HTTP 200 + success=false 返回，
// 错误种类在服务内部用 StudentDashError 区分，不做字符串匹配。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/api.ts")]
pub struct AjaxResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AjaxResponse {
    pub fn ok() -> Self {
        Self {
            success: true,
            task_id: None,
            error: None,
        }
    }

    pub fn created(task_id: i64) -> Self {
        Self {
            success: true,
            task_id: Some(task_id),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            task_id: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_shape() {
        let value = serde_json::to_value(AjaxResponse::ok()).unwrap();
        assert_eq!(value, serde_json::json!({"success": true}));
    }

    #[test]
    fn test_created_shape() {
        let value = serde_json::to_value(AjaxResponse::created(42)).unwrap();
        assert_eq!(value, serde_json::json!({"success": true, "task_id": 42}));
    }

    #[test]
    fn test_failure_shape() {
        let value = serde_json::to_value(AjaxResponse::failure("Invalid input")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"success": false, "error": "Invalid input"})
        );
    }
}
