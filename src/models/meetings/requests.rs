use serde::{Deserialize, Serialize};

// 创建会议录像请求
//
// 字段全部可缺省，缺失/为空在服务层统一按校验失败处理，
// 不依赖反序列化报错。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMeetingRequest {
    #[serde(rename = "courseId")]
    pub course_id: Option<String>,
    #[serde(rename = "recordType")]
    pub record_type: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "meetingDate")]
    pub meeting_date: Option<String>,
    pub status: Option<String>,
    pub url: Option<String>,
}

// 更新会议录像状态请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMeetingStatusRequest {
    #[serde(rename = "zoomRecordId")]
    pub zoom_record_id: Option<String>,
    pub status: Option<String>,
}

// 校验解析之后的新建会议录像，进入存储层的形状
#[derive(Debug, Clone)]
pub struct NewMeetingRecord {
    pub course_id: i64,
    pub record_type: String,
    pub name: String,
    pub meeting_date: chrono::DateTime<chrono::Utc>,
    pub status: String,
    pub url: Option<String>,
}
