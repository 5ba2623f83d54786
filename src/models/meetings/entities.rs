use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 会议录像记录，直接进入响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/meeting.ts")]
pub struct MeetingRecord {
    pub id: i64,
    pub course_id: i64,
    pub record_type: String,
    pub name: String,
    pub meeting_date: chrono::DateTime<chrono::Utc>,
    pub status: String,
    pub url: Option<String>,
}
