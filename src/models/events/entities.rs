use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程日历事件，直接进入响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/event.ts")]
pub struct CalendarEvent {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub time_start: chrono::DateTime<chrono::Utc>,
    // 持续时长（秒）
    pub time_duration: i64,
}
