use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课表条目类型：course 事件是讲座，user 事件是练习课，其余归为 other
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub enum SlotKind {
    Lecture,
    Practice,
    Other,
}

// 展示用课表条目
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/schedule.ts")]
pub struct ScheduleEntry {
    pub lecturer_name: String,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(rename = "type")]
    pub slot_type: SlotKind,
}
