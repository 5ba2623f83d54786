use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 展示用考试条目：日期 YYYY-MM-DD，时间 HH:MM
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/exam.ts")]
pub struct ExamEntry {
    pub id: i64,
    pub name: String,
    pub exam_type: String,
    pub exam_date: String,
    pub exam_time: String,
    pub duration_minutes: i64,
    pub location: String,
}
