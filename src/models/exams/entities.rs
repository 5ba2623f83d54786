use serde::{Deserialize, Serialize};

// 考试行（平台侧专用考试表）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exam {
    pub id: i64,
    pub course_id: i64,
    pub name: String,
    pub exam_type: String,
    pub starts_at: chrono::DateTime<chrono::Utc>,
    pub duration_minutes: i64,
    pub location: String,
}
