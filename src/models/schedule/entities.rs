use serde::{Deserialize, Serialize};

// 课表原始行：事件与其所属讲师的联结结果，按开始时间升序
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub lecturer_name: String,
    pub event_type: String,
    pub time_start: chrono::DateTime<chrono::Utc>,
    pub time_duration: i64,
}
