use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 个人待办，仅所属用户可见
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/activity.ts")]
pub struct PersonalActivity {
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
    pub task_name: String,
    pub due_date: chrono::DateTime<chrono::Utc>,
    pub modify_date: chrono::DateTime<chrono::Utc>,
    pub status: String,
}
