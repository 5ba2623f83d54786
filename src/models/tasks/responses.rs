use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 任务类型标签：作业与测验合并为一个任务列表后靠它区分
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/task.ts")]
pub enum TaskKind {
    Assignment,
    Quiz,
}

// 学生本人的完成状态；措辞按任务类型区分
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/task.ts")]
pub enum TaskStatus {
    #[serde(rename = "Submitted")]
    Submitted,
    #[serde(rename = "Not Submitted")]
    NotSubmitted,
    #[serde(rename = "Attempted")]
    Attempted,
    #[serde(rename = "Not Attempted")]
    NotAttempted,
}

// 课程任务（作业/测验统一形状）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/task.ts")]
pub struct CourseTask {
    pub task_id: i64,
    pub task_type: TaskKind,
    pub task_name: String,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    pub task_status: TaskStatus,
    pub modify_date: Option<chrono::DateTime<chrono::Utc>>,
    pub submission_percentage: f64,
    pub url: String,
    // 仅作业有说明文件下载链接
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}
