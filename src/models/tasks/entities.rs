use serde::{Deserialize, Serialize};

// 作业提交状态值，与宿主平台约定一致
pub const SUBMISSION_STATUS_SUBMITTED: &str = "submitted";
// 测验答题完成状态值
pub const ATTEMPT_STATE_FINISHED: &str = "finished";

// 作业行（平台侧）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub course_id: i64,
    pub name: String,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
}

// 某个学生对某次作业的提交
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssignmentSubmission {
    pub id: i64,
    pub assignment_id: i64,
    pub user_id: i64,
    pub status: String,
    pub time_modified: chrono::DateTime<chrono::Utc>,
}

// 测验行（平台侧）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    pub id: i64,
    pub course_id: i64,
    pub name: String,
    pub time_close: Option<chrono::DateTime<chrono::Utc>>,
}

// 某个学生对某次测验的答题
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizAttempt {
    pub id: i64,
    pub quiz_id: i64,
    pub user_id: i64,
    pub state: String,
    pub time_modified: chrono::DateTime<chrono::Utc>,
}
