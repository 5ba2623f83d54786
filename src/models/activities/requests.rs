use serde::{Deserialize, Serialize};

// 创建个人待办请求
//
// 五个字段缺一不可；缺失/为空在服务层按校验失败处理并返回
// success=false，不触发存储写入。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateActivityRequest {
    #[serde(rename = "courseId")]
    pub course_id: Option<String>,
    #[serde(rename = "taskName")]
    pub task_name: Option<String>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<String>,
    #[serde(rename = "modifyDate")]
    pub modify_date: Option<String>,
    pub status: Option<String>,
}

// 删除个人待办请求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteActivityRequest {
    #[serde(rename = "taskId")]
    pub task_id: Option<String>,
}

// 校验解析之后的新建待办，进入存储层的形状
#[derive(Debug, Clone)]
pub struct NewPersonalActivity {
    pub course_id: i64,
    pub task_name: String,
    pub due_date: chrono::DateTime<chrono::Utc>,
    pub modify_date: chrono::DateTime<chrono::Utc>,
    pub status: String,
}
