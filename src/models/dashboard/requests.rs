use serde::Deserialize;

// 仪表盘查询参数
//
// courseId 缺省时仍返回完整课程列表，但 personalActivities 为空列表：
// 个人待办必须显式按课程查询，不存在“无过滤”语义。
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardQuery {
    #[serde(rename = "courseId")]
    pub course_id: Option<i64>,
}
