use serde::{Deserialize, Serialize};

// 课程级最终成绩，一行对应一门课
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeRecord {
    pub id: i64,
    pub course_id: i64,
    pub final_grade: f64,
}
