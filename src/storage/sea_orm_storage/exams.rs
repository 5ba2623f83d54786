//! 考试查询操作

use super::SeaOrmStorage;
use crate::entity::exams::{Column, Entity as Exams};
use crate::errors::{Result, StudentDashError};
use crate::models::exams::entities::Exam;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 列出课程考试，按开始时间升序
    pub async fn list_course_exams_impl(&self, course_id: i64) -> Result<Vec<Exam>> {
        let rows = Exams::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::StartsAt)
            .all(&self.db)
            .await
            .map_err(|e| StudentDashError::database_operation(format!("查询考试失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_exam()).collect())
    }
}
