//! 成绩查询操作

use super::SeaOrmStorage;
use crate::entity::grades::{Column, Entity as Grades};
use crate::errors::{Result, StudentDashError};
use crate::models::grades::entities::GradeRecord;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

// 课程级成绩项的类型标记
const COURSE_ITEM_TYPE: &str = "course";

impl SeaOrmStorage {
    /// 列出某学生的课程级最终成绩
    pub async fn list_course_grades_impl(&self, user_id: i64) -> Result<Vec<GradeRecord>> {
        let rows = Grades::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ItemType.eq(COURSE_ITEM_TYPE))
            .all(&self.db)
            .await
            .map_err(|e| StudentDashError::database_operation(format!("查询成绩失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_grade_record()).collect())
    }
}
