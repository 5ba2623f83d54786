//! 考试实体（平台侧，只读）
//!
//! 专用考试表是唯一的考试来源；早期按测验关闭时间推导的做法已作为
//! 一次性回填处理，不再是代码路径。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "exams")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub name: String,
    pub exam_type: String,
    pub starts_at: i64,
    pub duration_minutes: i64,
    pub location: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_exam(self) -> crate::models::exams::entities::Exam {
        use chrono::{DateTime, Utc};

        crate::models::exams::entities::Exam {
            id: self.id,
            course_id: self.course_id,
            name: self.name,
            exam_type: self.exam_type,
            starts_at: DateTime::<Utc>::from_timestamp(self.starts_at, 0).unwrap_or_default(),
            duration_minutes: self.duration_minutes,
            location: self.location,
        }
    }
}
