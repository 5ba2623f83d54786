//! 会议录像实体（本服务拥有写权限）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "meeting_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub created_by: i64,
    pub record_type: String,
    pub name: String,
    pub meeting_date: i64,
    pub status: String,
    pub url: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatedBy",
        to = "super::users::Column::Id"
    )]
    Creator,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_meeting_record(self) -> crate::models::meetings::entities::MeetingRecord {
        use chrono::{DateTime, Utc};

        crate::models::meetings::entities::MeetingRecord {
            id: self.id,
            course_id: self.course_id,
            record_type: self.record_type,
            name: self.name,
            meeting_date: DateTime::<Utc>::from_timestamp(self.meeting_date, 0)
                .unwrap_or_default(),
            status: self.status,
            url: self.url,
        }
    }
}
