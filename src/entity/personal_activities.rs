//! 个人待办实体（本服务拥有写权限）
//!
//! 只对所属用户可见，删除必须同时匹配 id 与 user_id。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "personal_activities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub course_id: i64,
    pub task_name: String,
    pub due_date: i64,
    pub modify_date: i64,
    pub status: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_activity(self) -> crate::models::activities::entities::PersonalActivity {
        use chrono::{DateTime, Utc};

        crate::models::activities::entities::PersonalActivity {
            id: self.id,
            user_id: self.user_id,
            course_id: self.course_id,
            task_name: self.task_name,
            due_date: DateTime::<Utc>::from_timestamp(self.due_date, 0).unwrap_or_default(),
            modify_date: DateTime::<Utc>::from_timestamp(self.modify_date, 0).unwrap_or_default(),
            status: self.status,
        }
    }
}
