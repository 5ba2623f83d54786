//! 个人待办存储操作

use super::SeaOrmStorage;
use crate::entity::personal_activities::{ActiveModel, Column, Entity as PersonalActivities};
use crate::errors::{Result, StudentDashError};
use crate::models::activities::{entities::PersonalActivity, requests::NewPersonalActivity};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出某学生在某课程下的待办
    pub async fn list_personal_activities_impl(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Vec<PersonalActivity>> {
        let rows = PersonalActivities::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::DueDate)
            .all(&self.db)
            .await
            .map_err(|e| StudentDashError::database_operation(format!("查询待办失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_activity()).collect())
    }

    /// 创建待办
    pub async fn create_personal_activity_impl(
        &self,
        user_id: i64,
        activity: NewPersonalActivity,
    ) -> Result<PersonalActivity> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            course_id: Set(activity.course_id),
            task_name: Set(activity.task_name),
            due_date: Set(activity.due_date.timestamp()),
            modify_date: Set(activity.modify_date.timestamp()),
            status: Set(activity.status),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| StudentDashError::database_operation(format!("创建待办失败: {e}")))?;

        Ok(result.into_activity())
    }

    /// 删除待办
    ///
    /// 同时按 id 与所属用户过滤；删除别人的记录与删除不存在的记录
    /// 都是零行命中，对调用方不可区分。
    pub async fn delete_personal_activity_impl(
        &self,
        user_id: i64,
        activity_id: i64,
    ) -> Result<bool> {
        let result = PersonalActivities::delete_many()
            .filter(Column::Id.eq(activity_id))
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| StudentDashError::database_operation(format!("删除待办失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
