//! 会议录像存储操作

use super::SeaOrmStorage;
use crate::entity::meeting_records::{ActiveModel, Column, Entity as MeetingRecords};
use crate::errors::{Result, StudentDashError};
use crate::models::meetings::{entities::MeetingRecord, requests::NewMeetingRecord};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 列出课程会议录像
    pub async fn list_meeting_records_impl(&self, course_id: i64) -> Result<Vec<MeetingRecord>> {
        let rows = MeetingRecords::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::MeetingDate)
            .all(&self.db)
            .await
            .map_err(|e| StudentDashError::database_operation(format!("查询会议录像失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_meeting_record()).collect())
    }

    /// 创建会议录像
    pub async fn create_meeting_record_impl(
        &self,
        created_by: i64,
        record: NewMeetingRecord,
    ) -> Result<MeetingRecord> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_id: Set(record.course_id),
            created_by: Set(created_by),
            record_type: Set(record.record_type),
            name: Set(record.name),
            meeting_date: Set(record.meeting_date.timestamp()),
            status: Set(record.status),
            url: Set(record.url),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| StudentDashError::database_operation(format!("创建会议录像失败: {e}")))?;

        Ok(result.into_meeting_record())
    }

    /// 更新会议录像状态
    ///
    /// 同时按 id 与创建者过滤；没有命中行时返回 false，
    /// 不区分“不存在”与“不属于该用户”。
    pub async fn update_meeting_status_impl(
        &self,
        record_id: i64,
        user_id: i64,
        status: &str,
    ) -> Result<bool> {
        let result = MeetingRecords::update_many()
            .col_expr(Column::Status, sea_orm::sea_query::Expr::value(status))
            .filter(Column::Id.eq(record_id))
            .filter(Column::CreatedBy.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                StudentDashError::database_operation(format!("更新会议录像状态失败: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }
}
