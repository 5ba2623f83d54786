//! 日历事件与课表查询操作

use super::SeaOrmStorage;
use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder};

use crate::entity::events::{Column, Entity as Events};
use crate::entity::users::Entity as Users;
use crate::errors::{Result, StudentDashError};
use crate::models::events::entities::CalendarEvent;
use crate::models::schedule::entities::ScheduleRow;

// user 类型事件只对其所属用户可见
const USER_EVENT_TYPE: &str = "user";

impl SeaOrmStorage {
    /// 列出窗口内的课程日历事件
    ///
    /// 课程级事件对所有人可见，user 类型事件只返回查询者自己的。
    pub async fn list_course_events_impl(
        &self,
        user_id: i64,
        course_id: i64,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>> {
        let rows = Events::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::TimeStart.gte(from.timestamp()))
            .filter(Column::TimeStart.lt(until.timestamp()))
            .filter(
                Condition::any()
                    .add(Column::EventType.ne(USER_EVENT_TYPE))
                    .add(Column::UserId.eq(user_id)),
            )
            .order_by_asc(Column::TimeStart)
            .all(&self.db)
            .await
            .map_err(|e| StudentDashError::database_operation(format!("查询日历事件失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_event()).collect())
    }

    /// 列出课程课表行，按开始时间升序
    ///
    /// 事件与其所属讲师联结，讲师姓名在这里拼好。
    pub async fn list_course_schedule_impl(&self, course_id: i64) -> Result<Vec<ScheduleRow>> {
        let rows = Events::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::TimeStart)
            .find_also_related(Users)
            .all(&self.db)
            .await
            .map_err(|e| StudentDashError::database_operation(format!("查询课表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(event, user)| {
                let lecturer_name = user.map(|u| u.full_name())?;
                Some(ScheduleRow {
                    lecturer_name,
                    event_type: event.event_type,
                    time_start: DateTime::<Utc>::from_timestamp(event.time_start, 0)?,
                    time_duration: event.time_duration,
                })
            })
            .collect())
    }
}
