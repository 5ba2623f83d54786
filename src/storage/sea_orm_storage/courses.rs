//! 课程与教学人员查询操作

use super::SeaOrmStorage;
use crate::entity::enrolments::{Column as EnrolmentColumn, Entity as Enrolments};
use crate::entity::role_assignments::{Column as RoleAssignmentColumn, Entity as RoleAssignments};
use crate::entity::users::Entity as Users;
use crate::errors::{Result, StudentDashError};
use crate::models::courses::entities::Course;
use crate::models::users::entities::UserProfile;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

impl SeaOrmStorage {
    /// 列出某学生已选课程
    ///
    /// 顺序 = 选课行的插入顺序，对外不作承诺。
    pub async fn list_enrolled_courses_impl(&self, user_id: i64) -> Result<Vec<Course>> {
        let rows = Enrolments::find()
            .filter(EnrolmentColumn::UserId.eq(user_id))
            .order_by_asc(EnrolmentColumn::Id)
            .find_also_related(crate::entity::courses::Entity)
            .all(&self.db)
            .await
            .map_err(|e| StudentDashError::database_operation(format!("查询选课失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, course)| course)
            .map(|m| m.into_course())
            .collect())
    }

    /// 按角色列出课程教学人员
    pub async fn list_course_staff_impl(
        &self,
        course_id: i64,
        role_id: i64,
    ) -> Result<Vec<UserProfile>> {
        let rows = RoleAssignments::find()
            .filter(RoleAssignmentColumn::CourseId.eq(course_id))
            .filter(RoleAssignmentColumn::RoleId.eq(role_id))
            .order_by_asc(RoleAssignmentColumn::Id)
            .find_also_related(Users)
            .all(&self.db)
            .await
            .map_err(|e| {
                StudentDashError::database_operation(format!("查询课程教学人员失败: {e}"))
            })?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, user)| user)
            .map(|m| m.into_profile())
            .collect())
    }

    /// 统计课程选课学生数
    pub async fn count_enrolled_students_impl(&self, course_id: i64) -> Result<u64> {
        Enrolments::find()
            .filter(EnrolmentColumn::CourseId.eq(course_id))
            .count(&self.db)
            .await
            .map_err(|e| StudentDashError::database_operation(format!("统计选课人数失败: {e}")))
    }
}
