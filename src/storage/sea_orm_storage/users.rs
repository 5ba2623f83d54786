//! 用户查询操作

use super::SeaOrmStorage;
use crate::entity::users::Entity as Users;
use crate::errors::{Result, StudentDashError};
use crate::models::users::entities::UserProfile;
use sea_orm::EntityTrait;

impl SeaOrmStorage {
    /// 通过 ID 获取学生档案
    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<UserProfile>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| StudentDashError::database_operation(format!("查询用户失败: {e}")))?;

        Ok(result.map(|m| m.into_profile()))
    }
}
