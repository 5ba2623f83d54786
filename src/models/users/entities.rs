use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学生档案
//
// 身份子系统拥有这些字段，本服务只读。major 与 academic_year 是
// 扩展属性，可能缺失。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/user.ts")]
pub struct UserProfile {
    pub id: i64,
    pub id_number: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: Option<String>,
    pub institution: Option<String>,
    pub department: Option<String>,
    pub major: Option<String>,
    pub academic_year: Option<String>,
}

impl UserProfile {
    // 全名，讲师/助教字段用
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }
}
