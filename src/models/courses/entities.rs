use serde::{Deserialize, Serialize};

// 课程（选课服务返回的形状）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub fullname: String,
}
