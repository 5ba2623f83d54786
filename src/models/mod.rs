pub mod activities;
pub mod common;
pub mod courses;
pub mod dashboard;
pub mod events;
pub mod exams;
pub mod grades;
pub mod meetings;
pub mod schedule;
pub mod tasks;
pub mod users;

pub use common::response::AjaxResponse;

// 程序启动时间，用于统计预处理耗时
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
