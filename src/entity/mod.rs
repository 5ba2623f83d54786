//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行查询，然后转换为 models 中的业务实体。
//! 平台侧表（用户、课程、成绩等）只读；会议录像与个人待办由本服务写入。

pub mod prelude;

pub mod assignment_files;
pub mod assignment_submissions;
pub mod assignments;
pub mod courses;
pub mod enrolments;
pub mod events;
pub mod exams;
pub mod grades;
pub mod meeting_records;
pub mod personal_activities;
pub mod quiz_attempts;
pub mod quizzes;
pub mod role_assignments;
pub mod users;
