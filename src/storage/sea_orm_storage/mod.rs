//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。
//! 迁移在启动时运行一次（if_not_exists，幂等），请求路径里没有 DDL。

mod activities;
mod courses;
mod events;
mod exams;
mod grades;
mod meetings;
mod tasks;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, StudentDashError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| StudentDashError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| StudentDashError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| StudentDashError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| StudentDashError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(StudentDashError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use chrono::{DateTime, Utc};

use crate::models::{
    activities::{entities::PersonalActivity, requests::NewPersonalActivity},
    courses::entities::Course,
    events::entities::CalendarEvent,
    exams::entities::Exam,
    grades::entities::GradeRecord,
    meetings::{entities::MeetingRecord, requests::NewMeetingRecord},
    schedule::entities::ScheduleRow,
    tasks::entities::{Assignment, AssignmentSubmission, Quiz, QuizAttempt},
    users::entities::UserProfile,
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn get_user_by_id(&self, id: i64) -> Result<Option<UserProfile>> {
        self.get_user_by_id_impl(id).await
    }

    // 成绩模块
    async fn list_course_grades(&self, user_id: i64) -> Result<Vec<GradeRecord>> {
        self.list_course_grades_impl(user_id).await
    }

    // 课程模块
    async fn list_enrolled_courses(&self, user_id: i64) -> Result<Vec<Course>> {
        self.list_enrolled_courses_impl(user_id).await
    }

    async fn list_course_staff(&self, course_id: i64, role_id: i64) -> Result<Vec<UserProfile>> {
        self.list_course_staff_impl(course_id, role_id).await
    }

    async fn count_enrolled_students(&self, course_id: i64) -> Result<u64> {
        self.count_enrolled_students_impl(course_id).await
    }

    // 作业与测验模块
    async fn list_assignments(&self, course_id: i64) -> Result<Vec<Assignment>> {
        self.list_assignments_impl(course_id).await
    }

    async fn count_submitted_submissions(&self, assignment_id: i64) -> Result<u64> {
        self.count_submitted_submissions_impl(assignment_id).await
    }

    async fn get_user_submission(
        &self,
        assignment_id: i64,
        user_id: i64,
    ) -> Result<Option<AssignmentSubmission>> {
        self.get_user_submission_impl(assignment_id, user_id).await
    }

    async fn first_assignment_file(&self, assignment_id: i64) -> Result<Option<String>> {
        self.first_assignment_file_impl(assignment_id).await
    }

    async fn list_quizzes(&self, course_id: i64) -> Result<Vec<Quiz>> {
        self.list_quizzes_impl(course_id).await
    }

    async fn count_finished_attempts(&self, quiz_id: i64) -> Result<u64> {
        self.count_finished_attempts_impl(quiz_id).await
    }

    async fn get_user_finished_attempt(
        &self,
        quiz_id: i64,
        user_id: i64,
    ) -> Result<Option<QuizAttempt>> {
        self.get_user_finished_attempt_impl(quiz_id, user_id).await
    }

    // 日历与课表模块
    async fn list_course_events(
        &self,
        user_id: i64,
        course_id: i64,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>> {
        self.list_course_events_impl(user_id, course_id, from, until)
            .await
    }

    async fn list_course_schedule(&self, course_id: i64) -> Result<Vec<ScheduleRow>> {
        self.list_course_schedule_impl(course_id).await
    }

    // 考试模块
    async fn list_course_exams(&self, course_id: i64) -> Result<Vec<Exam>> {
        self.list_course_exams_impl(course_id).await
    }

    // 会议录像模块
    async fn list_meeting_records(&self, course_id: i64) -> Result<Vec<MeetingRecord>> {
        self.list_meeting_records_impl(course_id).await
    }

    async fn create_meeting_record(
        &self,
        created_by: i64,
        record: NewMeetingRecord,
    ) -> Result<MeetingRecord> {
        self.create_meeting_record_impl(created_by, record).await
    }

    async fn update_meeting_status(
        &self,
        record_id: i64,
        user_id: i64,
        status: &str,
    ) -> Result<bool> {
        self.update_meeting_status_impl(record_id, user_id, status)
            .await
    }

    // 个人待办模块
    async fn list_personal_activities(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Vec<PersonalActivity>> {
        self.list_personal_activities_impl(user_id, course_id).await
    }

    async fn create_personal_activity(
        &self,
        user_id: i64,
        activity: NewPersonalActivity,
    ) -> Result<PersonalActivity> {
        self.create_personal_activity_impl(user_id, activity).await
    }

    async fn delete_personal_activity(&self, user_id: i64, activity_id: i64) -> Result<bool> {
        self.delete_personal_activity_impl(user_id, activity_id)
            .await
    }
}
