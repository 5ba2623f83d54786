use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

/// 数据访问网关
///
/// 每个方法对应一条命名查询，过滤值一律走绑定参数。
/// 平台侧表只读；会议录像与个人待办是本服务仅有的写入面。
/// 存储不可用时直接以错误形式向上传播，请求内不做重试。
#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户查询方法
    // 通过ID获取学生档案
    async fn get_user_by_id(&self, id: i64) -> Result<Option<UserProfile>>;

    /// 成绩查询方法
    // 列出某学生的课程级最终成绩
    async fn list_course_grades(&self, user_id: i64) -> Result<Vec<GradeRecord>>;

    /// 课程与人员查询方法
    // 列出某学生已选课程，顺序跟随存储层
    async fn list_enrolled_courses(&self, user_id: i64) -> Result<Vec<Course>>;
    // 按角色列出课程教学人员
    async fn list_course_staff(&self, course_id: i64, role_id: i64) -> Result<Vec<UserProfile>>;
    // 统计课程选课学生数
    async fn count_enrolled_students(&self, course_id: i64) -> Result<u64>;

    /// 作业与测验查询方法
    // 列出课程作业
    async fn list_assignments(&self, course_id: i64) -> Result<Vec<Assignment>>;
    // 统计某次作业已提交人数
    async fn count_submitted_submissions(&self, assignment_id: i64) -> Result<u64>;
    // 获取某学生对某次作业的提交
    async fn get_user_submission(
        &self,
        assignment_id: i64,
        user_id: i64,
    ) -> Result<Option<AssignmentSubmission>>;
    // 获取作业说明文件区第一个非目录文件名
    async fn first_assignment_file(&self, assignment_id: i64) -> Result<Option<String>>;
    // 列出课程测验
    async fn list_quizzes(&self, course_id: i64) -> Result<Vec<Quiz>>;
    // 统计某次测验已完成答题人数
    async fn count_finished_attempts(&self, quiz_id: i64) -> Result<u64>;
    // 获取某学生对某次测验的已完成答题
    async fn get_user_finished_attempt(
        &self,
        quiz_id: i64,
        user_id: i64,
    ) -> Result<Option<QuizAttempt>>;

    /// 日历与课表查询方法
    // 列出窗口内的课程日历事件
    async fn list_course_events(
        &self,
        user_id: i64,
        course_id: i64,
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<CalendarEvent>>;
    // 列出课程课表行，按开始时间升序
    async fn list_course_schedule(&self, course_id: i64) -> Result<Vec<ScheduleRow>>;

    /// 考试查询方法
    async fn list_course_exams(&self, course_id: i64) -> Result<Vec<Exam>>;

    /// 会议录像方法
    // 列出课程会议录像
    async fn list_meeting_records(&self, course_id: i64) -> Result<Vec<MeetingRecord>>;
    // 创建会议录像
    async fn create_meeting_record(
        &self,
        created_by: i64,
        record: NewMeetingRecord,
    ) -> Result<MeetingRecord>;
    // 更新会议录像状态，按 id 与创建者双重过滤
    async fn update_meeting_status(
        &self,
        record_id: i64,
        user_id: i64,
        status: &str,
    ) -> Result<bool>;

    /// 个人待办方法
    // 列出某学生在某课程下的待办
    async fn list_personal_activities(
        &self,
        user_id: i64,
        course_id: i64,
    ) -> Result<Vec<PersonalActivity>>;
    // 创建待办
    async fn create_personal_activity(
        &self,
        user_id: i64,
        activity: NewPersonalActivity,
    ) -> Result<PersonalActivity>;
    // 删除待办，按 id 与所属用户双重过滤
    async fn delete_personal_activity(&self, user_id: i64, activity_id: i64) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
