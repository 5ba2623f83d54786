//! 作业与测验查询操作

use super::SeaOrmStorage;
use crate::entity::assignment_files::{
    Column as AssignmentFileColumn, Entity as AssignmentFiles,
};
use crate::entity::assignment_submissions::{
    Column as SubmissionColumn, Entity as AssignmentSubmissions,
};
use crate::entity::assignments::{Column as AssignmentColumn, Entity as Assignments};
use crate::entity::quiz_attempts::{Column as AttemptColumn, Entity as QuizAttempts};
use crate::entity::quizzes::{Column as QuizColumn, Entity as Quizzes};
use crate::errors::{Result, StudentDashError};
use crate::models::tasks::entities::{
    ATTEMPT_STATE_FINISHED, Assignment, AssignmentSubmission, Quiz, QuizAttempt,
    SUBMISSION_STATUS_SUBMITTED,
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

// 文件区目录占位行的文件名
const DIRECTORY_FILE_NAME: &str = ".";

impl SeaOrmStorage {
    /// 列出课程作业
    pub async fn list_assignments_impl(&self, course_id: i64) -> Result<Vec<Assignment>> {
        let rows = Assignments::find()
            .filter(AssignmentColumn::CourseId.eq(course_id))
            .order_by_asc(AssignmentColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| StudentDashError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_assignment()).collect())
    }

    /// 统计某次作业已提交人数
    pub async fn count_submitted_submissions_impl(&self, assignment_id: i64) -> Result<u64> {
        AssignmentSubmissions::find()
            .filter(SubmissionColumn::AssignmentId.eq(assignment_id))
            .filter(SubmissionColumn::Status.eq(SUBMISSION_STATUS_SUBMITTED))
            .count(&self.db)
            .await
            .map_err(|e| StudentDashError::database_operation(format!("统计作业提交失败: {e}")))
    }

    /// 获取某学生对某次作业的提交
    pub async fn get_user_submission_impl(
        &self,
        assignment_id: i64,
        user_id: i64,
    ) -> Result<Option<AssignmentSubmission>> {
        let result = AssignmentSubmissions::find()
            .filter(SubmissionColumn::AssignmentId.eq(assignment_id))
            .filter(SubmissionColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| StudentDashError::database_operation(format!("查询作业提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 获取作业说明文件区第一个非目录文件名
    pub async fn first_assignment_file_impl(&self, assignment_id: i64) -> Result<Option<String>> {
        let result = AssignmentFiles::find()
            .filter(AssignmentFileColumn::AssignmentId.eq(assignment_id))
            .filter(AssignmentFileColumn::FileName.ne(DIRECTORY_FILE_NAME))
            .order_by_asc(AssignmentFileColumn::Id)
            .one(&self.db)
            .await
            .map_err(|e| StudentDashError::database_operation(format!("查询作业文件失败: {e}")))?;

        Ok(result.map(|m| m.file_name))
    }

    /// 列出课程测验
    pub async fn list_quizzes_impl(&self, course_id: i64) -> Result<Vec<Quiz>> {
        let rows = Quizzes::find()
            .filter(QuizColumn::CourseId.eq(course_id))
            .order_by_asc(QuizColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| StudentDashError::database_operation(format!("查询测验失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_quiz()).collect())
    }

    /// 统计某次测验已完成答题人数
    pub async fn count_finished_attempts_impl(&self, quiz_id: i64) -> Result<u64> {
        QuizAttempts::find()
            .filter(AttemptColumn::QuizId.eq(quiz_id))
            .filter(AttemptColumn::State.eq(ATTEMPT_STATE_FINISHED))
            .count(&self.db)
            .await
            .map_err(|e| StudentDashError::database_operation(format!("统计测验答题失败: {e}")))
    }

    /// 获取某学生对某次测验的已完成答题
    pub async fn get_user_finished_attempt_impl(
        &self,
        quiz_id: i64,
        user_id: i64,
    ) -> Result<Option<QuizAttempt>> {
        let result = QuizAttempts::find()
            .filter(AttemptColumn::QuizId.eq(quiz_id))
            .filter(AttemptColumn::UserId.eq(user_id))
            .filter(AttemptColumn::State.eq(ATTEMPT_STATE_FINISHED))
            .one(&self.db)
            .await
            .map_err(|e| StudentDashError::database_operation(format!("查询测验答题失败: {e}")))?;

        Ok(result.map(|m| m.into_attempt()))
    }
}
