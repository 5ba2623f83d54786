//! 任务合成：作业与测验合并为统一的任务列表
//!
//! 顺序为先作业后测验，两段各自跟随存储层顺序，不做跨类型排序。

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::tasks::responses::{CourseTask, TaskKind, TaskStatus};
use crate::storage::Storage;

/// 合成某学生在某课程下的任务列表
pub async fn compose_tasks(
    storage: &dyn Storage,
    user_id: i64,
    course_id: i64,
) -> Result<Vec<CourseTask>> {
    let base_url = AppConfig::get().platform_base_url();

    // 两类任务的完成率共用同一个分母
    let enrolled = storage.count_enrolled_students(course_id).await?;

    let mut tasks = Vec::new();

    for assignment in storage.list_assignments(course_id).await? {
        let submitted = storage.count_submitted_submissions(assignment.id).await?;
        let submission = storage.get_user_submission(assignment.id, user_id).await?;
        let file_url = storage
            .first_assignment_file(assignment.id)
            .await?
            .map(|name| assignment_file_url(base_url, assignment.id, &name));

        let task_status = if submission.is_some() {
            TaskStatus::Submitted
        } else {
            TaskStatus::NotSubmitted
        };

        tasks.push(CourseTask {
            task_id: assignment.id,
            task_type: TaskKind::Assignment,
            task_name: assignment.name,
            due_date: assignment.due_date,
            task_status,
            modify_date: submission.map(|s| s.time_modified),
            submission_percentage: completion_percentage(submitted, enrolled),
            url: assignment_url(base_url, assignment.id),
            file_url,
        });
    }

    for quiz in storage.list_quizzes(course_id).await? {
        let finished = storage.count_finished_attempts(quiz.id).await?;
        let attempt = storage.get_user_finished_attempt(quiz.id, user_id).await?;

        let task_status = if attempt.is_some() {
            TaskStatus::Attempted
        } else {
            TaskStatus::NotAttempted
        };

        tasks.push(CourseTask {
            task_id: quiz.id,
            task_type: TaskKind::Quiz,
            task_name: quiz.name,
            due_date: quiz.time_close,
            task_status,
            modify_date: attempt.map(|a| a.time_modified),
            submission_percentage: completion_percentage(finished, enrolled),
            url: quiz_url(base_url, quiz.id),
            file_url: None,
        });
    }

    Ok(tasks)
}

/// 课程范围完成率：完成人数 / 选课人数 × 100
///
/// 没有选课学生的课程定义为 0%，任何输入都不会产生非有限值。
pub fn completion_percentage(completed: u64, enrolled: u64) -> f64 {
    if enrolled == 0 {
        return 0.0;
    }
    completed as f64 / enrolled as f64 * 100.0
}

fn assignment_url(base_url: &str, assignment_id: i64) -> String {
    format!("{base_url}/mod/assign/view.php?id={assignment_id}")
}

fn quiz_url(base_url: &str, quiz_id: i64) -> String {
    format!("{base_url}/mod/quiz/view.php?id={quiz_id}")
}

fn assignment_file_url(base_url: &str, assignment_id: i64, file_name: &str) -> String {
    format!("{base_url}/pluginfile.php/assign/{assignment_id}/intro/{file_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_basic() {
        assert_eq!(completion_percentage(5, 10), 50.0);
        assert_eq!(completion_percentage(10, 10), 100.0);
        assert_eq!(completion_percentage(0, 10), 0.0);
    }

    #[test]
    fn test_percentage_zero_enrolled_is_zero() {
        assert_eq!(completion_percentage(0, 0), 0.0);
        assert_eq!(completion_percentage(3, 0), 0.0);
    }

    #[test]
    fn test_percentage_always_finite() {
        for completed in 0..20u64 {
            for enrolled in 0..20u64 {
                assert!(completion_percentage(completed, enrolled).is_finite());
            }
        }
    }

    #[test]
    fn test_percentage_in_range_for_valid_counts() {
        for enrolled in 1..20u64 {
            for completed in 0..=enrolled {
                let pct = completion_percentage(completed, enrolled);
                assert!((0.0..=100.0).contains(&pct));
            }
        }
    }

    #[test]
    fn test_deep_links() {
        assert_eq!(
            assignment_url("https://lms.example", 7),
            "https://lms.example/mod/assign/view.php?id=7"
        );
        assert_eq!(
            quiz_url("https://lms.example", 9),
            "https://lms.example/mod/quiz/view.php?id=9"
        );
        assert_eq!(
            assignment_file_url("https://lms.example", 7, "brief.pdf"),
            "https://lms.example/pluginfile.php/assign/7/intro/brief.pdf"
        );
    }
}
