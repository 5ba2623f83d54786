//! 课程合成
//!
//! 为每门已选课程解析教学人员、拼深链接，并把任务、事件、课表、
//! 考试与会议录像合并进同一条课程记录，最后算学期进度。

use chrono::{NaiveDate, Utc};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::courses::responses::{CourseOverview, StaffContact};
use crate::storage::Storage;

use super::{exams, schedule, tasks};

/// 合成某学生的全部课程视图
///
/// 课程顺序 = 选课存储的自然顺序，对外不作承诺。
pub async fn compose_courses(storage: &dyn Storage, user_id: i64) -> Result<Vec<CourseOverview>> {
    let config = AppConfig::get();
    let base_url = config.platform_base_url();
    let now = Utc::now();

    // 日历事件窗口：今天零点起往后 events_window_days 天
    let window_start = now
        .date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or(now);
    let window_end = window_start + chrono::Duration::days(config.platform.events_window_days);

    let progression = config
        .semester_start()
        .map(|start| {
            progression_percent(start, config.semester.length_weeks, now.date_naive())
        })
        .unwrap_or(0);

    let mut overviews = Vec::new();

    for course in storage.list_enrolled_courses(user_id).await? {
        // 主讲取该角色下的第一位；课程可以没有主讲，此时字段为 null
        let lecturer = storage
            .list_course_staff(course.id, config.platform.lecturer_role_id)
            .await?
            .into_iter()
            .next();
        let assistants = storage
            .list_course_staff(course.id, config.platform.assistant_role_id)
            .await?;

        let course_tasks = tasks::compose_tasks(storage, user_id, course.id).await?;
        let events = storage
            .list_course_events(user_id, course.id, window_start, window_end)
            .await?;
        let course_schedule = schedule::compose_schedule(
            storage.list_course_schedule(course.id).await?,
        );
        let course_exams = exams::compose_exams(storage.list_course_exams(course.id).await?);
        let meeting_records = storage.list_meeting_records(course.id).await?;

        overviews.push(CourseOverview {
            id: course.id,
            fullname: course.fullname,
            lecturer: lecturer.as_ref().map(|l| l.full_name()),
            lectureremail: lecturer.as_ref().map(|l| l.email.clone()),
            assistants: assistants
                .into_iter()
                .map(|a| StaffContact {
                    name: a.full_name(),
                    email: a.email,
                })
                .collect(),
            url: course_url(base_url, course.id),
            progression,
            tasks: course_tasks,
            events,
            schedule: course_schedule,
            exams: course_exams,
            meeting_records,
        });
    }

    Ok(overviews)
}

/// 学期进度百分比
///
/// 自固定学期开始日起按周线性推进，四舍五入后夹在 [0, 100]。
pub fn progression_percent(semester_start: NaiveDate, length_weeks: u32, today: NaiveDate) -> i64 {
    if length_weeks == 0 {
        return 0;
    }

    let elapsed_days = (today - semester_start).num_days();
    let elapsed_weeks = elapsed_days as f64 / 7.0;
    let percent = (elapsed_weeks / length_weeks as f64 * 100.0).round() as i64;

    percent.clamp(0, 100)
}

fn course_url(base_url: &str, course_id: i64) -> String {
    format!("{base_url}/course/view.php?id={course_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_progression_at_start_is_zero() {
        let start = date(2025, 3, 2);
        assert_eq!(progression_percent(start, 14, start), 0);
    }

    #[test]
    fn test_progression_at_end_is_full() {
        let start = date(2025, 3, 2);
        let end = start + chrono::Duration::weeks(14);
        assert_eq!(progression_percent(start, 14, end), 100);
    }

    #[test]
    fn test_progression_midway() {
        let start = date(2025, 3, 2);
        let midway = start + chrono::Duration::weeks(7);
        assert_eq!(progression_percent(start, 14, midway), 50);
    }

    #[test]
    fn test_progression_clamped() {
        let start = date(2025, 3, 2);
        let before = start - chrono::Duration::weeks(2);
        let long_after = start + chrono::Duration::weeks(52);
        assert_eq!(progression_percent(start, 14, before), 0);
        assert_eq!(progression_percent(start, 14, long_after), 100);
    }

    #[test]
    fn test_progression_monotonic() {
        let start = date(2025, 3, 2);
        let mut last = 0;
        for day in 0..200 {
            let today = start + chrono::Duration::days(day);
            let value = progression_percent(start, 14, today);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn test_progression_zero_length_semester() {
        let start = date(2025, 3, 2);
        assert_eq!(progression_percent(start, 0, start), 0);
    }

    #[test]
    fn test_course_url() {
        assert_eq!(
            course_url("https://lms.example", 12),
            "https://lms.example/course/view.php?id=12"
        );
    }
}
