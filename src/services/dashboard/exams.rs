//! 考试合成：专用考试表的行转为展示条目

use crate::models::exams::entities::Exam;
use crate::models::exams::responses::ExamEntry;
use crate::utils::datetime::{format_date, format_time_of_day};

/// 把考试行转为展示条目：日期与时刻拆成两个字段
pub fn compose_exams(rows: Vec<Exam>) -> Vec<ExamEntry> {
    rows.into_iter().map(format_exam_entry).collect()
}

fn format_exam_entry(exam: Exam) -> ExamEntry {
    ExamEntry {
        id: exam.id,
        name: exam.name,
        exam_type: exam.exam_type,
        exam_date: format_date(&exam.starts_at),
        exam_time: format_time_of_day(&exam.starts_at),
        duration_minutes: exam.duration_minutes,
        location: exam.location,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::datetime::parse_request_date;

    #[test]
    fn test_date_and_time_split() {
        let entries = compose_exams(vec![Exam {
            id: 3,
            course_id: 1,
            name: "Final".to_string(),
            exam_type: "written".to_string(),
            starts_at: parse_request_date("2025-07-01 09:30").unwrap(),
            duration_minutes: 120,
            location: "Hall B".to_string(),
        }]);

        assert_eq!(entries[0].exam_date, "2025-07-01");
        assert_eq!(entries[0].exam_time, "09:30");
        assert_eq!(entries[0].duration_minutes, 120);
        assert_eq!(entries[0].location, "Hall B");
    }
}
