//! 成绩聚合

use crate::models::grades::entities::GradeRecord;

/// 课程级最终成绩的算术平均，保留两位小数
///
/// 没有任何成绩时定义为 0。
pub fn average_grade(grades: &[GradeRecord]) -> f64 {
    if grades.is_empty() {
        return 0.0;
    }

    let sum: f64 = grades.iter().map(|g| g.final_grade).sum();
    let average = sum / grades.len() as f64;
    (average * 100.0).round() / 100.0 // 保留两位小数
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(course_id: i64, final_grade: f64) -> GradeRecord {
        GradeRecord {
            id: course_id,
            course_id,
            final_grade,
        }
    }

    #[test]
    fn test_empty_set_is_zero() {
        assert_eq!(average_grade(&[]), 0.0);
    }

    #[test]
    fn test_single_grade() {
        assert_eq!(average_grade(&[grade(1, 87.0)]), 87.0);
    }

    #[test]
    fn test_mean_rounded_to_two_decimals() {
        let grades = [grade(1, 80.0), grade(2, 85.0), grade(3, 90.5)];
        // (80 + 85 + 90.5) / 3 = 85.166...
        assert_eq!(average_grade(&grades), 85.17);
    }

    #[test]
    fn test_mean_of_identical_grades() {
        let grades = [grade(1, 73.4), grade(2, 73.4)];
        assert_eq!(average_grade(&grades), 73.4);
    }
}
