//! 课表合成：原始课表行转为展示条目

use crate::models::schedule::entities::ScheduleRow;
use crate::models::schedule::responses::{ScheduleEntry, SlotKind};
use crate::utils::datetime::{format_time_of_day, weekday_name};

/// 把存储层返回的课表行（已按开始时间升序）转为展示条目
pub fn compose_schedule(rows: Vec<ScheduleRow>) -> Vec<ScheduleEntry> {
    rows.into_iter().map(format_schedule_entry).collect()
}

fn format_schedule_entry(row: ScheduleRow) -> ScheduleEntry {
    let end = row.time_start + chrono::Duration::seconds(row.time_duration);

    ScheduleEntry {
        lecturer_name: row.lecturer_name,
        day_of_week: weekday_name(&row.time_start),
        start_time: format_time_of_day(&row.time_start),
        end_time: format_time_of_day(&end),
        slot_type: slot_kind(&row.event_type),
    }
}

fn slot_kind(event_type: &str) -> SlotKind {
    match event_type {
        "course" => SlotKind::Lecture,
        "user" => SlotKind::Practice,
        _ => SlotKind::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::datetime::parse_request_date;

    fn row(event_type: &str, start: &str, duration: i64) -> ScheduleRow {
        ScheduleRow {
            lecturer_name: "Dana Levi".to_string(),
            event_type: event_type.to_string(),
            time_start: parse_request_date(start).unwrap(),
            time_duration: duration,
        }
    }

    #[test]
    fn test_course_event_is_lecture() {
        let entries = compose_schedule(vec![row("course", "2025-03-03 10:00", 5400)]);
        assert_eq!(entries[0].slot_type, SlotKind::Lecture);
        // 2025-03-03 是周一
        assert_eq!(entries[0].day_of_week, "Monday");
        assert_eq!(entries[0].start_time, "10:00");
        assert_eq!(entries[0].end_time, "11:30");
    }

    #[test]
    fn test_user_event_is_practice() {
        let entries = compose_schedule(vec![row("user", "2025-03-04 08:00", 3600)]);
        assert_eq!(entries[0].slot_type, SlotKind::Practice);
        assert_eq!(entries[0].end_time, "09:00");
    }

    #[test]
    fn test_unknown_event_is_other() {
        let entries = compose_schedule(vec![row("site", "2025-03-05 12:30", 0)]);
        assert_eq!(entries[0].slot_type, SlotKind::Other);
        assert_eq!(entries[0].start_time, "12:30");
        assert_eq!(entries[0].end_time, "12:30");
    }

    #[test]
    fn test_lecturer_name_passes_through() {
        let entries = compose_schedule(vec![row("course", "2025-03-03 10:00", 0)]);
        assert_eq!(entries[0].lecturer_name, "Dana Levi");
    }
}
