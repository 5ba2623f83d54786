use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::events::entities::CalendarEvent;
use crate::models::exams::responses::ExamEntry;
use crate::models::meetings::entities::MeetingRecord;
use crate::models::schedule::responses::ScheduleEntry;
use crate::models::tasks::responses::CourseTask;

// 教学人员联系方式（助教）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct StaffContact {
    pub name: String,
    pub email: String,
}

// 单门课程的聚合视图
//
// lecturer/lectureremail 在课程没有主讲时为 null，
// 而不是解引用缺失记录。课程顺序跟随选课服务，不做承诺。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseOverview {
    pub id: i64,
    pub fullname: String,
    pub lecturer: Option<String>,
    pub lectureremail: Option<String>,
    pub assistants: Vec<StaffContact>,
    pub url: String,
    // 学期进度百分比，[0, 100]
    pub progression: i64,
    pub tasks: Vec<CourseTask>,
    pub events: Vec<CalendarEvent>,
    pub schedule: Vec<ScheduleEntry>,
    pub exams: Vec<ExamEntry>,
    #[serde(rename = "meetingRecords")]
    pub meeting_records: Vec<MeetingRecord>,
}
