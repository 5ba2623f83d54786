use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::activities::entities::PersonalActivity;
use crate::models::courses::responses::CourseOverview;

// 仪表盘聚合文档，单页应用一次拉取
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/dashboard.ts")]
pub struct DashboardResponse {
    #[serde(rename = "studentID")]
    pub student_id: String,
    pub firstname: String,
    pub lastname: String,
    pub institution: Option<String>,
    pub department: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub major: Option<String>,
    #[serde(rename = "academicYear")]
    pub academic_year: Option<String>,
    #[serde(rename = "gradesAverage")]
    pub grades_average: f64,
    pub courses: Vec<CourseOverview>,
    #[serde(rename = "personalActivities")]
    pub personal_activities: Vec<PersonalActivity>,
}
