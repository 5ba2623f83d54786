//! 仪表盘聚合入口：组装最终响应文档

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{DashboardService, courses, grades};
use crate::middlewares::RequireSession;
use crate::models::AjaxResponse;
use crate::models::dashboard::{requests::DashboardQuery, responses::DashboardResponse};

pub async fn fetch_dashboard(
    service: &DashboardService,
    request: &HttpRequest,
    query: DashboardQuery,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 获取当前用户信息
    let user = match RequireSession::extract_user(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(AjaxResponse::failure("Unauthorized: no session user")));
        }
    };

    // 成绩均值
    let grade_records = match storage.list_course_grades(user.id).await {
        Ok(records) => records,
        Err(e) => {
            return Ok(HttpResponse::InternalServerError()
                .json(AjaxResponse::failure(format!("查询成绩失败: {e}"))));
        }
    };
    let grades_average = grades::average_grade(&grade_records);

    // 课程视图
    let courses = match courses::compose_courses(storage.as_ref(), user.id).await {
        Ok(courses) => courses,
        Err(e) => {
            return Ok(HttpResponse::InternalServerError()
                .json(AjaxResponse::failure(format!("聚合课程数据失败: {e}"))));
        }
    };

    // 个人待办：必须显式给出 courseId 才查询，否则为空列表
    let personal_activities = match query.course_id {
        Some(course_id) => match storage.list_personal_activities(user.id, course_id).await {
            Ok(activities) => activities,
            Err(e) => {
                return Ok(HttpResponse::InternalServerError()
                    .json(AjaxResponse::failure(format!("查询待办失败: {e}"))));
            }
        },
        None => Vec::new(),
    };

    let response = DashboardResponse {
        student_id: user.id_number,
        firstname: user.firstname,
        lastname: user.lastname,
        institution: user.institution,
        department: user.department,
        email: user.email,
        phone: user.phone,
        major: user.major,
        academic_year: user.academic_year,
        grades_average,
        courses,
        personal_activities,
    };

    Ok(HttpResponse::Ok().json(response))
}
