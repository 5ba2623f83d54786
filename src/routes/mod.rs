pub mod activities;

pub mod dashboard;

pub mod meetings;

pub use activities::configure_activities_routes;
pub use dashboard::configure_dashboard_routes;
pub use meetings::configure_meetings_routes;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{HttpResponse, Result as ActixResult};

use crate::config::AppConfig;
use crate::models::AjaxResponse;

// 每个 scope 自带 CORS：来源只放行配置的仪表盘地址，
// 方法列表按端点各自声明
pub(crate) fn scope_cors(methods: Vec<&str>) -> Cors {
    let config = AppConfig::get();
    Cors::default()
        .allowed_origin(&config.cors.allowed_origin)
        .allowed_methods(methods)
        .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(config.cors.max_age)
}

// 不支持的方法统一返回 405 + 结构化响应体
pub(crate) async fn method_not_allowed() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::MethodNotAllowed().json(AjaxResponse::failure("Method not allowed")))
}
