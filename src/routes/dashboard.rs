use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use super::{method_not_allowed, scope_cors};
use crate::middlewares;
use crate::models::dashboard::requests::DashboardQuery;
use crate::services::DashboardService;

// 懒加载的全局 DashboardService 实例
static DASHBOARD_SERVICE: Lazy<DashboardService> = Lazy::new(DashboardService::new_lazy);

// 获取仪表盘聚合文档
pub async fn fetch_dashboard(
    req: HttpRequest,
    query: web::Query<DashboardQuery>,
) -> ActixResult<HttpResponse> {
    DASHBOARD_SERVICE
        .fetch_dashboard(&req, query.into_inner())
        .await
}

// 配置路由
pub fn configure_dashboard_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/dashboard")
            .wrap(middlewares::RequireSession)
            .wrap(scope_cors(vec!["GET"]))
            .service(
                web::resource("")
                    // 拉取聚合文档 - 当前会话用户
                    .route(web::get().to(fetch_dashboard))
                    // 其余方法一律 405
                    .default_service(web::route().to(method_not_allowed)),
            ),
    );
}
