//! 请求参数错误处理
//!
//! 反序列化失败与字段校验失败走同一条路：HTTP 200 + success=false，
//! 这是仪表盘前端约定的失败形状。

use actix_web::error::{InternalError, JsonPayloadError, QueryPayloadError};
use actix_web::{Error, HttpRequest, HttpResponse};
use tracing::debug;

use crate::models::AjaxResponse;

/// JSON 请求体解析错误处理器
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> Error {
    debug!("JSON payload error on {}: {}", req.path(), err);
    let response = HttpResponse::Ok().json(AjaxResponse::failure("Invalid input"));
    InternalError::from_response(err, response).into()
}

/// 查询参数解析错误处理器
pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> Error {
    debug!("Query parameter error on {}: {}", req.path(), err);
    let response = HttpResponse::Ok().json(AjaxResponse::failure("Invalid input"));
    InternalError::from_response(err, response).into()
}
