pub mod courses;
pub mod exams;
pub mod fetch;
pub mod grades;
pub mod schedule;
pub mod tasks;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::dashboard::requests::DashboardQuery;
use crate::storage::Storage;

pub struct DashboardService {
    storage: Option<Arc<dyn Storage>>,
}

impl DashboardService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn fetch_dashboard(
        &self,
        request: &HttpRequest,
        query: DashboardQuery,
    ) -> ActixResult<HttpResponse> {
        fetch::fetch_dashboard(self, request, query).await
    }
}
