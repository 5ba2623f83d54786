pub mod create;
pub mod delete;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::activities::requests::{CreateActivityRequest, DeleteActivityRequest};
use crate::storage::Storage;

pub struct ActivityService {
    storage: Option<Arc<dyn Storage>>,
}

impl ActivityService {
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

    pub async fn create_activity(
        &self,
        request: &HttpRequest,
        req: CreateActivityRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_activity(self, request, req).await
    }

    pub async fn delete_activity(
        &self,
        request: &HttpRequest,
        req: DeleteActivityRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_activity(self, request, req).await
    }
}
