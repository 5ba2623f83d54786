pub mod create;
pub mod update_status;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::meetings::requests::{CreateMeetingRequest, UpdateMeetingStatusRequest};
use crate::storage::Storage;

pub struct MeetingService {
    storage: Option<Arc<dyn Storage>>,
}

impl MeetingService {
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

    pub async fn create_meeting(
        &self,
        request: &HttpRequest,
        req: CreateMeetingRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_meeting(self, request, req).await
    }

    pub async fn update_meeting_status(
        &self,
        request: &HttpRequest,
        req: UpdateMeetingStatusRequest,
    ) -> ActixResult<HttpResponse> {
        update_status::update_meeting_status(self, request, req).await
    }
}
