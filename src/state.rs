use std::sync::Arc;

use crate::services::backend::BookingBackend;
use crate::services::dedup::SubmissionGuard;

pub struct AppState {
    pub backend: Arc<dyn BookingBackend>,
    pub submissions: SubmissionGuard,
}
