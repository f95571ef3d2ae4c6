use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::errors::AppError;
use crate::models::{Booking, FormState};
use crate::services::page::{BookingPage, SubmitOutcome};
use crate::state::AppState;

// GET /api/bookings
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let bookings = state.backend.select_bookings().await.map_err(|e| {
        tracing::error!(error = %e, "error fetching bookings");
        AppError::Backend(e)
    })?;
    Ok(Json(bookings))
}

// POST /api/bookings
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(form): Json<FormState>,
) -> Result<(StatusCode, Json<Vec<Booking>>), AppError> {
    let mut page = BookingPage::with_form(state.backend.clone(), form, None);

    match page.submit().await {
        SubmitOutcome::Accepted => Ok((StatusCode::CREATED, Json(page.bookings().to_vec()))),
        SubmitOutcome::Rejected(failure) => Err(failure.into()),
        SubmitOutcome::Busy => Err(AppError::Duplicate),
    }
}
