use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use axum::Form;
use uuid::Uuid;

use crate::models::FormField;
use crate::services::dedup::Claim;
use crate::services::page::{
    Alert, AlertKind, BookingPage, SubmitFailure, SubmitOutcome, ALREADY_ACCEPTED_ALERT,
    IN_PROGRESS_ALERT,
};
use crate::services::render::render_page;
use crate::state::AppState;

// GET /
pub async fn booking_page(State(state): State<Arc<AppState>>) -> Html<String> {
    let mut page = BookingPage::new(state.backend.clone());
    page.mount().await;
    Html(render_page(&page.view(None)))
}

// Rebuilds the page from posted inputs; keys that are not form fields are ignored.
fn restore_page(state: &AppState, fields: Vec<(String, String)>) -> BookingPage {
    let submission_id = fields
        .iter()
        .find(|(key, _)| key == "submission_id")
        .and_then(|(_, id)| Uuid::parse_str(id.trim()).ok());

    let mut page = BookingPage::with_form(state.backend.clone(), Default::default(), submission_id);
    for (key, value) in fields {
        if let Some(field) = FormField::parse(&key) {
            page.change(field, value);
        }
    }
    page
}

// POST /bookings
pub async fn submit_booking(
    State(state): State<Arc<AppState>>,
    Form(fields): Form<Vec<(String, String)>>,
) -> (StatusCode, Html<String>) {
    let mut page = restore_page(&state, fields);
    let id = page.submission_id();

    match state.submissions.claim(id) {
        Claim::Fresh => {}
        Claim::InFlight => {
            tracing::warn!(submission_id = %id, "booking submission still in flight");
            page.mount().await;
            let alert = Alert {
                kind: AlertKind::Notice,
                message: IN_PROGRESS_ALERT.to_string(),
            };
            return (StatusCode::CONFLICT, Html(render_page(&page.view(Some(alert)))));
        }
        Claim::Accepted => {
            tracing::warn!(submission_id = %id, "duplicate booking submission ignored");
            let mut fresh = BookingPage::new(state.backend.clone());
            fresh.mount().await;
            let alert = Alert {
                kind: AlertKind::Success,
                message: ALREADY_ACCEPTED_ALERT.to_string(),
            };
            return (StatusCode::CONFLICT, Html(render_page(&fresh.view(Some(alert)))));
        }
    }

    let outcome = page.submit().await;
    let status = match &outcome {
        SubmitOutcome::Accepted => {
            state.submissions.accept(id);
            StatusCode::OK
        }
        SubmitOutcome::Rejected(failure) => {
            state.submissions.release(id);
            // the list is only refreshed by a successful insert
            page.mount().await;
            match failure {
                SubmitFailure::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
                SubmitFailure::Backend(_) => StatusCode::BAD_GATEWAY,
            }
        }
        SubmitOutcome::Busy => StatusCode::CONFLICT,
    };

    (status, Html(render_page(&page.view(outcome.alert()))))
}
