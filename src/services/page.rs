use std::sync::Arc;

use uuid::Uuid;

use crate::models::{Booking, BookingDraft, FormError, FormField, FormState, SubmissionState};
use crate::services::backend::BookingBackend;
use crate::services::sync::BookingSync;

pub const SUCCESS_ALERT: &str = "Pendaftaran berhasil! Admin akan segera menghubungi Anda.";
pub const IN_PROGRESS_ALERT: &str = "Pendaftaran Anda masih diproses. Mohon tunggu sebentar.";
pub const ALREADY_ACCEPTED_ALERT: &str = "Pendaftaran ini sudah diterima sebelumnya.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Notice,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmitFailure {
    #[error(transparent)]
    Invalid(#[from] FormError),

    #[error(transparent)]
    Backend(anyhow::Error),
}

#[derive(Debug)]
pub enum SubmitOutcome {
    Accepted,
    Rejected(SubmitFailure),
    // this page already has a submission in flight
    Busy,
}

impl SubmitOutcome {
    pub fn alert(&self) -> Option<Alert> {
        match self {
            SubmitOutcome::Accepted => Some(Alert {
                kind: AlertKind::Success,
                message: SUCCESS_ALERT.to_string(),
            }),
            SubmitOutcome::Rejected(failure) => Some(Alert {
                kind: AlertKind::Error,
                message: format!("Terjadi kesalahan: {failure}"),
            }),
            SubmitOutcome::Busy => None,
        }
    }
}

pub struct PageView<'a> {
    pub form: &'a FormState,
    pub submitting: bool,
    pub submission_id: Uuid,
    pub bookings: &'a [Booking],
    pub list_stale: bool,
    pub alert: Option<Alert>,
}

pub struct BookingPage {
    form: FormState,
    phase: SubmissionState,
    submission_id: Uuid,
    sync: BookingSync,
}

impl BookingPage {
    pub fn new(backend: Arc<dyn BookingBackend>) -> Self {
        Self {
            form: FormState::default(),
            phase: SubmissionState::Idle,
            submission_id: Uuid::new_v4(),
            sync: BookingSync::new(backend),
        }
    }

    pub fn with_form(
        backend: Arc<dyn BookingBackend>,
        form: FormState,
        submission_id: Option<Uuid>,
    ) -> Self {
        Self {
            form,
            submission_id: submission_id.unwrap_or_else(Uuid::new_v4),
            ..Self::new(backend)
        }
    }

    pub async fn mount(&mut self) {
        self.sync.list().await;
    }

    pub fn change(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn bookings(&self) -> &[Booking] {
        self.sync.bookings()
    }

    pub fn submission_id(&self) -> Uuid {
        self.submission_id
    }

    pub fn submit_disabled(&self) -> bool {
        self.phase.is_submitting()
    }

    pub fn begin_submit(&mut self) -> Result<BookingDraft, SubmitOutcome> {
        if self.phase.is_submitting() {
            return Err(SubmitOutcome::Busy);
        }
        self.phase = SubmissionState::Submitting;

        self.form.to_draft().map_err(|e| {
            self.phase = SubmissionState::Idle;
            SubmitOutcome::Rejected(e.into())
        })
    }

    pub async fn complete_submit(&mut self, draft: BookingDraft) -> SubmitOutcome {
        let result = self.sync.insert(draft).await;
        self.phase = SubmissionState::Idle;

        match result {
            Ok(()) => {
                self.form.reset();
                self.submission_id = Uuid::new_v4();
                SubmitOutcome::Accepted
            }
            Err(e) => {
                tracing::warn!(error = %e, "booking submission failed");
                SubmitOutcome::Rejected(SubmitFailure::Backend(e))
            }
        }
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        match self.begin_submit() {
            Ok(draft) => self.complete_submit(draft).await,
            Err(outcome) => outcome,
        }
    }

    pub fn view(&self, alert: Option<Alert>) -> PageView<'_> {
        PageView {
            form: &self.form,
            submitting: self.submit_disabled(),
            submission_id: self.submission_id,
            bookings: self.sync.bookings(),
            list_stale: self.sync.is_stale(),
            alert,
        }
    }
}
