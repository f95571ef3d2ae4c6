pub mod booking;
pub mod form;

pub use booking::{Booking, BookingDraft, BookingStatus};
pub use form::{FormError, FormField, FormState, SubmissionState};
