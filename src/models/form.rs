use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::booking::BookingDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Phone,
    BookingDate,
    Complaint,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Phone,
        FormField::BookingDate,
        FormField::Complaint,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Phone => "phone",
            FormField::BookingDate => "booking_date",
            FormField::Complaint => "complaint",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        FormField::ALL.into_iter().find(|f| f.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Nama Lengkap",
            FormField::Phone => "Nomor WhatsApp",
            FormField::BookingDate => "Tanggal Terapi",
            FormField::Complaint => "Keluhan",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
    #[error("{0} wajib diisi")]
    Missing(FormField),

    #[error("tanggal terapi tidak valid: {0}")]
    InvalidDate(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub name: String,
    pub phone: String,
    pub booking_date: String,
    pub complaint: String,
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Phone => &self.phone,
            FormField::BookingDate => &self.booking_date,
            FormField::Complaint => &self.complaint,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Phone => &mut self.phone,
            FormField::BookingDate => &mut self.booking_date,
            FormField::Complaint => &mut self.complaint,
        };
        *slot = value.into();
    }

    pub fn reset(&mut self) {
        *self = FormState::default();
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn to_draft(&self) -> Result<BookingDraft, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::Missing(FormField::Name));
        }

        let phone = self.phone.trim();
        if phone.is_empty() {
            return Err(FormError::Missing(FormField::Phone));
        }

        let date = self.booking_date.trim();
        if date.is_empty() {
            return Err(FormError::Missing(FormField::BookingDate));
        }
        let booking_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| FormError::InvalidDate(date.to_string()))?;

        Ok(BookingDraft {
            name: name.to_string(),
            phone: phone.to_string(),
            booking_date,
            complaint: self.complaint.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}
