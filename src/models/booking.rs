use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub phone: String,
    pub booking_date: NaiveDate,
    #[serde(default, deserialize_with = "deserialize_complaint")]
    pub complaint: Option<String>,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BookingDraft {
    pub name: String,
    pub phone: String,
    pub booking_date: NaiveDate,
    pub complaint: String,
}

// Owned by the backend; kept exactly as the backend sent it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "Option<String>", into = "String")]
pub struct BookingStatus(String);

impl BookingStatus {
    pub fn pending() -> Self {
        BookingStatus("pending".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for BookingStatus {
    fn default() -> Self {
        BookingStatus::pending()
    }
}

impl From<String> for BookingStatus {
    fn from(raw: String) -> Self {
        if raw.trim().is_empty() {
            BookingStatus::pending()
        } else {
            BookingStatus(raw)
        }
    }
}

impl From<&str> for BookingStatus {
    fn from(raw: &str) -> Self {
        BookingStatus::from(raw.to_string())
    }
}

impl From<Option<String>> for BookingStatus {
    fn from(raw: Option<String>) -> Self {
        raw.map(BookingStatus::from).unwrap_or_default()
    }
}

impl From<BookingStatus> for String {
    fn from(status: BookingStatus) -> Self {
        status.0
    }
}

// Backends key rows by bigint or uuid.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

fn deserialize_complaint<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reads_backend_row_with_numeric_id() {
        let row = json!({
            "id": 42,
            "name": "Ahmad",
            "phone": "08123456789",
            "booking_date": "2024-03-01",
            "complaint": "",
            "status": "confirmed",
            "created_at": "2024-02-20T08:15:00+00:00"
        });

        let booking: Booking = serde_json::from_value(row).unwrap();
        assert_eq!(booking.id, "42");
        assert_eq!(booking.booking_date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(booking.complaint, None);
        assert_eq!(booking.status.as_str(), "confirmed");
        assert!(booking.created_at.is_some());
    }

    #[test]
    fn test_missing_or_null_status_defaults_to_pending() {
        let missing: Booking = serde_json::from_value(json!({
            "id": "b8f1c1de-1111-4c1a-9a59-0d6c5b1b2f10",
            "name": "Siti",
            "phone": "0813",
            "booking_date": "2024-03-02"
        }))
        .unwrap();
        assert_eq!(missing.status, BookingStatus::pending());

        let null: Booking = serde_json::from_value(json!({
            "id": 7,
            "name": "Siti",
            "phone": "0813",
            "booking_date": "2024-03-02",
            "complaint": null,
            "status": null
        }))
        .unwrap();
        assert_eq!(null.status, BookingStatus::pending());
    }

    #[test]
    fn test_status_round_trips_unchanged() {
        for raw in ["rescheduled", "canceled", "Confirmed", "menunggu"] {
            let booking: Booking = serde_json::from_value(json!({
                "id": 1,
                "name": "Ahmad",
                "phone": "0812",
                "booking_date": "2024-03-01",
                "status": raw
            }))
            .unwrap();

            assert_eq!(booking.status.as_str(), raw);
            let out = serde_json::to_value(&booking).unwrap();
            assert_eq!(out["status"], json!(raw));
        }
    }

    #[test]
    fn test_draft_never_serializes_id_or_status() {
        let draft = BookingDraft {
            name: "Ahmad".to_string(),
            phone: "0812".to_string(),
            booking_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            complaint: String::new(),
        };

        let value = serde_json::to_value(&draft).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("id"));
        assert!(!obj.contains_key("status"));
        assert_eq!(obj["booking_date"], json!("2024-03-01"));
        assert_eq!(obj["complaint"], json!(""));
    }
}
