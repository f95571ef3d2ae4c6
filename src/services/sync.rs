use std::sync::Arc;

use crate::models::{Booking, BookingDraft};
use crate::services::backend::BookingBackend;

pub struct BookingSync {
    backend: Arc<dyn BookingBackend>,
    bookings: Vec<Booking>,
    stale: bool,
}

impl BookingSync {
    pub fn new(backend: Arc<dyn BookingBackend>) -> Self {
        Self {
            backend,
            bookings: Vec::new(),
            stale: false,
        }
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }

    // a failed fetch keeps the previous list
    pub async fn list(&mut self) {
        match self.backend.select_bookings().await {
            Ok(bookings) => {
                tracing::debug!(count = bookings.len(), "fetched bookings");
                self.bookings = bookings;
                self.stale = false;
            }
            Err(e) => {
                tracing::error!(error = %e, "error fetching bookings");
                self.stale = true;
            }
        }
    }

    pub async fn insert(&mut self, draft: BookingDraft) -> anyhow::Result<()> {
        self.backend.insert_bookings(std::slice::from_ref(&draft)).await?;
        tracing::info!(booking_date = %draft.booking_date, "booking submitted");

        self.list().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::NaiveDate;

    use crate::models::BookingStatus;

    #[derive(Default)]
    struct ScriptedBackend {
        rows: Mutex<Vec<Booking>>,
        fail_select: AtomicBool,
        fail_insert: AtomicBool,
        selects: AtomicUsize,
    }

    #[async_trait]
    impl BookingBackend for ScriptedBackend {
        async fn select_bookings(&self) -> anyhow::Result<Vec<Booking>> {
            self.selects.fetch_add(1, Ordering::SeqCst);
            if self.fail_select.load(Ordering::SeqCst) {
                anyhow::bail!("connection refused");
            }
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn insert_bookings(&self, drafts: &[BookingDraft]) -> anyhow::Result<()> {
            if self.fail_insert.load(Ordering::SeqCst) {
                anyhow::bail!("new row violates row-level security policy");
            }
            let mut rows = self.rows.lock().unwrap();
            for draft in drafts {
                let id = (rows.len() + 1).to_string();
                rows.push(booking(&id, &draft.name, draft.booking_date));
            }
            Ok(())
        }
    }

    fn booking(id: &str, name: &str, date: NaiveDate) -> Booking {
        Booking {
            id: id.to_string(),
            name: name.to_string(),
            phone: "0812".to_string(),
            booking_date: date,
            complaint: None,
            status: BookingStatus::pending(),
            created_at: None,
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn draft(name: &str) -> BookingDraft {
        BookingDraft {
            name: name.to_string(),
            phone: "0812".to_string(),
            booking_date: date("2024-03-01"),
            complaint: String::new(),
        }
    }

    #[tokio::test]
    async fn test_list_keeps_backend_order() {
        let backend = Arc::new(ScriptedBackend::default());
        *backend.rows.lock().unwrap() = vec![
            booking("1", "Later", date("2024-03-02")),
            booking("2", "Earlier", date("2024-03-01")),
        ];

        let mut sync = BookingSync::new(backend);
        sync.list().await;

        let names: Vec<&str> = sync.bookings().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Later", "Earlier"]);
        assert!(!sync.is_stale());
    }

    #[tokio::test]
    async fn test_failed_list_keeps_previous_bookings() {
        let backend = Arc::new(ScriptedBackend::default());
        *backend.rows.lock().unwrap() = vec![booking("1", "Ahmad", date("2024-03-01"))];

        let mut sync = BookingSync::new(backend.clone());
        sync.list().await;
        assert_eq!(sync.bookings().len(), 1);

        backend.fail_select.store(true, Ordering::SeqCst);
        backend.rows.lock().unwrap().clear();
        sync.list().await;

        assert_eq!(sync.bookings().len(), 1);
        assert!(sync.is_stale());
    }

    #[tokio::test]
    async fn test_insert_refetches_list() {
        let backend = Arc::new(ScriptedBackend::default());
        let mut sync = BookingSync::new(backend.clone());

        sync.insert(draft("Ahmad")).await.unwrap();

        assert_eq!(backend.selects.load(Ordering::SeqCst), 1);
        assert_eq!(sync.bookings().len(), 1);
        assert_eq!(sync.bookings()[0].name, "Ahmad");
    }

    #[tokio::test]
    async fn test_failed_insert_returns_error_without_refetch() {
        let backend = Arc::new(ScriptedBackend::default());
        backend.fail_insert.store(true, Ordering::SeqCst);
        let mut sync = BookingSync::new(backend.clone());

        let err = sync.insert(draft("Ahmad")).await.unwrap_err();

        assert_eq!(err.to_string(), "new row violates row-level security policy");
        assert_eq!(backend.selects.load(Ordering::SeqCst), 0);
        assert!(sync.bookings().is_empty());
    }
}
