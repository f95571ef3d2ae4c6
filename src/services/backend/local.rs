use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rusqlite::Connection;

use super::BookingBackend;
use crate::db::queries;
use crate::models::{Booking, BookingDraft};

pub struct LocalBackend {
    db: Arc<Mutex<Connection>>,
}

impl LocalBackend {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }
}

#[async_trait]
impl BookingBackend for LocalBackend {
    async fn select_bookings(&self) -> anyhow::Result<Vec<Booking>> {
        let db = self
            .db
            .lock()
            .map_err(|_| anyhow::anyhow!("local database lock poisoned"))?;
        queries::list_bookings(&db)
    }

    async fn insert_bookings(&self, drafts: &[BookingDraft]) -> anyhow::Result<()> {
        let mut db = self
            .db
            .lock()
            .map_err(|_| anyhow::anyhow!("local database lock poisoned"))?;

        let tx = db.transaction()?;
        for draft in drafts {
            let id = uuid::Uuid::new_v4().to_string();
            queries::insert_booking(&tx, &id, draft)?;
        }
        tx.commit()?;

        Ok(())
    }
}
