pub mod local;
pub mod supabase;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::db;
use crate::errors::AppError;
use crate::models::{Booking, BookingDraft};

use self::local::LocalBackend;
use self::supabase::SupabaseBackend;

#[async_trait]
pub trait BookingBackend: Send + Sync {
    // ordered by booking_date ascending
    async fn select_bookings(&self) -> anyhow::Result<Vec<Booking>>;

    async fn insert_bookings(&self, drafts: &[BookingDraft]) -> anyhow::Result<()>;
}

pub fn from_config(config: &AppConfig) -> Result<Arc<dyn BookingBackend>, AppError> {
    match config.booking_backend.as_str() {
        "supabase" => {
            if config.supabase_url.is_empty() || config.supabase_anon_key.is_empty() {
                return Err(AppError::Config(
                    "SUPABASE_URL and SUPABASE_ANON_KEY must be set when BOOKING_BACKEND=supabase"
                        .to_string(),
                ));
            }
            tracing::info!(
                "using Supabase backend (url: {}, table: {})",
                config.supabase_url,
                config.bookings_table
            );
            let backend = SupabaseBackend::new(
                config.supabase_url.clone(),
                config.supabase_anon_key.clone(),
                config.bookings_table.clone(),
                Duration::from_secs(config.backend_timeout_secs),
            )
            .map_err(|e| AppError::Config(format!("{e:#}")))?;
            Ok(Arc::new(backend))
        }
        "local" => {
            tracing::info!("using local SQLite backend (path: {})", config.database_url);
            let conn = db::init_db(&config.database_url)
                .map_err(|e| AppError::Config(format!("{e:#}")))?;
            Ok(Arc::new(LocalBackend::new(conn)))
        }
        other => Err(AppError::Config(format!(
            "unknown BOOKING_BACKEND '{other}', expected 'supabase' or 'local'"
        ))),
    }
}
