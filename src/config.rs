use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub booking_backend: String,
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub bookings_table: String,
    pub database_url: String,
    pub backend_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            booking_backend: env::var("BOOKING_BACKEND")
                .unwrap_or_else(|_| "supabase".to_string()),
            supabase_url: env::var("SUPABASE_URL").unwrap_or_default(),
            supabase_anon_key: env::var("SUPABASE_ANON_KEY").unwrap_or_default(),
            bookings_table: env::var("BOOKINGS_TABLE").unwrap_or_else(|_| "bookings".to_string()),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "bekam.db".to_string()),
            backend_timeout_secs: env::var("BACKEND_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }
}
