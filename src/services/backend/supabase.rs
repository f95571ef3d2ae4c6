use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;

use super::BookingBackend;
use crate::models::{Booking, BookingDraft};

pub struct SupabaseBackend {
    base_url: String,
    api_key: String,
    table: String,
    client: reqwest::Client,
}

impl SupabaseBackend {
    pub fn new(
        base_url: String,
        api_key: String,
        table: String,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            table,
            client,
        })
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }
}

#[derive(Debug, Deserialize)]
struct PostgrestError {
    message: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    details: Option<String>,
    #[serde(default)]
    hint: Option<String>,
}

async fn rejection(resp: reqwest::Response) -> anyhow::Error {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();

    match serde_json::from_str::<PostgrestError>(&body) {
        Ok(err) => {
            tracing::warn!(
                %status,
                code = ?err.code,
                details = ?err.details,
                hint = ?err.hint,
                "booking backend rejected request"
            );
            anyhow::anyhow!(err.message)
        }
        Err(_) => anyhow::anyhow!("backend returned {status}"),
    }
}

#[async_trait]
impl BookingBackend for SupabaseBackend {
    async fn select_bookings(&self) -> anyhow::Result<Vec<Booking>> {
        let resp = self
            .client
            .get(self.table_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&[("select", "*"), ("order", "booking_date.asc")])
            .send()
            .await
            .context("failed to reach booking backend")?;

        if !resp.status().is_success() {
            return Err(rejection(resp).await);
        }

        resp.json()
            .await
            .context("failed to parse bookings from backend")
    }

    async fn insert_bookings(&self, drafts: &[BookingDraft]) -> anyhow::Result<()> {
        let resp = self
            .client
            .post(self.table_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(drafts)
            .send()
            .await
            .context("failed to reach booking backend")?;

        if !resp.status().is_success() {
            return Err(rejection(resp).await);
        }

        Ok(())
    }
}
