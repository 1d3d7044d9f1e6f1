use crate::errors::FetchError;
use crate::models::{SummaryResponse, SummaryRow};
use reqwest::Client;
use std::env;

pub const SUMMARY_PATH: &str = "/api/summary";

const API_BASE_ENV: &str = "SUMMARY_API_URL";
const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

pub fn resolve_api_base() -> String {
    env::var(API_BASE_ENV).unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
}

#[derive(Debug)]
pub enum SummaryFetch {
    Loaded(Vec<SummaryRow>),
    Empty,
    Failed(FetchError),
}

pub async fn fetch_summary(http: &Client, api_base: &str) -> SummaryFetch {
    match request_summary(http, api_base).await {
        Ok(rows) if rows.is_empty() => SummaryFetch::Empty,
        Ok(rows) => SummaryFetch::Loaded(rows),
        Err(err) => SummaryFetch::Failed(err),
    }
}

async fn request_summary(http: &Client, api_base: &str) -> Result<Vec<SummaryRow>, FetchError> {
    let response = http
        .get(summary_url(api_base))
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(FetchError::Request)?;
    let body: SummaryResponse = response.json().await.map_err(FetchError::Decode)?;
    Ok(body.summary)
}

fn summary_url(api_base: &str) -> String {
    format!("{}{SUMMARY_PATH}", api_base.trim_end_matches('/'))
}
