use crate::errors::ApiError;
use crate::models::{
    DailyEntry, DailyEntryRequest, DateRange, MonthlyReport, ReportFilter, Stats, TodayEntry,
    WeeklyReport,
};
use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;

const FALLBACK_DETAIL: &str = "Failed to save checklist";

#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Thin typed wrapper over the checklist REST API.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, http: Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub async fn submit_daily(&self, entry: &DailyEntryRequest) -> Result<(), ApiError> {
        let request = self.http.post(self.url("/api/daily/")).json(entry);
        send(request).await?;
        Ok(())
    }

    pub async fn today(&self) -> Result<TodayEntry, ApiError> {
        fetch(self.http.get(self.url("/api/today"))).await
    }

    /// Lists daily entries, restricted to `range` when one is given.
    pub async fn history(&self, range: Option<DateRange>) -> Result<Vec<DailyEntry>, ApiError> {
        let mut request = self.http.get(self.url("/api/daily/"));
        if let Some(range) = range {
            request = request.query(&[
                ("start_date", range.start.to_string()),
                ("end_date", range.end.to_string()),
            ]);
        }
        fetch(request).await
    }

    /// Looks up one day's entry; a 404 from the backend is `Ok(None)`.
    pub async fn daily_by_date(&self, date: NaiveDate) -> Result<Option<DailyEntry>, ApiError> {
        let request = self.http.get(self.url(&format!("/api/daily/{date}")));
        match fetch(request).await {
            Ok(entry) => Ok(Some(entry)),
            Err(ApiError::Application { status: 404, .. }) => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub async fn weekly_reports(&self, filter: ReportFilter) -> Result<Vec<WeeklyReport>, ApiError> {
        let request = self.http.get(self.url("/api/weekly/"));
        fetch(apply_filter(request, "week", filter)).await
    }

    /// Asks the backend for the report of the week containing `date`.
    pub async fn generate_weekly(&self, date: NaiveDate) -> Result<Option<WeeklyReport>, ApiError> {
        fetch(self.http.get(self.url(&format!("/api/weekly/generate/{date}")))).await
    }

    pub async fn monthly_reports(
        &self,
        filter: ReportFilter,
    ) -> Result<Vec<MonthlyReport>, ApiError> {
        let request = self.http.get(self.url("/api/monthly/"));
        fetch(apply_filter(request, "month", filter)).await
    }

    pub async fn stats(&self) -> Result<Stats, ApiError> {
        fetch(self.http.get(self.url("/api/stats/"))).await
    }
}

fn apply_filter(mut request: RequestBuilder, period_key: &str, filter: ReportFilter) -> RequestBuilder {
    if let Some(period) = filter.period {
        request = request.query(&[(period_key, period.to_string())]);
    }
    if let Some(year) = filter.year {
        request = request.query(&[("year", year.to_string())]);
    }
    request
}

async fn fetch<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
    let bytes = send(request).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

async fn send(request: RequestBuilder) -> Result<Vec<u8>, ApiError> {
    let response = request.send().await?;
    let status = response.status();
    let bytes = response.bytes().await?;
    debug!(status = status.as_u16(), len = bytes.len(), "backend response");

    if status.is_success() {
        return Ok(bytes.to_vec());
    }
    Err(ApiError::Application {
        status: status.as_u16(),
        detail: error_detail(status, &bytes),
    })
}

/// Pulls the `detail` message out of an error body.
///
/// Validation failures carry a list instead of a string; those, and bodies
/// that are not JSON at all, get a generic message.
fn error_detail(status: StatusCode, body: &[u8]) -> String {
    match serde_json::from_slice::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: serde_json::Value::String(detail),
        }) => detail,
        _ => {
            debug!(status = status.as_u16(), "error body without detail message");
            FALLBACK_DETAIL.to_string()
        }
    }
}
