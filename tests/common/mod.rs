#![allow(dead_code)]

//! In-process stand-in for the checklist REST backend.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use checklist_client::models::{DailyEntry, DailyEntryRequest, TodayEntry};
use checklist_client::tasks::TaskFlags;
use chrono::{Local, NaiveDate};
use serde_json::{json, Value};
use std::collections::{BTreeMap, HashMap};
use std::net::TcpListener;
use std::sync::{Arc, Mutex, MutexGuard};

pub const DUPLICATE_DETAIL: &str = "Entry already exists";

#[derive(Default)]
pub struct BackendData {
    pub entries: BTreeMap<NaiveDate, TaskFlags>,
    pub weekly: Vec<Value>,
    pub monthly: Vec<Value>,
    pub today_override: Option<Value>,
    pub fail_stats: bool,
    pub history_queries: Vec<HashMap<String, String>>,
    pub report_queries: Vec<HashMap<String, String>>,
}

pub type Shared = Arc<Mutex<BackendData>>;

pub struct MockBackend {
    pub base_url: String,
    pub data: Shared,
}

impl MockBackend {
    /// Serves on the current runtime; lives as long as the test does.
    pub async fn spawn() -> Self {
        let data = Shared::default();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = backend_router(Arc::clone(&data));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self {
            base_url: format!("http://{addr}"),
            data,
        }
    }

    /// Serves from a dedicated thread so the backend outlives any single
    /// test runtime.
    pub fn spawn_detached() -> Self {
        let (tx, rx) = std::sync::mpsc::channel();
        std::thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            runtime.block_on(async move {
                let backend = MockBackend::spawn().await;
                tx.send((backend.base_url.clone(), Arc::clone(&backend.data)))
                    .unwrap();
                std::future::pending::<()>().await;
            });
        });
        let (base_url, data) = rx.recv().unwrap();
        Self { base_url, data }
    }

    pub fn data(&self) -> MutexGuard<'_, BackendData> {
        self.data.lock().unwrap()
    }
}

/// A base URL nothing listens on.
pub fn dead_backend_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn weekly_report(week: u32, gym: f64) -> Value {
    json!({
        "id": week,
        "week_number": week,
        "year": 2026,
        "start_date": "2026-10-12",
        "end_date": "2026-10-18",
        "gym_percentage": gym,
        "dsa_percentage": 0.0,
        "ml_percentage": 14.29,
        "django_percentage": 0.0,
        "sql_percentage": 0.0,
        "project_percentage": 0.0,
        "aws_percentage": 0.0,
        "total_score": 23.47
    })
}

fn backend_router(data: Shared) -> Router {
    Router::new()
        .route("/api/daily/", get(list_daily).post(create_daily))
        .route("/api/daily/:date", get(daily_by_date))
        .route("/api/today", get(today_entry))
        .route("/api/stats/", get(stats))
        .route("/api/weekly/", get(weekly))
        .route("/api/weekly/generate/:date", get(generate_weekly))
        .route("/api/monthly/", get(monthly))
        .with_state(data)
}

async fn create_daily(
    State(data): State<Shared>,
    Json(entry): Json<DailyEntryRequest>,
) -> Response {
    let mut data = data.lock().unwrap();
    if data.entries.contains_key(&entry.date) {
        return (StatusCode::BAD_REQUEST, Json(json!({ "detail": DUPLICATE_DETAIL }))).into_response();
    }
    data.entries.insert(entry.date, entry.tasks);
    Json(DailyEntry {
        id: Some(data.entries.len() as i64),
        date: entry.date,
        tasks: entry.tasks,
    })
    .into_response()
}

async fn list_daily(
    State(data): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Vec<DailyEntry>> {
    let mut data = data.lock().unwrap();
    let start = query.get("start_date").and_then(|v| v.parse::<NaiveDate>().ok());
    let end = query.get("end_date").and_then(|v| v.parse::<NaiveDate>().ok());
    data.history_queries.push(query);
    let entries = data
        .entries
        .iter()
        .rev()
        .filter(|(date, _)| start.is_none_or(|start| **date >= start))
        .filter(|(date, _)| end.is_none_or(|end| **date <= end))
        .map(|(date, tasks)| DailyEntry {
            id: None,
            date: *date,
            tasks: *tasks,
        })
        .collect();
    Json(entries)
}

async fn daily_by_date(State(data): State<Shared>, Path(date): Path<String>) -> Response {
    let data = data.lock().unwrap();
    let Ok(date) = date.parse::<NaiveDate>() else {
        return (StatusCode::BAD_REQUEST, Json(json!({ "detail": "Invalid date format. Use YYYY-MM-DD" }))).into_response();
    };
    match data.entries.get(&date) {
        Some(tasks) => Json(DailyEntry {
            id: None,
            date,
            tasks: *tasks,
        })
        .into_response(),
        None => (StatusCode::NOT_FOUND, Json(json!({ "detail": "Checklist not found for this date" }))).into_response(),
    }
}

async fn today_entry(State(data): State<Shared>) -> Json<Value> {
    let data = data.lock().unwrap();
    if let Some(payload) = &data.today_override {
        return Json(payload.clone());
    }
    let date = today();
    let entry = match data.entries.get(&date) {
        Some(tasks) => TodayEntry {
            date,
            tasks: *tasks,
            exists: true,
        },
        None => TodayEntry {
            date,
            tasks: TaskFlags::default(),
            exists: false,
        },
    };
    Json(serde_json::to_value(entry).unwrap())
}

async fn stats(State(data): State<Shared>) -> Response {
    let data = data.lock().unwrap();
    if data.fail_stats {
        return (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response();
    }
    let week: Vec<&TaskFlags> = data
        .entries
        .range(today() - chrono::Duration::days(6)..)
        .map(|(_, tasks)| tasks)
        .collect();
    let count = |done: fn(&TaskFlags) -> bool| week.iter().copied().filter(|tasks| done(tasks)).count();
    Json(json!({
        "total_days_tracked": data.entries.len(),
        "total_weeks_reported": data.weekly.len(),
        "total_months_reported": data.monthly.len(),
        "latest_daily": data.entries.keys().next_back(),
        "latest_weekly_score": data.weekly.last().and_then(|report| report.get("total_score")),
        "latest_monthly_avg": data.monthly.last().and_then(|report| report.get("avg_gym")),
        "current_week_progress": {
            "days_this_week": week.len(),
            "gym_count": count(|tasks| tasks.gym),
            "dsa_count": count(|tasks| tasks.dsa),
            "ml_count": count(|tasks| tasks.ml),
            "django_count": count(|tasks| tasks.django),
            "sql_count": count(|tasks| tasks.sql),
            "project_count": count(|tasks| tasks.project_work),
            "aws_count": count(|tasks| tasks.aws),
        },
        "today": today(),
    }))
    .into_response()
}

async fn weekly(
    State(data): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Vec<Value>> {
    let mut data = data.lock().unwrap();
    data.report_queries.push(query);
    Json(data.weekly.clone())
}

async fn generate_weekly(Path(_date): Path<String>) -> Json<Value> {
    Json(Value::Null)
}

async fn monthly(
    State(data): State<Shared>,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Vec<Value>> {
    let mut data = data.lock().unwrap();
    data.report_queries.push(query);
    Json(data.monthly.clone())
}
