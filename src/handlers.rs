use crate::controller::SubmitForm;
use crate::errors::AppError;
use crate::state::AppState;
use crate::tabs::Tab;
use crate::tasks::TaskFlags;
use crate::ui::render_page;
use crate::view::Page;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form, Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
pub struct HistoryForm {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let page = state.controller.current_page().await;
    Html(render_page(&page))
}

pub async fn get_state(State(state): State<AppState>) -> Json<Page> {
    Json(state.controller.current_page().await)
}

/// Checkboxes are only posted when checked, so every task key present in
/// the form counts as done.
pub async fn submit_daily(
    State(state): State<AppState>,
    Form(fields): Form<HashMap<String, String>>,
) -> Redirect {
    let form = SubmitForm {
        date: parse_date(fields.get("date").map(String::as_str)),
        tasks: TaskFlags::from_checked(fields.keys().map(String::as_str)),
    };
    state.controller.submit(form).await;
    Redirect::to("/")
}

pub async fn switch_tab(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Redirect, AppError> {
    let tab: Tab = name.parse().map_err(AppError::bad_request)?;
    state.controller.switch_tab(tab).await;
    Ok(Redirect::to("/"))
}

pub async fn filter_history(
    State(state): State<AppState>,
    Form(form): Form<HistoryForm>,
) -> Redirect {
    let start = parse_date(form.start_date.as_deref());
    let end = parse_date(form.end_date.as_deref());
    state.controller.set_history_range(start, end).await;
    state.controller.switch_tab(Tab::History).await;
    Redirect::to("/")
}

pub async fn refresh(State(state): State<AppState>) -> Redirect {
    state.controller.refresh_all().await;
    Redirect::to("/")
}

/// Empty or malformed inputs count as unset.
fn parse_date(value: Option<&str>) -> Option<NaiveDate> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}
