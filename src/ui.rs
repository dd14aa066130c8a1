use crate::models::{DailyEntry, MonthlyReport, Stats, TodayEntry, WeeklyReport};
use crate::notify::Notification;
use crate::tabs::{Tab, TabState};
use crate::tasks::{Cadence, Task, TaskFlags};
use crate::view::{Page, Panel, StatsView};
use chrono::NaiveDate;

const LOADING: &str = r#"<div class="loading">Loading...</div>"#;

pub fn render_page(page: &Page) -> String {
    let date_value = page
        .form
        .date
        .map(|date| date.to_string())
        .unwrap_or_default();
    let range_start = page
        .history_filter
        .start
        .map(|date| date.to_string())
        .unwrap_or_default();
    let range_end = page
        .history_filter
        .end
        .map(|date| date.to_string())
        .unwrap_or_default();

    INDEX_HTML
        .replace("{{LONG_DATE}}", &escape_html(&page.date_info.long_date))
        .replace("{{WEEK_NUMBER}}", &page.date_info.week_number.to_string())
        .replace("{{MONTH_NAME}}", &escape_html(&page.date_info.month_name))
        .replace("{{STATS}}", &render_stats(&page.stats))
        .replace("{{FORM_DATE}}", &date_value)
        .replace("{{FORM_MAX}}", &page.form.max_date.to_string())
        .replace("{{DAILY_TASKS}}", &render_checkboxes(&page.form.tasks, Cadence::Daily))
        .replace("{{WEEKLY_TASKS}}", &render_checkboxes(&page.form.tasks, Cadence::Weekly))
        .replace("{{TODAY_STATUS}}", &render_today(page.today.as_ref()))
        .replace("{{TABS}}", &render_tab_buttons(&page.tabs))
        .replace("{{WEEKLY_ACTIVE}}", active_class(&page.tabs, Tab::Weekly))
        .replace("{{MONTHLY_ACTIVE}}", active_class(&page.tabs, Tab::Monthly))
        .replace("{{HISTORY_ACTIVE}}", active_class(&page.tabs, Tab::History))
        .replace("{{WEEKLY_REPORTS}}", &render_weekly(&page.weekly))
        .replace("{{MONTHLY_REPORTS}}", &render_monthly(&page.monthly))
        .replace("{{HISTORY_START}}", &range_start)
        .replace("{{HISTORY_END}}", &range_end)
        .replace("{{HISTORY}}", &render_history(&page.history))
        .replace("{{NOTIFICATION}}", &render_notification(&page.notification))
}

fn active_class(tabs: &TabState, tab: Tab) -> &'static str {
    if tabs.is_active(tab) { " active" } else { "" }
}

pub fn render_checkboxes(tasks: &TaskFlags, cadence: Cadence) -> String {
    Task::ALL
        .into_iter()
        .filter(|task| task.cadence() == cadence)
        .map(|task| {
            let checked = if tasks.get(task) { " checked" } else { "" };
            format!(
                r#"<label class="task-option"><input type="checkbox" id="{key}" name="{key}"{checked} /> {label}</label>"#,
                key = task.key(),
                label = task.label(),
            )
        })
        .collect()
}

pub fn render_today(today: Option<&TodayEntry>) -> String {
    let Some(today) = today else {
        return LOADING.to_string();
    };
    Task::ALL
        .into_iter()
        .map(|task| {
            let (class, text) = if today.tasks.get(task) {
                ("completed", "Completed")
            } else {
                ("pending", "Pending")
            };
            format!(
                r#"<div class="status-item"><span>{label}</span><span class="status-badge {class}">{text}</span></div>"#,
                label = task.label(),
            )
        })
        .collect()
}

pub fn render_stats(stats: &StatsView) -> String {
    let (days, weeks, months, extra) = match stats {
        StatsView::Loading => ("...".to_string(), "...".to_string(), "...".to_string(), String::new()),
        StatsView::Loaded(stats) => (
            stats.total_days_tracked.to_string(),
            stats.total_weeks_reported.to_string(),
            stats.total_months_reported.to_string(),
            render_stats_extra(stats),
        ),
    };
    format!(
        r#"<div class="stat-card"><span class="stat-value" id="total-days">{days}</span><span class="stat-label">Days Tracked</span></div>
<div class="stat-card"><span class="stat-value" id="total-weeks">{weeks}</span><span class="stat-label">Weeks Reported</span></div>
<div class="stat-card"><span class="stat-value" id="total-months">{months}</span><span class="stat-label">Months Reported</span></div>{extra}"#
    )
}

fn render_stats_extra(stats: &Stats) -> String {
    let mut parts = Vec::new();
    if let Some(latest) = stats.latest_daily {
        parts.push(format!("last entry {}", format_short_day(latest)));
    }
    if let Some(score) = stats.latest_weekly_score {
        parts.push(format!("latest weekly score {}", format_percent(score)));
    }
    if let Some(avg) = stats.latest_monthly_avg {
        parts.push(format!("latest monthly gym average {}", format_percent(avg)));
    }
    let mut html = String::new();
    if !parts.is_empty() {
        html.push_str(&format!(r#"<p class="stat-extra">{}</p>"#, parts.join(" &middot; ")));
    }
    if let Some(progress) = &stats.current_week_progress {
        let counts: String = Task::ALL
            .into_iter()
            .map(|task| {
                format!(
                    r#"<span class="week-count" data-task="{key}">{label}: {count}</span>"#,
                    key = task.key(),
                    label = task.label(),
                    count = progress.count(task),
                )
            })
            .collect();
        html.push_str(&format!(
            r#"<div class="week-progress"><span class="stat-extra">{days} days logged this week</span>{counts}</div>"#,
            days = progress.days_this_week,
        ));
    }
    html
}

pub fn render_tab_buttons(tabs: &TabState) -> String {
    Tab::ALL
        .into_iter()
        .map(|tab| {
            format!(
                r#"<form method="post" action="/tab/{name}"><button class="tab-btn{active}" type="submit" data-tab="{name}">{label}</button></form>"#,
                name = tab.name(),
                active = active_class(tabs, tab),
                label = tab.label(),
            )
        })
        .collect()
}

pub fn render_history(panel: &Panel<DailyEntry>) -> String {
    match panel {
        Panel::Loading => LOADING.to_string(),
        Panel::Failed => error_state("Failed to load history"),
        Panel::Empty => empty_state("No entries found for this period"),
        Panel::Loaded(entries) => entries.iter().map(render_history_item).collect(),
    }
}

fn render_history_item(entry: &DailyEntry) -> String {
    let mut badges: Vec<String> = entry
        .tasks
        .completed()
        .map(|task| format!(r#"<span class="task-badge">{}</span>"#, task.label()))
        .collect();
    if badges.is_empty() {
        badges.push(r#"<span class="task-badge none">No tasks completed</span>"#.to_string());
    }
    format!(
        r#"<div class="history-item"><div class="history-date">{date}</div><div class="history-tasks">{badges}</div></div>"#,
        date = format_day(entry.date),
        badges = badges.concat(),
    )
}

pub fn render_weekly(panel: &Panel<WeeklyReport>) -> String {
    match panel {
        Panel::Loading => LOADING.to_string(),
        Panel::Failed => error_state("Failed to load weekly reports"),
        Panel::Empty => empty_state("No weekly reports yet. Start tracking your tasks!"),
        Panel::Loaded(reports) => reports
            .iter()
            .map(|report| {
                let bars: String = Task::ALL
                    .into_iter()
                    .map(|task| progress_bar(task, report.percentage(task)))
                    .collect();
                format!(
                    r#"<div class="report-card"><div class="report-header"><h3>Week {week}, {year}</h3><span class="report-range">{range}</span><span class="report-score">Score: {score}</span></div>{bars}</div>"#,
                    week = report.week_number,
                    year = report.year,
                    range = format_range(report.start_date, report.end_date),
                    score = format_percent(report.total_score),
                )
            })
            .collect(),
    }
}

pub fn render_monthly(panel: &Panel<MonthlyReport>) -> String {
    match panel {
        Panel::Loading => LOADING.to_string(),
        Panel::Failed => error_state("Failed to load monthly reports"),
        Panel::Empty => empty_state("No monthly reports yet. Keep tracking!"),
        Panel::Loaded(reports) => reports
            .iter()
            .map(|report| {
                let bars: String = Task::ALL
                    .into_iter()
                    .map(|task| progress_bar(task, report.percentage(task)))
                    .collect();
                format!(
                    r#"<div class="report-card"><div class="report-header"><h3>{month} {year}</h3><span class="report-score">{days} days tracked</span></div>{bars}</div>"#,
                    month = month_name(report.month),
                    year = report.year,
                    days = report.total_days_tracked,
                )
            })
            .collect(),
    }
}

/// One labelled bar. The label shows the raw value; only the width is
/// clamped to the bar.
pub fn progress_bar(task: Task, value: f64) -> String {
    format!(
        r#"<div class="progress-item"><div class="progress-label"><span>{label}</span><span class="progress-value">{text}</span></div><div class="progress-bar"><div class="progress-fill" style="width: {width}%"></div></div></div>"#,
        label = task.label(),
        text = format_percent(value),
        width = bar_width(value),
    )
}

pub fn bar_width(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

pub fn render_notification(note: &Notification) -> String {
    let shown = if note.visible { " show" } else { "" };
    format!(
        r#"<div id="notification" class="notification{shown}" style="background: {color}"><i class="{icon}"></i><span id="notification-text">{text}</span></div>"#,
        color = note.severity.color(),
        icon = note.severity.icon_class(),
        text = escape_html(&note.message),
    )
}

fn empty_state(message: &str) -> String {
    format!(r#"<div class="empty-state">{message}</div>"#)
}

fn error_state(message: &str) -> String {
    format!(r#"<div class="empty-state failed">{message}</div>"#)
}

fn format_percent(value: f64) -> String {
    format!("{value:.1}%")
}

fn format_day(date: NaiveDate) -> String {
    date.format("%a, %b %-d, %Y").to_string()
}

/// Compact date for inline stats, without the weekday.
fn format_short_day(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

fn format_range(start: NaiveDate, end: NaiveDate) -> String {
    format!("{} - {}", start.format("%b %-d"), end.format("%b %-d, %Y"))
}

fn month_name(month: u32) -> String {
    NaiveDate::from_ymd_opt(2000, month, 1)
        .map(|date| date.format("%B").to_string())
        .unwrap_or_else(|| format!("Month {month}"))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Personal Checklist</title>
  <style>
    :root {
      --bg: #f4f6fb;
      --ink: #1f2937;
      --muted: #6b7280;
      --accent: #6366f1;
      --done: #10b981;
      --pending: #f59e0b;
      --card: #ffffff;
      --shadow: 0 12px 32px rgba(31, 41, 55, 0.1);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: "Inter", "Segoe UI", sans-serif;
      padding: 28px 16px 48px;
    }

    .app {
      width: min(980px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 24px;
    }

    .card {
      background: var(--card);
      border-radius: 18px;
      box-shadow: var(--shadow);
      padding: 24px;
    }

    .date-info {
      display: flex;
      flex-wrap: wrap;
      gap: 18px;
      color: var(--muted);
    }

    .stats {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat-card {
      display: grid;
      gap: 4px;
      text-align: center;
    }

    .stat-value {
      font-size: 1.8rem;
      font-weight: 700;
      color: var(--accent);
    }

    .stat-label,
    .stat-extra {
      color: var(--muted);
      font-size: 0.9rem;
    }

    .week-progress {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
      margin-top: 8px;
    }

    .week-count {
      background: var(--bg);
      border-radius: 999px;
      font-size: 0.8rem;
      padding: 2px 10px;
    }

    .task-group {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      margin-bottom: 14px;
    }

    .task-option {
      background: var(--bg);
      border-radius: 10px;
      padding: 10px 14px;
    }

    .status-item {
      display: flex;
      justify-content: space-between;
      padding: 6px 0;
    }

    .status-badge {
      border-radius: 999px;
      padding: 2px 10px;
      color: white;
      font-size: 0.8rem;
    }

    .status-badge.completed {
      background: var(--done);
    }

    .status-badge.pending {
      background: var(--pending);
    }

    .tabs {
      display: flex;
      gap: 8px;
    }

    .tab-btn {
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      background: var(--bg);
      cursor: pointer;
    }

    .tab-btn.active {
      background: var(--accent);
      color: white;
    }

    .tab-content {
      display: none;
    }

    .tab-content.active {
      display: grid;
      gap: 14px;
    }

    .report-header {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      align-items: baseline;
    }

    .progress-label {
      display: flex;
      justify-content: space-between;
      font-size: 0.9rem;
    }

    .progress-bar {
      height: 8px;
      background: var(--bg);
      border-radius: 999px;
      overflow: hidden;
    }

    .progress-fill {
      height: 100%;
      background: var(--accent);
    }

    .history-item {
      display: flex;
      justify-content: space-between;
      gap: 12px;
      padding: 10px 0;
      border-bottom: 1px solid var(--bg);
    }

    .task-badge {
      background: var(--done);
      color: white;
      border-radius: 8px;
      padding: 2px 8px;
      margin-left: 6px;
      font-size: 0.8rem;
    }

    .task-badge.none {
      background: var(--muted);
    }

    .empty-state,
    .loading {
      color: var(--muted);
      text-align: center;
      padding: 24px;
    }

    .notification {
      position: fixed;
      right: 24px;
      bottom: 24px;
      color: white;
      border-radius: 12px;
      padding: 14px 18px;
      display: none;
      gap: 10px;
    }

    .notification.show {
      display: flex;
    }
  </style>
</head>
<body>
  <main class="app">
    <header class="card">
      <h1>Personal Checklist</h1>
      <div class="date-info">
        <span id="current-date">{{LONG_DATE}}</span>
        <span id="week-number">Week {{WEEK_NUMBER}}</span>
        <span id="current-month">{{MONTH_NAME}}</span>
      </div>
    </header>

    <section class="card stats" id="stats">
{{STATS}}
    </section>

    <section class="card">
      <h2>Today's Checklist</h2>
      <form id="checklist-form" method="post" action="/daily">
        <label for="date">Date</label>
        <input type="date" id="date" name="date" value="{{FORM_DATE}}" max="{{FORM_MAX}}" required />
        <h3>Daily Tasks</h3>
        <div class="task-group">{{DAILY_TASKS}}</div>
        <h3>Weekly Tasks</h3>
        <div class="task-group">{{WEEKLY_TASKS}}</div>
        <button type="submit">Save Checklist</button>
      </form>
    </section>

    <section class="card" id="today-status">
      <h2>Today's Status</h2>
      {{TODAY_STATUS}}
    </section>

    <section class="card">
      <div class="tabs">{{TABS}}</div>
      <div id="weekly-tab" class="tab-content{{WEEKLY_ACTIVE}}">
        <div id="weekly-reports">{{WEEKLY_REPORTS}}</div>
      </div>
      <div id="monthly-tab" class="tab-content{{MONTHLY_ACTIVE}}">
        <div id="monthly-reports">{{MONTHLY_REPORTS}}</div>
      </div>
      <div id="history-tab" class="tab-content{{HISTORY_ACTIVE}}">
        <form id="history-filter" method="post" action="/history">
          <input type="date" id="start-date" name="start_date" value="{{HISTORY_START}}" />
          <input type="date" id="end-date" name="end_date" value="{{HISTORY_END}}" />
          <button type="submit">Load History</button>
        </form>
        <div id="history-list">{{HISTORY}}</div>
      </div>
    </section>
  </main>

  {{NOTIFICATION}}
</body>
</html>
"#;
