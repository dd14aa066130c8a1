use crate::tasks::{Task, TaskFlags};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub tasks: TaskFlags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TodayEntry {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub tasks: TaskFlags,
    #[serde(default)]
    pub exists: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntryRequest {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub tasks: TaskFlags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub week_number: u32,
    pub year: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_score: f64,
    pub gym_percentage: f64,
    pub dsa_percentage: f64,
    pub ml_percentage: f64,
    pub django_percentage: f64,
    pub sql_percentage: f64,
    pub project_percentage: f64,
    pub aws_percentage: f64,
}

impl WeeklyReport {
    pub fn percentage(&self, task: Task) -> f64 {
        match task {
            Task::Gym => self.gym_percentage,
            Task::Dsa => self.dsa_percentage,
            Task::Ml => self.ml_percentage,
            Task::Django => self.django_percentage,
            Task::Sql => self.sql_percentage,
            Task::ProjectWork => self.project_percentage,
            Task::Aws => self.aws_percentage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub year: i32,
    pub month: u32,
    pub total_days_tracked: u32,
    pub avg_gym: f64,
    pub avg_dsa: f64,
    pub avg_ml: f64,
    pub avg_django: f64,
    pub avg_sql: f64,
    pub avg_project: f64,
    pub avg_aws: f64,
}

impl MonthlyReport {
    pub fn percentage(&self, task: Task) -> f64 {
        match task {
            Task::Gym => self.avg_gym,
            Task::Dsa => self.avg_dsa,
            Task::Ml => self.avg_ml,
            Task::Django => self.avg_django,
            Task::Sql => self.avg_sql,
            Task::ProjectWork => self.avg_project,
            Task::Aws => self.avg_aws,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WeekProgress {
    pub days_this_week: u32,
    pub gym_count: u32,
    pub dsa_count: u32,
    pub ml_count: u32,
    pub django_count: u32,
    pub sql_count: u32,
    pub project_count: u32,
    pub aws_count: u32,
}

impl WeekProgress {
    /// Days this week on which `task` was done.
    pub fn count(&self, task: Task) -> u32 {
        match task {
            Task::Gym => self.gym_count,
            Task::Dsa => self.dsa_count,
            Task::Ml => self.ml_count,
            Task::Django => self.django_count,
            Task::Sql => self.sql_count,
            Task::ProjectWork => self.project_count,
            Task::Aws => self.aws_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Stats {
    pub total_days_tracked: u32,
    #[serde(default)]
    pub total_weeks_reported: u32,
    #[serde(default)]
    pub total_months_reported: u32,
    #[serde(default)]
    pub latest_daily: Option<NaiveDate>,
    #[serde(default)]
    pub latest_weekly_score: Option<f64>,
    #[serde(default)]
    pub latest_monthly_avg: Option<f64>,
    #[serde(default)]
    pub today: Option<NaiveDate>,
    #[serde(default)]
    pub current_week_progress: Option<WeekProgress>,
}

/// Inclusive date window for the history query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Optional server-side filters for the report listings.
///
/// `period` is the week number for weekly reports and the month for
/// monthly ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportFilter {
    pub period: Option<u32>,
    pub year: Option<i32>,
}
