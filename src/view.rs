use crate::date_info::DateInfo;
use crate::models::{DailyEntry, DateRange, MonthlyReport, Stats, TodayEntry, WeeklyReport};
use crate::notify::Notification;
use crate::tabs::TabState;
use crate::tasks::TaskFlags;
use chrono::{Duration, NaiveDate};
use serde::Serialize;

/// Days between the default history start and today.
pub const HISTORY_LOOKBACK_DAYS: i64 = 7;

/// State of a list region filled from a read request.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "items", rename_all = "snake_case")]
pub enum Panel<T> {
    Loading,
    Empty,
    Loaded(Vec<T>),
    Failed,
}

impl<T> Panel<T> {
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            Panel::Empty
        } else {
            Panel::Loaded(items)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", content = "stats", rename_all = "snake_case")]
pub enum StatsView {
    Loading,
    Loaded(Stats),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyForm {
    pub date: Option<NaiveDate>,
    /// Latest selectable date; future days cannot be logged.
    pub max_date: NaiveDate,
    pub tasks: TaskFlags,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistoryFilter {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl HistoryFilter {
    /// Filtering applies only when both bounds are set.
    pub fn range(&self) -> Option<DateRange> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(DateRange { start, end }),
            _ => None,
        }
    }
}

/// Everything the page shows, region by region.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub form: DailyForm,
    pub history_filter: HistoryFilter,
    pub date_info: DateInfo,
    pub today: Option<TodayEntry>,
    pub stats: StatsView,
    pub history: Panel<DailyEntry>,
    pub weekly: Panel<WeeklyReport>,
    pub monthly: Panel<MonthlyReport>,
    pub tabs: TabState,
    pub notification: Notification,
}

impl Page {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            form: DailyForm {
                date: Some(today),
                max_date: today,
                tasks: TaskFlags::default(),
            },
            history_filter: HistoryFilter {
                start: Some(today - Duration::days(HISTORY_LOOKBACK_DAYS)),
                end: Some(today),
            },
            date_info: DateInfo::for_date(today),
            today: None,
            stats: StatsView::Loading,
            history: Panel::Loading,
            weekly: Panel::Loading,
            monthly: Panel::Loading,
            tabs: TabState::default(),
            notification: Notification::default(),
        }
    }

    /// Resets the form defaults and date header for a (re)load on `today`.
    /// Loaded regions and the selected tab are kept.
    pub fn reset_defaults(&mut self, today: NaiveDate) {
        let fresh = Page::new(today);
        self.form = fresh.form;
        self.history_filter = fresh.history_filter;
        self.date_info = fresh.date_info;
    }

    /// Moves the date-bound defaults to `today` once the calendar day has
    /// changed. The picked date and history window follow only while they
    /// still hold the previous day's defaults. Returns whether anything moved.
    pub fn roll_over(&mut self, today: NaiveDate) -> bool {
        let previous = self.form.max_date;
        if previous == today {
            return false;
        }
        let stale = Page::new(previous);
        let fresh = Page::new(today);
        if self.form.date == stale.form.date {
            self.form.date = fresh.form.date;
        }
        self.form.max_date = today;
        if self.history_filter == stale.history_filter {
            self.history_filter = fresh.history_filter;
        }
        self.date_info = fresh.date_info;
        true
    }

    /// Shows today's badges and mirrors a saved entry into the form.
    /// Without a saved entry the checkboxes are cleared whatever the
    /// payload's flags say.
    pub fn apply_today(&mut self, entry: TodayEntry) {
        self.form.tasks = if entry.exists {
            entry.tasks
        } else {
            TaskFlags::default()
        };
        self.today = Some(entry);
    }

    pub fn clear_checkboxes(&mut self) {
        self.form.tasks = TaskFlags::default();
    }
}
