use crate::api::ApiClient;
use crate::config::DEFAULT_POLL_SECS;
use crate::errors::ApiError;
use crate::models::{DailyEntryRequest, ReportFilter};
use crate::notify::Severity;
use crate::tabs::Tab;
use crate::tasks::TaskFlags;
use crate::view::{Page, Panel, StatsView};
use chrono::{Local, NaiveDate};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at, sleep};
use tracing::{debug, info, warn};

pub const SAVED_MESSAGE: &str = "Checklist saved successfully!";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";
pub const MISSING_DATE_MESSAGE: &str = "Please select a date";
pub const FUTURE_DATE_MESSAGE: &str = "Cannot log a checklist for a future date";

/// What the user sent from the daily form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubmitForm {
    pub date: Option<NaiveDate>,
    pub tasks: TaskFlags,
}

/// Drives the page: every read fills its own region, user actions go
/// through [`Controller::submit`] and [`Controller::switch_tab`].
///
/// The page lock is only held while reading inputs or writing results,
/// never across a backend call.
#[derive(Clone)]
pub struct Controller {
    api: ApiClient,
    page: Arc<Mutex<Page>>,
    notice_ttl: Duration,
}

impl Controller {
    pub fn new(api: ApiClient, notice_ttl: Duration) -> Self {
        Self {
            api,
            page: Arc::new(Mutex::new(Page::new(today()))),
            notice_ttl,
        }
    }

    pub async fn snapshot(&self) -> Page {
        self.page.lock().await.clone()
    }

    /// Snapshot for display, moved onto the current day first.
    pub async fn current_page(&self) -> Page {
        self.follow_calendar(today()).await;
        self.snapshot().await
    }

    /// Moves the page defaults onto `today` and reloads every region when
    /// the day has changed since they were set. Returns whether it did.
    pub async fn follow_calendar(&self, today: NaiveDate) -> bool {
        let rolled = self.page.lock().await.roll_over(today);
        if rolled {
            info!(%today, "day changed, moving page defaults");
            self.refresh_all().await;
        }
        rolled
    }

    pub async fn initialize(&self) {
        self.initialize_at(today()).await;
    }

    /// Sets form defaults for `today` and runs every read.
    pub async fn initialize_at(&self, today: NaiveDate) {
        self.page.lock().await.reset_defaults(today);
        info!(%today, backend = self.api.base_url(), "initializing page");
        self.refresh_all().await;
    }

    /// Runs the five reads concurrently; each one settles on its own.
    pub async fn refresh_all(&self) {
        tokio::join!(
            self.load_stats(),
            self.load_today(),
            self.load_weekly(),
            self.load_monthly(),
            self.load_history(),
        );
    }

    pub async fn load_today(&self) {
        match self.api.today().await {
            Ok(entry) => {
                debug!(date = %entry.date, exists = entry.exists, "loaded today's entry");
                self.page.lock().await.apply_today(entry);
            }
            Err(err) => warn!(error = %err, "failed to load today's status"),
        }
    }

    pub async fn load_history(&self) {
        let range = self.page.lock().await.history_filter.range();
        let panel = match self.api.history(range).await {
            Ok(entries) => Panel::from_items(entries),
            Err(err) => {
                warn!(error = %err, "failed to load history");
                Panel::Failed
            }
        };
        self.page.lock().await.history = panel;
    }

    pub async fn load_weekly(&self) {
        let panel = match self.api.weekly_reports(ReportFilter::default()).await {
            Ok(reports) => Panel::from_items(reports),
            Err(err) => {
                warn!(error = %err, "failed to load weekly reports");
                Panel::Failed
            }
        };
        self.page.lock().await.weekly = panel;
    }

    pub async fn load_monthly(&self) {
        let panel = match self.api.monthly_reports(ReportFilter::default()).await {
            Ok(reports) => Panel::from_items(reports),
            Err(err) => {
                warn!(error = %err, "failed to load monthly reports");
                Panel::Failed
            }
        };
        self.page.lock().await.monthly = panel;
    }

    /// A failed stats read shows the loading placeholder again.
    pub async fn load_stats(&self) {
        let view = match self.api.stats().await {
            Ok(stats) => StatsView::Loaded(stats),
            Err(err) => {
                warn!(error = %err, "failed to load stats");
                StatsView::Loading
            }
        };
        self.page.lock().await.stats = view;
    }

    pub async fn set_history_range(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        {
            let mut page = self.page.lock().await;
            page.history_filter.start = start;
            page.history_filter.end = end;
        }
        self.load_history().await;
    }

    /// Returns whether the selection changed.
    pub async fn switch_tab(&self, tab: Tab) -> bool {
        let changed = self.page.lock().await.tabs.switch(tab);
        if changed {
            debug!(tab = tab.name(), "switched tab");
        }
        changed
    }

    /// Shows `message` and schedules its own hide. Earlier hide timers are
    /// left running, so a retrigger can be hidden by an older one.
    pub async fn notify(&self, message: impl Into<String>, severity: Severity) {
        self.page.lock().await.notification.show(message, severity);

        let page = Arc::clone(&self.page);
        let ttl = self.notice_ttl;
        tokio::spawn(async move {
            sleep(ttl).await;
            page.lock().await.notification.hide();
        });
    }

    /// Saves the daily form. Returns `true` when the backend accepted it.
    ///
    /// On success the checkboxes are cleared and every read runs again. A
    /// rejected or failed request leaves the form as the user filled it.
    pub async fn submit(&self, form: SubmitForm) -> bool {
        self.follow_calendar(today()).await;
        let max_date = {
            let mut page = self.page.lock().await;
            page.form.date = form.date;
            page.form.tasks = form.tasks;
            page.form.max_date
        };

        let Some(date) = form.date else {
            self.notify(MISSING_DATE_MESSAGE, Severity::Error).await;
            return false;
        };
        if date > max_date {
            self.notify(FUTURE_DATE_MESSAGE, Severity::Error).await;
            return false;
        }

        let request = DailyEntryRequest {
            date,
            tasks: form.tasks,
        };
        match self.api.submit_daily(&request).await {
            Ok(()) => {
                info!(%date, completed = form.tasks.completed().count(), "checklist saved");
                self.notify(SAVED_MESSAGE, Severity::Success).await;
                self.page.lock().await.clear_checkboxes();
                self.refresh_all().await;
                true
            }
            Err(ApiError::Application { status, detail }) => {
                warn!(%date, status, %detail, "checklist rejected");
                self.notify(detail, Severity::Error).await;
                false
            }
            Err(err) => {
                warn!(%date, error = %err, "checklist submit failed");
                self.notify(NETWORK_ERROR_MESSAGE, Severity::Error).await;
                false
            }
        }
    }

    /// Re-reads today's status and stats every `period` until the returned
    /// handle is stopped or dropped. The first poll happens one period in.
    /// A zero period polls at the default interval instead.
    pub fn start_polling(&self, period: Duration) -> Poller {
        let period = if period.is_zero() {
            warn!("zero poll period, using the default");
            Duration::from_secs(DEFAULT_POLL_SECS)
        } else {
            period
        };
        let controller = self.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if controller.follow_calendar(today()).await {
                    continue;
                }
                debug!("polling today and stats");
                tokio::join!(controller.load_today(), controller.load_stats());
            }
        });
        info!(period_secs = period.as_secs(), "started polling");
        Poller { handle }
    }
}

/// Handle to the background poll; aborts the task when stopped or dropped.
pub struct Poller {
    handle: JoinHandle<()>,
}

impl Poller {
    pub fn stop(&self) {
        self.handle.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
