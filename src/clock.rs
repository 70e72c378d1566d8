use crate::registry::UiRegistry;
use chrono::{DateTime, FixedOffset, Local, Locale, Timelike};
use serde::Serialize;
use std::fmt::Write;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info};

pub const TIME_TARGET: &str = "current-time";
pub const DATE_TARGET: &str = "current-date";
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

const DATE_FORMAT: &str = "%A %-d %B %Y";
const DATE_LOCALE: Locale = Locale::fr_FR;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("time source unavailable: {0}")]
    TimeUnavailable(String),
    #[error("failed to render clock text")]
    Render(#[from] std::fmt::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedClock {
    pub time: String,
    pub date: String,
}

pub trait TimeSource: Send + Sync {
    fn now(&self) -> Result<DateTime<FixedOffset>, FormatError>;
}

/// Local wall-clock time.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Result<DateTime<FixedOffset>, FormatError> {
        let now = Local::now();
        Ok(now.with_timezone(now.offset()))
    }
}

/// Formats `now` as a 24-hour `HH:MM:SS` time and a long French date.
pub fn render_clock(now: &DateTime<FixedOffset>) -> Result<RenderedClock, FormatError> {
    let time = format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second());
    let mut date = String::new();
    write!(date, "{}", now.format_localized(DATE_FORMAT, DATE_LOCALE))?;
    Ok(RenderedClock { time, date })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockState {
    Idle,
    Running,
}

pub struct ClockUpdater {
    source: Arc<dyn TimeSource>,
    state: ClockState,
}

impl ClockUpdater {
    pub fn new(source: Arc<dyn TimeSource>) -> Self {
        Self {
            source,
            state: ClockState::Idle,
        }
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    /// Recomputes the clock and writes it to whichever display targets
    /// exist. A failed tick is logged and leaves the display as it was.
    pub fn tick<R>(&mut self, registry: &mut R) -> Result<RenderedClock, FormatError>
    where
        R: UiRegistry + ?Sized,
    {
        self.state = ClockState::Running;

        let rendered = match self.source.now().and_then(|now| render_clock(&now)) {
            Ok(rendered) => rendered,
            Err(err) => {
                error!("error updating clock: {err}");
                return Err(err);
            }
        };

        if let Some(target) = registry.by_key_mut(TIME_TARGET) {
            target.text.clone_from(&rendered.time);
        }
        if let Some(target) = registry.by_key_mut(DATE_TARGET) {
            target.text.clone_from(&rendered.date);
        }

        info!(time = %rendered.time, date = %rendered.date, "clock updated");
        Ok(rendered)
    }
}

/// Owns the repeating tick task.
#[derive(Default)]
pub struct ClockScheduler {
    task: Mutex<Option<JoinHandle<()>>>,
}

impl ClockScheduler {
    /// Ticks immediately, then every [`TICK_INTERVAL`]. Returns `false`
    /// when a schedule is already running.
    pub async fn start<R>(&self, page: Arc<Mutex<R>>, mut updater: ClockUpdater) -> bool
    where
        R: UiRegistry + Send + 'static,
    {
        let mut task = self.task.lock().await;
        if task.as_ref().is_some_and(|handle| !handle.is_finished()) {
            return false;
        }

        *task = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(TICK_INTERVAL);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let mut page = page.lock().await;
                // failures are logged inside tick; the schedule keeps going
                let _ = updater.tick(&mut *page);
            }
        }));
        info!("clock scheduler started");
        true
    }

    pub async fn stop(&self) {
        if let Some(handle) = self.task.lock().await.take() {
            handle.abort();
            info!("clock scheduler stopped");
        }
    }

    pub async fn is_running(&self) -> bool {
        self.task
            .lock()
            .await
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}
