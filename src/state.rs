use crate::clock::{ClockScheduler, ClockUpdater, TimeSource};
use crate::page::standard_page;
use crate::records::StudentService;
use crate::registry::MemoryRegistry;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub page: Arc<Mutex<MemoryRegistry>>,
    pub students: Arc<dyn StudentService>,
    pub clock: Arc<ClockScheduler>,
    pub time_source: Arc<dyn TimeSource>,
}

impl AppState {
    pub fn new(students: Arc<dyn StudentService>, time_source: Arc<dyn TimeSource>) -> Self {
        Self {
            page: Arc::new(Mutex::new(standard_page())),
            students,
            clock: Arc::new(ClockScheduler::default()),
            time_source,
        }
    }

    /// Starts the page clock. Returns `false` if it is already running.
    pub async fn start_clock(&self) -> bool {
        let updater = ClockUpdater::new(Arc::clone(&self.time_source));
        self.clock.start(Arc::clone(&self.page), updater).await
    }

    pub async fn stop_clock(&self) {
        self.clock.stop().await;
    }
}
