pub mod app;
pub mod clock;
pub mod config;
pub mod errors;
pub mod forms;
pub mod handlers;
pub mod models;
pub mod page;
pub mod records;
pub mod registry;
pub mod state;
pub mod storage;
pub mod tabs;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::load_records;
