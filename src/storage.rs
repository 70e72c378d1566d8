use crate::models::Records;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, warn};

/// Loads student records. A missing or unreadable file yields empty records.
pub async fn load_records(path: &Path) -> Records {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<Records>(&bytes) {
            Ok(records) => {
                info!(students = records.students.len(), "loaded student records");
                records
            }
            Err(err) => {
                error!("failed to parse records file: {err}");
                Records::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            warn!("no records file at {}, starting empty", path.display());
            Records::default()
        }
        Err(err) => {
            error!("failed to read records file: {err}");
            Records::default()
        }
    }
}
