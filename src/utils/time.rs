use crate::error::{Error, Result};
use std::time::{SystemTime, UNIX_EPOCH};

/// Current Unix timestamp in seconds
///
/// # Errors
/// `Error::Runtime` when the system clock reads before the Unix epoch.
pub(crate) fn current_timestamp() -> Result<i64> {
    unix_seconds(SystemTime::now())
}

fn unix_seconds(time: SystemTime) -> Result<i64> {
    let elapsed = time
        .duration_since(UNIX_EPOCH)
        .map_err(|_| Error::Runtime("system clock before Unix epoch".to_string()))?;
    Ok(i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX))
}
