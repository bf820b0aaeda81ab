pub mod authorize;
pub mod token;
pub mod user;

use chrono::Utc;

use crate::domain::repository::StoreError;

pub(crate) fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Collapse a lookup into "found or not". A record that cannot be read is
/// treated as absent, matching how every caller reacts to a missing record.
pub(crate) fn found<T>(result: Result<Option<T>, StoreError>) -> Option<T> {
    match result {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(error = %e, "record lookup failed, treating as absent");
            None
        }
    }
}
