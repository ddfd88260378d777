use std::time::Duration;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

/// Process start, reported as uptime by `/health`.
pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// How often expired entries are dropped from the token revocation list.
pub const DENYLIST_PURGE_INTERVAL: Duration = Duration::from_secs(60 * 60);
