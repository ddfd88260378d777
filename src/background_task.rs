use tokio::time::{interval, Duration};

use crate::auth::denylist::TokenDenylist;

/// Drops revoked-token entries whose tokens have expired on their own.
pub async fn start_purge_task(denylist: TokenDenylist, every: Duration) {
    let mut interval = interval(every);

    loop {
        interval.tick().await;

        let purged = denylist.purge_expired();
        if purged > 0 {
            tracing::info!("Purged {} expired token revocations", purged);
        }
    }
}
