use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;

/// Revoked token ids (`jti`) mapped to the token's own expiry.
///
/// Entries only need to outlive the token they block; `purge_expired`
/// drops them once the token would be rejected as expired anyway.
#[derive(Clone, Default)]
pub struct TokenDenylist {
    entries: Arc<DashMap<String, usize>>,
}

impl TokenDenylist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn revoke(&self, jti: &str, exp: usize) {
        self.entries.insert(jti.to_string(), exp);
    }

    pub fn is_revoked(&self, jti: &str) -> bool {
        self.entries.contains_key(jti)
    }

    pub fn purge_expired(&self) -> usize {
        let now = Utc::now().timestamp() as usize;
        let before = self.entries.len();
        self.entries.retain(|_, exp| *exp > now);
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
