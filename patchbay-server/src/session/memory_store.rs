use crate::session::store::{SessionStore, StoreError};
use async_trait::async_trait;
use dashmap::DashMap;
use patchbay_core::{ProfileInvite, RedeemSession};

/// In-process `SessionStore`. Backs local runs and the test suite; a
/// database-backed store slots in behind the same trait in deployment.
#[derive(Default)]
pub struct MemorySessionStore {
    redeem_sessions: DashMap<String, RedeemSession>,
    profile_invites: DashMap<String, ProfileInvite>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_redeem_session(&self, token: impl Into<String>, session: RedeemSession) {
        self.redeem_sessions.insert(token.into(), session);
    }

    pub fn insert_profile_invite(&self, token: impl Into<String>, invite: ProfileInvite) {
        self.profile_invites.insert(token.into(), invite);
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn find_redeem_session(&self, token: &str) -> Result<Option<RedeemSession>, StoreError> {
        Ok(self.redeem_sessions.get(token).map(|s| s.clone()))
    }

    async fn find_profile_invite(&self, token: &str) -> Result<Option<ProfileInvite>, StoreError> {
        Ok(self.profile_invites.get(token).map(|i| i.clone()))
    }
}
