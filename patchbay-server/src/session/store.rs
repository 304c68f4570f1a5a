use async_trait::async_trait;
use patchbay_core::{ProfileInvite, RedeemSession};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

/// Persistence seam for the session gateway. Token generation, expiry
/// stamping and single-use burning all live on the other side of this trait;
/// the relay only ever looks sessions up.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn find_redeem_session(&self, token: &str) -> Result<Option<RedeemSession>, StoreError>;

    async fn find_profile_invite(&self, token: &str) -> Result<Option<ProfileInvite>, StoreError>;
}
