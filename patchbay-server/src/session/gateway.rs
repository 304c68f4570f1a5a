use crate::session::store::{SessionStore, StoreError};
use chrono::Utc;
use patchbay_core::{InviteAccess, RedeemAccess, UserType};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Invalid or expired token")]
    NotFound,

    #[error("Token has expired")]
    Expired,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Validates one-time tokens against the session store and yields the room a
/// connection is entitled to join. This is the only admission control the
/// relay has: the room name itself is the capability.
#[derive(Clone)]
pub struct SessionGateway {
    store: Arc<dyn SessionStore>,
}

impl SessionGateway {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Expiry is a wall-clock comparison against the UTC timestamp stored at
    /// session creation; a deactivated session counts as expired too.
    pub async fn validate_redeem(&self, token: &str) -> Result<RedeemAccess, SessionError> {
        let session = self
            .store
            .find_redeem_session(token)
            .await?
            .ok_or(SessionError::NotFound)?;

        if !session.is_active || session.is_expired_at(Utc::now()) {
            debug!("Rejected expired or inactive redeem session");
            return Err(SessionError::Expired);
        }

        Ok(RedeemAccess {
            room_name: session.room_name,
            profile_id: session.profile_id,
            user_type: UserType::Guest,
        })
    }

    pub async fn validate_invite(&self, token: &str) -> Result<InviteAccess, SessionError> {
        let invite = self
            .store
            .find_profile_invite(token)
            .await?
            .ok_or(SessionError::NotFound)?;

        if invite.is_expired_at(Utc::now()) {
            debug!("Rejected expired profile invite");
            return Err(SessionError::Expired);
        }

        Ok(InviteAccess {
            profile_id: invite.profile_id,
            display_name: invite.display_name,
        })
    }
}
