use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How long a call redeem session stays valid after creation.
pub const REDEEM_VALIDITY_HOURS: i64 = 1;

/// How long a profile-approval invite stays valid after creation.
pub const INVITE_VALIDITY_DAYS: i64 = 3;

/// A short-lived, single-use credential binding a call room to a profile.
/// Issued by the REST layer; the relay only ever validates it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedeemSession {
    pub profile_id: Uuid,
    pub created_by_user_id: Uuid,
    pub room_name: String,
    pub expires_at: DateTime<Utc>,
    pub is_active: bool,
}

impl RedeemSession {
    pub fn new(profile_id: Uuid, created_by_user_id: Uuid) -> Self {
        Self {
            profile_id,
            created_by_user_id,
            room_name: Uuid::new_v4().to_string(),
            expires_at: Utc::now() + Duration::hours(REDEEM_VALIDITY_HOURS),
            is_active: true,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}

/// A pending profile-approval invite. The invited person redeems it once to
/// fill in their profile before moderation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileInvite {
    pub profile_id: Uuid,
    pub display_name: String,
    pub expires_at: DateTime<Utc>,
}

impl ProfileInvite {
    pub fn new(profile_id: Uuid, display_name: impl Into<String>) -> Self {
        Self {
            profile_id,
            display_name: display_name.into(),
            expires_at: Utc::now() + Duration::days(INVITE_VALIDITY_DAYS),
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}

/// Which side of the call a validated token admits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Host,
    Guest,
}

/// Successful redeem validation: everything a client needs to join signaling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedeemAccess {
    pub room_name: String,
    pub profile_id: Uuid,
    pub user_type: UserType,
}

/// Successful invite validation: enough to pre-fill the approval page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteAccess {
    pub profile_id: Uuid,
    pub display_name: String,
}
