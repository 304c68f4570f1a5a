mod connection;
mod room;
mod session;
mod signaling;

pub use connection::ConnectionId;
pub use room::RoomId;
pub use session::{
    INVITE_VALIDITY_DAYS, InviteAccess, ProfileInvite, REDEEM_VALIDITY_HOURS, RedeemAccess,
    RedeemSession, UserType,
};
pub use signaling::{ClientEvent, ServerEvent};
