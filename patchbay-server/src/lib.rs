mod config;
mod error;
mod registry;
mod room;
mod routes;
mod session;
mod signaling;

pub use config::*;
pub use error::*;
pub use registry::*;
pub use room::*;
pub use routes::*;
pub use session::*;
pub use signaling::*;
