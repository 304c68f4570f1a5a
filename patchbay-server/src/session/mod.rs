mod gateway;
mod memory_store;
mod store;

pub use gateway::*;
pub use memory_store::*;
pub use store::*;
