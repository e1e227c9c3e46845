//! Shared server state.

mod hub;
mod registry;
mod session;

pub use hub::{Hub, ServerInfo};
pub use registry::{RegisterError, SessionRegistry};
pub use session::{ConnId, ConnIdGenerator, Outbound, Session};
