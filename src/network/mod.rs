//! Network layer: the TCP listener and per-connection event loops.

mod connection;
mod gateway;

pub use connection::Connection;
pub use gateway::Gateway;
