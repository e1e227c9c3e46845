//! Per-connection session state and identity.

use chatter_proto::Reply;
use chrono::{DateTime, Utc};
use std::fmt;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::mpsc;

/// Opaque identity for one live connection.
///
/// Ids are never reused within a server process, so a stale id simply
/// misses in the session table instead of reaching a new peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnId(u64);

impl fmt::Display for ConnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Generates unique connection ids.
pub struct ConnIdGenerator {
    counter: AtomicU64,
}

impl ConnIdGenerator {
    /// Create a new generator.
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(1),
        }
    }

    /// Generate the next unique id.
    pub fn next(&self) -> ConnId {
        ConnId(self.counter.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for ConnIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Messages routed to a connection's event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    /// Write a reply line to the peer.
    Reply(Reply),
    /// Flush pending writes and close the connection.
    Close,
}

/// A live connection attached to the Hub.
///
/// The registration state itself (the nick, if any) lives in the
/// `SessionRegistry`; this record carries the routing handle and the
/// metadata used for lifecycle logging.
#[derive(Debug, Clone)]
pub struct Session {
    /// Remote peer address.
    pub addr: SocketAddr,
    /// Sender side of the connection's outbound queue.
    pub tx: mpsc::Sender<Outbound>,
    /// When the connection was accepted.
    pub connected_at: DateTime<Utc>,
}

impl Session {
    /// Create a session record for a newly attached connection.
    pub fn new(addr: SocketAddr, tx: mpsc::Sender<Outbound>) -> Self {
        Self {
            addr,
            tx,
            connected_at: Utc::now(),
        }
    }

    /// Human-readable description of the remote peer.
    pub fn remote_description(&self) -> String {
        self.addr.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conn_ids_are_unique_and_displayable() {
        let generator = ConnIdGenerator::new();
        let a = generator.next();
        let b = generator.next();
        assert_ne!(a, b);
        assert_eq!(a.to_string(), "#1");
        assert_eq!(b.to_string(), "#2");
    }

    #[test]
    fn session_describes_remote_peer() {
        let (tx, _rx) = mpsc::channel(1);
        let session = Session::new("127.0.0.1:5000".parse().expect("addr"), tx);
        assert_eq!(session.remote_description(), "127.0.0.1:5000");
    }
}
