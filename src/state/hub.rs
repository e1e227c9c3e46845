//! The Hub - central shared state for the chat server.
//!
//! The Hub holds the nick registry and the table of live connections in
//! thread-safe collections accessible from any task.

use crate::config::{Config, LimitsConfig};
use crate::state::{ConnId, ConnIdGenerator, Outbound, Session, SessionRegistry};
use chatter_proto::Reply;
use dashmap::DashMap;
use std::net::SocketAddr;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, warn};

/// This server's identity information.
#[derive(Debug, Clone)]
pub struct ServerInfo {
    /// Server name, from config.
    pub name: String,
}

/// Central shared state container.
pub struct Hub {
    /// The authoritative nick ↔ connection mapping.
    pub registry: SessionRegistry,

    /// Live connections, indexed by connection id.
    sessions: DashMap<ConnId, Session>,

    /// Connection id generator for newly accepted connections.
    conn_ids: ConnIdGenerator,

    /// This server's identity.
    pub server_info: ServerInfo,

    /// Limits applied to each connection.
    pub limits: LimitsConfig,
}

impl Hub {
    /// Create a Hub from configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            registry: SessionRegistry::new(),
            sessions: DashMap::new(),
            conn_ids: ConnIdGenerator::new(),
            server_info: ServerInfo {
                name: config.server.name.clone(),
            },
            limits: config.limits.clone(),
        }
    }

    /// Allocate an id for a newly accepted connection.
    pub fn next_conn_id(&self) -> ConnId {
        self.conn_ids.next()
    }

    /// Attach a connection's routing handle.
    pub fn attach(&self, conn: ConnId, addr: SocketAddr, tx: mpsc::Sender<Outbound>) {
        self.sessions.insert(conn, Session::new(addr, tx));
    }

    /// Detach a connection, dropping its routing handle.
    ///
    /// Returns the removed session for lifecycle logging.
    pub fn detach(&self, conn: ConnId) -> Option<Session> {
        self.sessions.remove(&conn).map(|(_, session)| session)
    }

    /// Human-readable description of a connection's remote peer.
    pub fn remote_description(&self, conn: ConnId) -> Option<String> {
        self.sessions
            .get(&conn)
            .map(|session| session.remote_description())
    }

    /// Queue a reply line to one connection, fire-and-forget.
    ///
    /// Delivery failures stay with the transport: a missing session means
    /// the peer is already gone, a full queue means it cannot keep up and
    /// this line is dropped for it. Neither outcome reaches the caller,
    /// so one bad recipient never aborts a broadcast.
    pub fn send_to(&self, conn: ConnId, reply: Reply) {
        let Some(session) = self.sessions.get(&conn) else {
            debug!(conn = %conn, "Dropping reply for detached connection");
            return;
        };
        if let Err(e) = session.tx.try_send(Outbound::Reply(reply)) {
            warn!(conn = %conn, error = %e, "Outbound queue rejected reply");
        }
    }

    /// Ask a connection's event loop to flush pending writes and close.
    ///
    /// The requester may be the connection itself, still inside its own
    /// dispatch call, so this never awaits the queue directly: a full
    /// queue hands the close to a detached task that delivers it once
    /// the event loop drains a slot.
    pub fn request_close(&self, conn: ConnId) {
        let tx = match self.sessions.get(&conn) {
            Some(session) => session.tx.clone(),
            None => return,
        };
        if let Err(TrySendError::Full(msg)) = tx.try_send(Outbound::Close) {
            debug!(conn = %conn, "Outbound queue full, deferring close");
            tokio::spawn(async move {
                let _ = tx.send(msg).await;
            });
        }
    }

    /// Number of live (attached) connections.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }
}
