//! SessionRegistry - the authoritative nick ↔ connection mapping.

use crate::state::ConnId;
use parking_lot::Mutex;
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

/// Registration failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegisterError {
    /// The nick is empty or held by another connection.
    #[error("nick already exists")]
    AlreadyTaken,
}

/// Maps nicks to connections and back, enforcing uniqueness.
///
/// Both directions live behind a single mutex so every mutation and
/// every broadcast snapshot observes one consistent view: a nick maps to
/// at most one connection, a connection owns at most one nick, and the
/// two maps never disagree. All operations are O(1) in client count
/// except the snapshot copies.
#[derive(Default)]
pub struct SessionRegistry {
    inner: Mutex<Inner>,
}

#[derive(Default)]
struct Inner {
    by_nick: HashMap<String, ConnId>,
    by_conn: HashMap<ConnId, String>,
}

impl SessionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `nick` for `conn`.
    ///
    /// Fails if the nick is empty or held by a different connection.
    /// Re-registering the nick a connection already holds is a no-op.
    /// Registering a different nick is a rename: the old entry is removed
    /// before the new one is inserted, so a connection never owns two
    /// nicks, even transiently.
    pub fn register(&self, nick: &str, conn: ConnId) -> Result<(), RegisterError> {
        if nick.is_empty() {
            return Err(RegisterError::AlreadyTaken);
        }

        let mut inner = self.inner.lock();
        match inner.by_nick.get(nick) {
            Some(owner) if *owner == conn => return Ok(()),
            Some(_) => return Err(RegisterError::AlreadyTaken),
            None => {}
        }

        if let Some(old) = inner.by_conn.remove(&conn) {
            inner.by_nick.remove(&old);
        }
        inner.by_nick.insert(nick.to_string(), conn);
        inner.by_conn.insert(conn, nick.to_string());
        Ok(())
    }

    /// Remove the entry owned by `conn`, returning the released nick.
    ///
    /// A no-op (returning `None`) when the connection holds no nick.
    pub fn unregister_by_connection(&self, conn: ConnId) -> Option<String> {
        let mut inner = self.inner.lock();
        let nick = inner.by_conn.remove(&conn)?;
        inner.by_nick.remove(&nick);
        Some(nick)
    }

    /// The nick currently owned by `conn`, if any.
    pub fn lookup_nick(&self, conn: ConnId) -> Option<String> {
        self.inner.lock().by_conn.get(&conn).cloned()
    }

    /// Point-in-time snapshot of every registered connection.
    ///
    /// Taken under the lock and returned by value, so broadcast fan-out
    /// iterates without holding the lock across per-recipient writes.
    pub fn all_connections(&self) -> Vec<ConnId> {
        self.inner.lock().by_conn.keys().copied().collect()
    }

    /// All currently registered nicks.
    pub fn nick_set(&self) -> BTreeSet<String> {
        self.inner.lock().by_nick.keys().cloned().collect()
    }

    /// Number of registered connections.
    pub fn len(&self) -> usize {
        self.inner.lock().by_nick.len()
    }

    /// Whether no connection is registered.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().by_nick.is_empty()
    }
}
