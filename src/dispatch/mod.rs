//! Command dispatch.
//!
//! The transport layer feeds each decoded line to [`Dispatcher::on_line`],
//! which parses it into a [`Command`] and routes it by exhaustive match.
//! Handler errors become `ERR:` replies to the requester; the connection
//! always stays open. [`Dispatcher::on_disconnect`] is the single cleanup
//! path for every disconnect, whatever its cause.

mod chat;
mod register;
mod unregister;

pub use chat::ChatHandler;
pub use register::RegisterHandler;
pub use unregister::UnregisterHandler;

use crate::error::{HandlerError, HandlerResult};
use crate::state::{ConnId, Hub};
use async_trait::async_trait;
use chatter_proto::Command;
use std::sync::Arc;
use tracing::{debug, info};

/// Handler context passed to each command handler.
pub struct Context<'a> {
    /// The connection the line arrived on.
    pub conn_id: ConnId,
    /// Shared server state.
    pub hub: &'a Arc<Hub>,
}

/// Trait implemented by all command handlers.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Handle one command payload.
    async fn handle(&self, ctx: &mut Context<'_>, payload: &str) -> HandlerResult;
}

/// Routes parsed commands to their handlers.
pub struct Dispatcher {
    register: RegisterHandler,
    chat: ChatHandler,
    unregister: UnregisterHandler,
}

impl Dispatcher {
    /// Create a dispatcher with all handlers wired up.
    pub fn new() -> Self {
        Self {
            register: RegisterHandler,
            chat: ChatHandler,
            unregister: UnregisterHandler,
        }
    }

    /// Process one inbound line from `conn_id`.
    pub async fn on_line(&self, hub: &Arc<Hub>, conn_id: ConnId, line: &str) {
        let cmd = Command::parse(line);
        debug!(conn = %conn_id, command = cmd.name(), "Dispatching line");

        let mut ctx = Context { conn_id, hub };
        let result = match cmd {
            Command::Register(payload) => self.register.handle(&mut ctx, &payload).await,
            Command::Chat(text) => self.chat.handle(&mut ctx, &text).await,
            Command::Unregister => self.unregister.handle(&mut ctx, "").await,
            Command::Unknown(token) => Err(HandlerError::UnknownCommand(token)),
        };

        if let Err(e) = result {
            debug!(conn = %conn_id, code = e.error_code(), error = %e, "Handler error");
            hub.send_to(conn_id, e.to_reply());
        }
    }

    /// Handle a transport-level disconnect.
    ///
    /// Runs for every disconnect regardless of cause, so a peer that
    /// vanished without an `UNREGISTER` still has its nick released.
    pub fn on_disconnect(&self, hub: &Arc<Hub>, conn_id: ConnId) {
        if let Some(nick) = hub.registry.unregister_by_connection(conn_id) {
            info!(
                conn = %conn_id,
                nick = %nick,
                registered = hub.registry.len(),
                "Nick released on disconnect"
            );
            debug!(nicks = ?hub.registry.nick_set(), "Registered nicks");
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}
