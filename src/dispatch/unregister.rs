//! UNREGISTER handler.

use super::{Context, Handler};
use crate::error::HandlerResult;
use async_trait::async_trait;
use tracing::info;

/// Handler for the UNREGISTER command.
///
/// Releases the connection's nick (a no-op when unregistered) and asks
/// the transport to close the connection. No reply line is sent, and the
/// departure is silent to other clients.
pub struct UnregisterHandler;

#[async_trait]
impl Handler for UnregisterHandler {
    async fn handle(&self, ctx: &mut Context<'_>, _payload: &str) -> HandlerResult {
        if let Some(nick) = ctx.hub.registry.unregister_by_connection(ctx.conn_id) {
            info!(conn = %ctx.conn_id, nick = %nick, "Nick unregistered");
        }
        ctx.hub.request_close(ctx.conn_id);
        Ok(())
    }
}
