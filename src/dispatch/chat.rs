//! CHAT handler.

use super::{Context, Handler};
use crate::error::{HandlerError, HandlerResult};
use async_trait::async_trait;
use chatter_proto::Reply;
use tracing::debug;

/// Handler for the CHAT command.
///
/// Only registered connections may broadcast. Recipients are snapshotted
/// before any write so a slow peer cannot stall the registry, and
/// delivery is fire-and-forget per recipient.
pub struct ChatHandler;

#[async_trait]
impl Handler for ChatHandler {
    async fn handle(&self, ctx: &mut Context<'_>, payload: &str) -> HandlerResult {
        let nick = ctx
            .hub
            .registry
            .lookup_nick(ctx.conn_id)
            .ok_or(HandlerError::NotRegistered)?;

        let reply = Reply::Chat {
            nick,
            text: payload.to_string(),
        };

        // Snapshot first, then write: the registry lock is never held
        // across a per-recipient send.
        let recipients = ctx.hub.registry.all_connections();
        debug!(
            conn = %ctx.conn_id,
            recipients = recipients.len(),
            "Broadcasting chat line"
        );
        for conn in recipients {
            ctx.hub.send_to(conn, reply.clone());
        }
        Ok(())
    }
}
