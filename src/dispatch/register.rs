//! REGISTER handler.

use super::{Context, Handler};
use crate::error::{HandlerError, HandlerResult};
use crate::state::RegisterError;
use async_trait::async_trait;
use chatter_proto::Reply;
use tracing::info;

/// Handler for the REGISTER command.
///
/// The payload, trimmed of surrounding whitespace, is the requested
/// nick. Registering while already registered is a rename; the old nick
/// is released atomically. Only the requester is told the outcome.
pub struct RegisterHandler;

#[async_trait]
impl Handler for RegisterHandler {
    async fn handle(&self, ctx: &mut Context<'_>, payload: &str) -> HandlerResult {
        let nick = payload.trim();
        match ctx.hub.registry.register(nick, ctx.conn_id) {
            Ok(()) => {
                let peer = ctx
                    .hub
                    .remote_description(ctx.conn_id)
                    .unwrap_or_else(|| "unknown".to_string());
                info!(
                    conn = %ctx.conn_id,
                    nick = %nick,
                    peer = %peer,
                    registered = ctx.hub.registry.len(),
                    "Nick registered"
                );
                ctx.hub.send_to(ctx.conn_id, Reply::NickOk(nick.to_string()));
                Ok(())
            }
            Err(RegisterError::AlreadyTaken) => Err(HandlerError::NickTaken(nick.to_string())),
        }
    }
}
