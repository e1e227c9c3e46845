//! Connection - handles an individual client connection.
//!
//! Each Connection runs in its own tokio task: a `tokio::select!` loop
//! over decoded inbound lines and the connection's outbound queue.
//! Inbound lines go to the dispatcher; outbound replies are written back
//! through the framed transport. When the loop exits, whatever the
//! cause, disconnect cleanup runs.

use crate::dispatch::Dispatcher;
use crate::state::{ConnId, Hub, Outbound};
use chatter_proto::LineCodec;
use futures_util::{SinkExt, StreamExt};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio_util::codec::Framed;
use tracing::{debug, info, instrument, warn};

/// A client connection handler.
pub struct Connection {
    id: ConnId,
    addr: SocketAddr,
    hub: Arc<Hub>,
    dispatcher: Arc<Dispatcher>,
    stream: TcpStream,
}

impl Connection {
    /// Create a new connection handler.
    pub fn new(
        id: ConnId,
        stream: TcpStream,
        addr: SocketAddr,
        hub: Arc<Hub>,
        dispatcher: Arc<Dispatcher>,
    ) -> Self {
        Self {
            id,
            addr,
            hub,
            dispatcher,
            stream,
        }
    }

    /// Run the connection event loop.
    #[instrument(skip(self), fields(conn = %self.id, addr = %self.addr), name = "connection")]
    pub async fn run(self) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Outbound>(self.hub.limits.outbound_queue);
        self.hub.attach(self.id, self.addr, tx);

        let codec = LineCodec::with_max_len(self.hub.limits.max_line_len);
        let mut framed = Framed::new(self.stream, codec);

        info!(active = self.hub.session_count(), "Client connected");

        loop {
            tokio::select! {
                inbound = framed.next() => match inbound {
                    Some(Ok(line)) => {
                        self.dispatcher.on_line(&self.hub, self.id, &line).await;
                    }
                    Some(Err(e)) => {
                        warn!(error = %e, "Transport read error");
                        break;
                    }
                    None => {
                        debug!("Peer closed the stream");
                        break;
                    }
                },
                outbound = rx.recv() => match outbound {
                    Some(Outbound::Reply(reply)) => {
                        if let Err(e) = framed.send(reply.to_string()).await {
                            warn!(error = %e, "Transport write error");
                            break;
                        }
                    }
                    Some(Outbound::Close) => {
                        debug!("Close requested");
                        let _ = framed.flush().await;
                        break;
                    }
                    None => break,
                },
            }
        }

        // The only cleanup path: runs for every disconnect regardless of
        // cause, so a vanished peer's nick is always released.
        let session = self.hub.detach(self.id);
        self.dispatcher.on_disconnect(&self.hub, self.id);

        if let Some(session) = session {
            let session_secs = chrono::Utc::now()
                .signed_duration_since(session.connected_at)
                .num_seconds();
            info!(session_secs, "Session ended");
        }

        Ok(())
    }
}
