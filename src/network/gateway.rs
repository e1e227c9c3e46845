//! Gateway - TCP listener that accepts incoming connections.
//!
//! The Gateway binds to a socket and spawns a Connection task for each
//! incoming client.

use crate::dispatch::Dispatcher;
use crate::network::Connection;
use crate::state::Hub;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info, instrument};

/// The Gateway accepts incoming TCP connections and spawns handlers.
pub struct Gateway {
    listener: TcpListener,
    hub: Arc<Hub>,
    dispatcher: Arc<Dispatcher>,
}

impl Gateway {
    /// Bind the gateway to the specified address.
    pub async fn bind(
        addr: SocketAddr,
        hub: Arc<Hub>,
        dispatcher: Arc<Dispatcher>,
    ) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        info!(server = %hub.server_info.name, %addr, "Listener bound");
        Ok(Self {
            listener,
            hub,
            dispatcher,
        })
    }

    /// The address the listener actually bound to.
    ///
    /// Binding port 0 resolves to a real port here; tests rely on it.
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Run the gateway, accepting connections forever.
    #[instrument(skip(self), name = "gateway")]
    pub async fn run(self) -> anyhow::Result<()> {
        loop {
            match self.listener.accept().await {
                Ok((stream, addr)) => {
                    let conn_id = self.hub.next_conn_id();
                    info!(%addr, conn = %conn_id, "Connection accepted");

                    let hub = Arc::clone(&self.hub);
                    let dispatcher = Arc::clone(&self.dispatcher);
                    tokio::spawn(async move {
                        let connection = Connection::new(conn_id, stream, addr, hub, dispatcher);
                        if let Err(e) = connection.run().await {
                            error!(conn = %conn_id, %addr, error = %e, "Connection error");
                        }
                        info!(conn = %conn_id, %addr, "Connection closed");
                    });
                }
                Err(e) => {
                    error!(error = %e, "Failed to accept connection");
                }
            }
        }
    }
}
