//! Test chat client.
//!
//! A thin line-oriented client for integration testing that can send
//! commands and assert on received reply lines.

use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::time::timeout;

/// A test chat client.
pub struct TestClient {
    reader: BufReader<OwnedReadHalf>,
    writer: BufWriter<OwnedWriteHalf>,
}

impl TestClient {
    /// Connect to a test server.
    pub async fn connect(address: &str) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(address).await?;

        let (read_half, write_half) = stream.into_split();
        let reader = BufReader::new(read_half);
        let writer = BufWriter::new(write_half);

        Ok(Self { reader, writer })
    }

    /// Send a raw protocol line.
    pub async fn send_line(&mut self, line: &str) -> anyhow::Result<()> {
        self.writer.write_all(line.as_bytes()).await?;
        if !line.ends_with("\r\n") {
            self.writer.write_all(b"\r\n").await?;
        }
        self.writer.flush().await?;
        Ok(())
    }

    /// Receive a single reply line from the server.
    pub async fn recv_line(&mut self) -> anyhow::Result<String> {
        self.recv_line_timeout(Duration::from_secs(5)).await
    }

    /// Receive a reply line with a timeout.
    pub async fn recv_line_timeout(&mut self, dur: Duration) -> anyhow::Result<String> {
        let mut line = String::new();
        let n = timeout(dur, self.reader.read_line(&mut line)).await??;
        if n == 0 {
            anyhow::bail!("Connection closed by server");
        }
        Ok(line.trim_end().to_string())
    }

    /// Register a nick and wait for the confirmation line.
    pub async fn register(&mut self, nick: &str) -> anyhow::Result<()> {
        self.send_line(&format!("REGISTER:{nick}")).await?;
        let reply = self.recv_line().await?;
        if reply == format!("OK:NICK:{nick}") {
            Ok(())
        } else {
            anyhow::bail!("Registration failed: {reply}")
        }
    }

    /// Send a chat line.
    pub async fn chat(&mut self, text: &str) -> anyhow::Result<()> {
        self.send_line(&format!("CHAT:{text}")).await
    }

    /// Send UNREGISTER.
    #[allow(dead_code)]
    pub async fn unregister(&mut self) -> anyhow::Result<()> {
        self.send_line("UNREGISTER:").await
    }

    /// Assert the server closes the connection without sending anything.
    #[allow(dead_code)]
    pub async fn expect_closed(&mut self) -> anyhow::Result<()> {
        let mut line = String::new();
        let n = timeout(Duration::from_secs(5), self.reader.read_line(&mut line)).await??;
        if n == 0 {
            Ok(())
        } else {
            anyhow::bail!("Expected close, got: {}", line.trim_end())
        }
    }
}
