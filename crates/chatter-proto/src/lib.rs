//! # chatter-proto
//!
//! Wire protocol library for the chatterd chat service.
//!
//! The protocol is line-based and colon-delimited: clients send
//! `COMMAND:payload` lines and receive `OK:`/`ERR:` reply lines back.
//! This crate provides:
//!
//! - [`Command`] — the parsed client command, a tagged union that callers
//!   match exhaustively
//! - [`Reply`] — server reply lines with their exact wire encodings via
//!   `Display`
//! - [`LineCodec`] — a tokio codec framing newline-terminated lines
//!   (behind the `tokio` feature)
//!
//! ## Quick Start
//!
//! ```rust
//! use chatter_proto::{Command, Reply};
//!
//! let cmd = Command::parse("CHAT:hello there");
//! assert_eq!(cmd, Command::Chat("hello there".to_string()));
//!
//! let reply = Reply::NickOk("foo".to_string());
//! assert_eq!(reply.to_string(), "OK:NICK:foo");
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod command;
pub mod error;
#[cfg(feature = "tokio")]
pub mod line;
pub mod reply;

pub use self::command::Command;
pub use self::error::ProtocolError;
#[cfg(feature = "tokio")]
pub use self::line::{DEFAULT_MAX_LINE_LEN, LineCodec};
pub use self::reply::Reply;
