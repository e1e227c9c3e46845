//! Server reply lines.
//!
//! Each variant renders to its exact wire string through `Display`; the
//! transport layer appends the line terminator.

use std::fmt;

/// A server-to-client reply line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// `OK:NICK:<nick>` — registration or rename accepted.
    NickOk(String),
    /// `OK:CHAT:<nick>:<text>` — broadcast delivery, sent to every
    /// registered connection including the sender.
    Chat {
        /// The sender's registered nick.
        nick: String,
        /// The broadcast text, passed through verbatim.
        text: String,
    },
    /// Nick collision (or empty nick) on `REGISTER`.
    NickTaken,
    /// `CHAT` attempted before a successful `REGISTER`.
    NotRegistered,
    /// Unparseable line or unknown command.
    Generic,
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::NickOk(nick) => write!(f, "OK:NICK:{nick}"),
            Reply::Chat { nick, text } => write!(f, "OK:CHAT:{nick}:{text}"),
            Reply::NickTaken => f.write_str("ERR:NICK:Nick already exists. Use another nick"),
            Reply::NotRegistered => f.write_str("ERR:CHAT:Unregistered user! register first."),
            Reply::Generic => {
                f.write_str("ERR:Something has gone wrong. Don't worry, carry on with your talk")
            }
        }
    }
}
