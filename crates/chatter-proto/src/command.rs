//! Client command parsing.
//!
//! The wire format is `COMMAND:payload`: everything before the first
//! colon is the command name, everything after it is the payload. The
//! payload may itself contain colons and is never split further at this
//! layer.

/// A parsed client command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `REGISTER:<nick>` — claim a nick for this connection.
    Register(String),
    /// `CHAT:<text>` — broadcast text to every registered connection.
    Chat(String),
    /// `UNREGISTER:` — leave and disconnect. The payload is ignored.
    Unregister,
    /// Any unrecognized command, including lines with no colon at all.
    /// Carries the offending command token for logging.
    Unknown(String),
}

impl Command {
    /// Parse one inbound line.
    ///
    /// Command matching is case-sensitive and exact. A line without a
    /// colon is unparseable and maps to [`Command::Unknown`] carrying the
    /// whole line.
    pub fn parse(line: &str) -> Command {
        let Some((cmd, payload)) = line.split_once(':') else {
            return Command::Unknown(line.to_string());
        };
        match cmd {
            "REGISTER" => Command::Register(payload.to_string()),
            "CHAT" => Command::Chat(payload.to_string()),
            "UNREGISTER" => Command::Unregister,
            other => Command::Unknown(other.to_string()),
        }
    }

    /// The wire name of this command, for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Register(_) => "REGISTER",
            Command::Chat(_) => "CHAT",
            Command::Unregister => "UNREGISTER",
            Command::Unknown(_) => "UNKNOWN",
        }
    }
}
