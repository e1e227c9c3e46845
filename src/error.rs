//! Unified error handling for chatterd.
//!
//! Command handling errors carry a stable code for log labeling and map
//! to the wire `ERR:` replies.

use chatter_proto::Reply;
use thiserror::Error;

/// Errors that can occur during command handling.
///
/// Every variant is recoverable: the dispatcher converts it into an
/// `ERR:` reply to the requesting connection and the connection stays
/// open. Nothing here ever terminates a connection.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HandlerError {
    #[error("nick already taken: {0}")]
    NickTaken(String),

    #[error("not registered")]
    NotRegistered,

    #[error("unknown command: {0:?}")]
    UnknownCommand(String),
}

impl HandlerError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NickTaken(_) => "nick_taken",
            Self::NotRegistered => "not_registered",
            Self::UnknownCommand(_) => "unknown_command",
        }
    }

    /// Convert to the reply line sent to the requesting connection.
    pub fn to_reply(&self) -> Reply {
        match self {
            Self::NickTaken(_) => Reply::NickTaken,
            Self::NotRegistered => Reply::NotRegistered,
            Self::UnknownCommand(_) => Reply::Generic,
        }
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(
            HandlerError::NickTaken("foo".into()).error_code(),
            "nick_taken"
        );
        assert_eq!(HandlerError::NotRegistered.error_code(), "not_registered");
        assert_eq!(
            HandlerError::UnknownCommand("BOGUS".into()).error_code(),
            "unknown_command"
        );
    }

    #[test]
    fn replies_match_error_taxonomy() {
        assert_eq!(
            HandlerError::NickTaken("foo".into()).to_reply(),
            Reply::NickTaken
        );
        assert_eq!(HandlerError::NotRegistered.to_reply(), Reply::NotRegistered);
        assert_eq!(
            HandlerError::UnknownCommand("BOGUS".into()).to_reply(),
            Reply::Generic
        );
    }
}
