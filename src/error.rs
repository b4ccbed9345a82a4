//! Error types for the protocol decoder.

use std::fmt;
use std::io;

/// Failure modes of the token stream and frame parsers.
///
/// None of these are recovered internally: [`ProtocolError::EndOfStream`] is
/// the expected end-of-match signal when raised on the first token of a new
/// turn frame, and everything else is fatal to the process.
#[derive(Debug)]
pub enum ProtocolError {
    /// The input source is exhausted and the token queue is empty.
    ///
    /// This is the sole graceful termination signal for the turn loop. It is
    /// only valid between turn frames; mid-frame it is remapped to
    /// [`ProtocolError::MalformedFrame`].
    EndOfStream,
    /// A token expected to be an integer failed strict decimal parsing.
    MalformedToken {
        /// The token that failed to parse.
        token: String,
    },
    /// The stream ended or was structurally inconsistent mid-frame.
    MalformedFrame {
        /// The field being read when the frame broke.
        context: &'static str,
    },
    /// The constants token failed structured decoding.
    MalformedConstants {
        /// Decoder diagnostic.
        reason: String,
    },
    /// The underlying line source failed.
    Io(io::Error),
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::EndOfStream => write!(f, "end of input stream"),
            ProtocolError::MalformedToken { token } => {
                write!(f, "malformed integer token: {token:?}")
            }
            ProtocolError::MalformedFrame { context } => {
                write!(f, "malformed frame while reading {context}")
            }
            ProtocolError::MalformedConstants { reason } => {
                write!(f, "malformed constants record: {reason}")
            }
            ProtocolError::Io(err) => write!(f, "input error: {err}"),
        }
    }
}

impl std::error::Error for ProtocolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProtocolError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ProtocolError {
    fn from(err: io::Error) -> Self {
        ProtocolError::Io(err)
    }
}

/// Result type for protocol decoding.
pub type ProtocolResult<T> = Result<T, ProtocolError>;
