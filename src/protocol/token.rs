//! Whitespace-delimited token extraction from a line source.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::error::{ProtocolError, ProtocolResult};

/// Pulls whitespace-delimited tokens from a buffered input source.
///
/// Tokens are buffered one line at a time: whenever the internal queue is
/// empty and a token is requested, exactly one new line is read from the
/// source and split on runs of whitespace. A single token therefore never
/// spans two lines, but one line may carry many tokens.
///
/// Consumption is strictly sequential; the protocol is self-describing
/// (every variable-length section is preceded by an explicit count), so no
/// pushback or rewind is provided.
#[derive(Debug)]
pub struct TokenReader<R> {
    source: R,
    queue: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    /// Create a reader over the given line source.
    #[must_use]
    pub fn new(source: R) -> Self {
        Self {
            source,
            queue: VecDeque::new(),
        }
    }

    /// Remove and return the next token, refilling from the source if needed.
    ///
    /// Blank lines are skipped: the reader keeps pulling lines until one
    /// yields at least one token or the source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::EndOfStream`] when the source has no more
    /// lines and the queue is empty, and [`ProtocolError::Io`] if the source
    /// fails.
    pub fn next_token(&mut self) -> ProtocolResult<String> {
        loop {
            if let Some(token) = self.queue.pop_front() {
                return Ok(token);
            }

            let mut line = String::new();
            if self.source.read_line(&mut line)? == 0 {
                return Err(ProtocolError::EndOfStream);
            }
            self.queue
                .extend(line.split_whitespace().map(str::to_string));
        }
    }

    /// Remove the next token and parse it as a decimal integer.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::MalformedToken`] if the token is not a valid
    /// integer literal, plus everything [`TokenReader::next_token`] returns.
    pub fn next_usize(&mut self) -> ProtocolResult<usize> {
        let token = self.next_token()?;
        token
            .parse()
            .map_err(|_| ProtocolError::MalformedToken { token })
    }
}
