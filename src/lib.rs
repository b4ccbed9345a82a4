// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! hlt3: a client-side decoder for the Halite III game protocol.
//!
//! The engine drives bots over a turn-based, whitespace-delimited text
//! protocol on standard input: one setup frame at match start, then one
//! state frame per turn until the stream ends. This crate reads that stream
//! and maintains the in-memory world model; strategy and command emission
//! belong to the embedding bot.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   World Model + Frame Parser        │
//! │   (game: setup once, turn loop)     │
//! ├─────────────────────────────────────┤
//! │   Token Reader                      │
//! │   (protocol: one line at a time)    │
//! └─────────────────────────────────────┘
//! ```
//!
//! Everything is single-threaded and synchronous; the only blocking points
//! are line reads on the input source. The sole graceful exit is
//! [`TurnOutcome::MatchOver`], reported when the stream ends exactly at a
//! turn-frame boundary.

pub mod error;
pub mod game;
pub mod protocol;

pub use error::{ProtocolError, ProtocolResult};

// Re-export key types at crate root for convenience
pub use game::{Coord, Dropoff, Factory, Game, Map, PlayerId, Ship, TurnOutcome};
pub use protocol::{Constants, TokenReader};
