//! Wire protocol building blocks.
//!
//! The Halite III engine speaks a whitespace-delimited text protocol over
//! standard input: one setup frame at match start, then one state frame per
//! turn. This module provides the token-level reader and the decoder for the
//! opaque constants record; frame structure lives in [`crate::game`].

mod constants;
mod token;

pub use constants::Constants;
pub use token::TokenReader;
