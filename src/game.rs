//! World model for a Halite III match.
//!
//! Reconstructed entirely from the wire:
//! - Map grid of halite values (allocated at setup, updated in place)
//! - Factories (one per player, fixed at setup)
//! - Ships and dropoffs (replaced wholesale every turn)
//! - Stored energy per player and the turn counter

mod entity;
mod map;
mod state;

pub use entity::{Coord, Dropoff, Factory, PlayerId, Ship};
pub use map::Map;
pub use state::{Game, TurnOutcome};
