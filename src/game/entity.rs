//! Entities reported by the engine each frame.

use serde::Serialize;

/// Identifier for a player, as assigned by the engine.
pub type PlayerId = usize;

/// A coordinate on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coord {
    /// X coordinate (column).
    pub x: usize,
    /// Y coordinate (row).
    pub y: usize,
}

impl Coord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// A player's shipyard, reported once at setup.
///
/// There is exactly one factory per player and it never moves; the setup
/// parser builds the list and nothing revisits it afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Factory {
    /// Owning player.
    pub player: PlayerId,
    /// Fixed map position.
    pub pos: Coord,
}

/// A dropoff point, re-reported in full every turn.
///
/// The wire carries a per-dropoff identifier, but it is discarded: the model
/// only needs owner and position. The collection is replaced wholesale each
/// turn, so references to a prior turn's dropoffs are stale by contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dropoff {
    /// Owning player.
    pub player: PlayerId,
    /// Map position.
    pub pos: Coord,
}

/// A ship, re-reported in full every turn.
///
/// No in-memory identity persists across turns: the turn parser builds a
/// fresh collection each frame. Consumers tracking a ship over time must key
/// by the wire-provided `(player, id)` pair, never by reference or index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ship {
    /// Owning player.
    pub player: PlayerId,
    /// Player-scoped ship identifier from the wire.
    pub id: usize,
    /// Current map position.
    pub pos: Coord,
    /// Halite currently carried as cargo.
    pub halite: usize,
}
