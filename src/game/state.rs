//! The world model and the two-phase frame parser.

use std::collections::HashMap;
use std::io::BufRead;

use serde::Serialize;
use tracing::{debug, info};

use crate::error::{ProtocolError, ProtocolResult};
use crate::game::{Coord, Dropoff, Factory, Map, PlayerId, Ship};
use crate::protocol::{Constants, TokenReader};

/// Outcome of parsing one turn frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A full frame was parsed and committed to the world model.
    Parsed,
    /// The stream ended cleanly at the frame boundary; the match is over.
    MatchOver,
}

/// Remap a read that ran off the end of the stream into a frame error.
///
/// End-of-stream is only a valid signal between frames. Any field read inside
/// a frame that hits it means the engine truncated the frame, which the
/// protocol contract rules out except as a bug.
fn field<T>(value: ProtocolResult<T>, context: &'static str) -> ProtocolResult<T> {
    value.map_err(|err| match err {
        ProtocolError::EndOfStream => ProtocolError::MalformedFrame { context },
        other => other,
    })
}

/// The complete world state reconstructed from the wire.
///
/// The model exclusively owns every collection it holds. Ships, dropoffs and
/// the energy table are replaced wholesale by each call to [`Game::parse`];
/// the map grid is allocated once by [`Game::pre_parse`] and mutated in place
/// thereafter. A consumer must fully drain turn N's state before parsing
/// turn N+1.
#[derive(Debug, Clone, Serialize)]
pub struct Game {
    /// Engine configuration, opaque to the decoder.
    pub constants: Constants,
    /// Number of players in the match, fixed at setup.
    pub num_players: usize,
    /// This client's own player id.
    pub my_id: PlayerId,
    /// One shipyard per player, in wire order. Immutable after setup.
    pub factories: Vec<Factory>,
    /// The halite grid.
    pub map: Map,
    /// All ships on the board, rebuilt every turn.
    pub ships: Vec<Ship>,
    /// All dropoff points, rebuilt every turn.
    pub dropoffs: Vec<Dropoff>,
    /// Stored halite per player, fully rewritten every turn.
    pub energy: HashMap<PlayerId, usize>,
    /// Current turn, zero-indexed.
    pub turn: usize,
}

impl Game {
    /// Parse the one-time setup frame and build the world model.
    ///
    /// Reads, in wire order: the constants record, the player count and this
    /// client's id, one factory per player, the map dimensions, and the full
    /// halite grid. The grid arrives row-major (y outer, x inner) but is
    /// stored addressed by `(x, y)`; the transposition is part of the
    /// protocol contract.
    ///
    /// # Errors
    ///
    /// Any end of stream mid-setup is [`ProtocolError::MalformedFrame`] —
    /// setup has no valid partial state. Also propagates
    /// [`ProtocolError::MalformedToken`], [`ProtocolError::MalformedConstants`]
    /// and [`ProtocolError::Io`].
    pub fn pre_parse<R: BufRead>(reader: &mut TokenReader<R>) -> ProtocolResult<Self> {
        let constants_token = field(reader.next_token(), "constants record")?;
        let constants = Constants::from_token(&constants_token)?;

        let num_players = field(reader.next_usize(), "player count")?;
        let my_id = field(reader.next_usize(), "own player id")?;

        let mut factories = Vec::with_capacity(num_players);
        for _ in 0..num_players {
            let player = field(reader.next_usize(), "factory player id")?;
            let x = field(reader.next_usize(), "factory x")?;
            let y = field(reader.next_usize(), "factory y")?;
            factories.push(Factory {
                player,
                pos: Coord::new(x, y),
            });
        }

        let width = field(reader.next_usize(), "map width")?;
        let height = field(reader.next_usize(), "map height")?;
        let mut map = Map::new(width, height).ok_or(ProtocolError::MalformedFrame {
            context: "map dimensions",
        })?;

        for y in 0..height {
            for x in 0..width {
                let value = field(reader.next_usize(), "map cell")?;
                map.set(Coord::new(x, y), value);
            }
        }

        info!(
            num_players,
            my_id, width, height, "setup frame parsed"
        );

        Ok(Self {
            constants,
            num_players,
            my_id,
            factories,
            map,
            ships: Vec::new(),
            dropoffs: Vec::new(),
            energy: HashMap::new(),
            turn: 0,
        })
    }

    /// Parse one turn frame, replacing ship/dropoff/energy state in full and
    /// applying incremental map updates.
    ///
    /// Returns [`TurnOutcome::MatchOver`] when the stream ends on the first
    /// token of the frame — the engine's only legitimate way to end the
    /// match. The new state is staged in full and committed only after the
    /// whole frame parses, so a failed parse leaves the previous turn's
    /// state untouched.
    ///
    /// # Errors
    ///
    /// End of stream anywhere past the first token, an out-of-bounds map
    /// update, or a zero wire turn number is
    /// [`ProtocolError::MalformedFrame`]; non-integer tokens are
    /// [`ProtocolError::MalformedToken`]; source failures are
    /// [`ProtocolError::Io`].
    pub fn parse<R: BufRead>(&mut self, reader: &mut TokenReader<R>) -> ProtocolResult<TurnOutcome> {
        let wire_turn = match reader.next_usize() {
            Err(ProtocolError::EndOfStream) => return Ok(TurnOutcome::MatchOver),
            other => other?,
        };
        // The engine numbers turns from 1; the model is zero-indexed. This
        // adjustment is a compatibility shim for that quirk, not a derived
        // rule.
        let turn = wire_turn
            .checked_sub(1)
            .ok_or(ProtocolError::MalformedFrame {
                context: "turn number",
            })?;

        let mut ships = Vec::new();
        let mut dropoffs = Vec::new();
        let mut energy = HashMap::with_capacity(self.num_players);

        for _ in 0..self.num_players {
            let player = field(reader.next_usize(), "player id")?;
            let num_ships = field(reader.next_usize(), "ship count")?;
            let num_dropoffs = field(reader.next_usize(), "dropoff count")?;
            let stored = field(reader.next_usize(), "player energy")?;
            energy.insert(player, stored);

            for _ in 0..num_ships {
                let id = field(reader.next_usize(), "ship id")?;
                let x = field(reader.next_usize(), "ship x")?;
                let y = field(reader.next_usize(), "ship y")?;
                let halite = field(reader.next_usize(), "ship halite")?;
                ships.push(Ship {
                    player,
                    id,
                    pos: Coord::new(x, y),
                    halite,
                });
            }

            for _ in 0..num_dropoffs {
                // The wire sends a dropoff id; it carries nothing the model
                // needs, so it is read and discarded.
                let _ = field(reader.next_usize(), "dropoff id")?;
                let x = field(reader.next_usize(), "dropoff x")?;
                let y = field(reader.next_usize(), "dropoff y")?;
                dropoffs.push(Dropoff {
                    player,
                    pos: Coord::new(x, y),
                });
            }
        }

        let num_updates = field(reader.next_usize(), "map update count")?;
        let mut updates = Vec::with_capacity(num_updates);
        for _ in 0..num_updates {
            let x = field(reader.next_usize(), "map update x")?;
            let y = field(reader.next_usize(), "map update y")?;
            let value = field(reader.next_usize(), "map update value")?;
            let coord = Coord::new(x, y);
            if !self.map.in_bounds(coord) {
                return Err(ProtocolError::MalformedFrame {
                    context: "map update coordinate",
                });
            }
            updates.push((coord, value));
        }

        // Full frame read; commit the staged state in one step.
        self.turn = turn;
        self.ships = ships;
        self.dropoffs = dropoffs;
        self.energy = energy;
        for (coord, value) in updates {
            self.map.set(coord, value);
        }

        debug!(
            turn = self.turn,
            ships = self.ships.len(),
            dropoffs = self.dropoffs.len(),
            map_updates = num_updates,
            "turn frame parsed"
        );

        Ok(TurnOutcome::Parsed)
    }

    /// Current turn, zero-indexed.
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    /// Ships owned by the given player this turn.
    pub fn ships_of(&self, player: PlayerId) -> impl Iterator<Item = &Ship> {
        self.ships.iter().filter(move |s| s.player == player)
    }

    /// Dropoffs owned by the given player this turn.
    pub fn dropoffs_of(&self, player: PlayerId) -> impl Iterator<Item = &Dropoff> {
        self.dropoffs.iter().filter(move |d| d.player == player)
    }

    /// Look up a ship by its stable wire key.
    ///
    /// This is the only sound way to follow a ship across turns, since the
    /// in-memory collection is rebuilt every frame.
    #[must_use]
    pub fn ship(&self, player: PlayerId, id: usize) -> Option<&Ship> {
        self.ships.iter().find(|s| s.player == player && s.id == id)
    }

    /// Stored halite for the given player, if the player exists.
    #[must_use]
    pub fn energy_of(&self, player: PlayerId) -> Option<usize> {
        self.energy.get(&player).copied()
    }

    /// The given player's shipyard.
    #[must_use]
    pub fn factory_of(&self, player: PlayerId) -> Option<&Factory> {
        self.factories.iter().find(|f| f.player == player)
    }
}
