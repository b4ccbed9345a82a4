//! The opaque game-constants record sent at setup.

use serde::Serialize;
use serde_json::Value;

use crate::error::{ProtocolError, ProtocolResult};

/// Engine configuration, decoded from the single JSON token that opens the
/// setup frame.
///
/// The record is stored unmodified: the decoder validates only that it is a
/// JSON object and interprets nothing at decode time. The named getters look
/// up the handful of keys bots commonly need, using the engine's key names.
#[derive(Debug, Clone, Serialize)]
pub struct Constants {
    values: serde_json::Map<String, Value>,
}

impl Constants {
    /// Decode the constants record from its wire token.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::MalformedConstants`] if the token is not a
    /// JSON object.
    pub fn from_token(token: &str) -> ProtocolResult<Self> {
        let value: Value =
            serde_json::from_str(token).map_err(|err| ProtocolError::MalformedConstants {
                reason: err.to_string(),
            })?;
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(ProtocolError::MalformedConstants {
                reason: format!("expected a JSON object, got {other}"),
            }),
        }
    }

    /// Look up a raw constant by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Look up a constant and coerce it to an unsigned integer.
    #[must_use]
    pub fn get_u64(&self, key: &str) -> Option<u64> {
        self.get(key).and_then(Value::as_u64)
    }

    /// Number of turns the match will run ("MAX_TURNS").
    #[must_use]
    pub fn max_turns(&self) -> Option<u64> {
        self.get_u64("MAX_TURNS")
    }

    /// Halite capacity of a single ship ("MAX_ENERGY").
    #[must_use]
    pub fn max_halite(&self) -> Option<u64> {
        self.get_u64("MAX_ENERGY")
    }

    /// Cost of spawning a new ship ("NEW_ENTITY_ENERGY_COST").
    #[must_use]
    pub fn ship_cost(&self) -> Option<u64> {
        self.get_u64("NEW_ENTITY_ENERGY_COST")
    }

    /// Cost of converting a ship into a dropoff ("DROPOFF_COST").
    #[must_use]
    pub fn dropoff_cost(&self) -> Option<u64> {
        self.get_u64("DROPOFF_COST")
    }
}
