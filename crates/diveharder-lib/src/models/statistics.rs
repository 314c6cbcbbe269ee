use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::decode::{deserialize, FromWire};
use crate::error::Result;

/// War- or planet-scoped mission counters.
///
/// Serializes back to the wire (lowerCamelCase) field names, including when
/// embedded in an otherwise snake_case entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub missions_won: u64,
    pub missions_lost: u64,
    pub mission_time: u64,
    pub terminid_kills: u64,
    pub automaton_kills: u64,
    pub illuminate_kills: u64,
    pub bullets_fired: u64,
    pub bullets_hit: u64,
    pub time_played: u64,
    pub deaths: u64,
    pub revives: u64,
    pub friendlies: u64,
    pub mission_success_rate: f64,
    pub accuracy: u64,
    pub player_count: u64,
}

impl FromWire for Statistics {
    const ENTITY: &'static str = "Statistics";

    fn from_wire(value: &Value) -> Result<Self> {
        deserialize(Self::ENTITY, value)
    }
}
