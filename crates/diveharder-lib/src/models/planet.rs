use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::context::Context;
use crate::decode::{deserialize, FromWire, WireObject};
use crate::enums::{EventType, Faction};
use crate::error::Result;

use super::Statistics;

/// Positional index of a planet; the primary key of the planet family.
pub type PlanetIndex = i64;

/// Galactic map coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl FromWire for Position {
    const ENTITY: &'static str = "Position";

    fn from_wire(value: &Value) -> Result<Self> {
        deserialize(Self::ENTITY, value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Biome {
    pub name: String,
    pub description: String,
}

impl FromWire for Biome {
    const ENTITY: &'static str = "Biome";

    fn from_wire(value: &Value) -> Result<Self> {
        deserialize(Self::ENTITY, value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanetaryHazard {
    pub name: String,
    pub description: String,
}

impl FromWire for PlanetaryHazard {
    const ENTITY: &'static str = "PlanetaryHazard";

    fn from_wire(value: &Value) -> Result<Self> {
        deserialize(Self::ENTITY, value)
    }
}

/// An event (typically a defense) running on a planet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanetEvent {
    pub id: i64,
    pub event_type: EventType,
    pub faction: Faction,
    pub health: i64,
    pub max_health: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub campaign_id: i64,
    pub joint_operation_ids: Vec<i64>,
}

impl PlanetEvent {
    /// Resolve the planet this event concerns.
    ///
    /// This is a weak relation: the planet is looked up by the event's
    /// campaign id, and any lookup failure yields `None` instead of an error.
    pub fn planet(&self, ctx: &Context) -> Option<Planet> {
        match ctx.planets().get(self.campaign_id) {
            Ok(planet) => planet,
            Err(err) => {
                warn!(
                    event = self.id,
                    campaign = self.campaign_id,
                    error = %err,
                    "could not resolve planet for event"
                );
                None
            }
        }
    }

    /// [`PlanetEvent::planet`] through the shared context.
    ///
    /// Fails with [`crate::Error::ContextNotInitialized`] when no shared
    /// context exists.
    pub fn planet_shared(&self) -> Result<Option<Planet>> {
        let ctx = Context::require()?;
        Ok(self.planet(&ctx))
    }
}

impl FromWire for PlanetEvent {
    const ENTITY: &'static str = "PlanetEvent";

    fn from_wire(value: &Value) -> Result<Self> {
        let obj = WireObject::new(Self::ENTITY, value)?;
        Ok(Self {
            id: obj.required("id")?,
            event_type: EventType::from_code(obj.required("eventType")?),
            faction: obj.faction("faction")?,
            health: obj.required("health")?,
            max_health: obj.required("maxHealth")?,
            start_time: obj.timestamp("startTime")?,
            end_time: obj.timestamp("endTime")?,
            campaign_id: obj.required("campaignId")?,
            joint_operation_ids: obj.required("jointOperationIds")?,
        })
    }
}

/// A planet in the galactic war.
///
/// Equality is structural: two decodes of the same planet compare equal when
/// every field matches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Planet {
    pub index: PlanetIndex,
    pub name: String,
    pub sector: String,
    pub biome: Biome,
    pub hazards: Vec<PlanetaryHazard>,
    pub hash: u64,
    pub position: Position,
    pub waypoints: Vec<PlanetIndex>,
    pub max_health: i64,
    pub health: i64,
    pub disabled: bool,
    pub initial_owner: Faction,
    pub current_owner: Faction,
    pub regen_per_second: f64,
    pub event: Option<PlanetEvent>,
    pub statistics: Statistics,
    pub attacking: Vec<PlanetIndex>,
}

impl Planet {
    /// Whether any space station currently orbits this planet.
    ///
    /// Fetches the full space station list on every call.
    pub fn has_space_station(&self, ctx: &Context) -> Result<bool> {
        let stations = ctx.space_stations().list()?;
        Ok(stations
            .iter()
            .any(|station| station.planet.index == self.index))
    }

    /// [`Planet::has_space_station`] through the shared context.
    pub fn has_space_station_shared(&self) -> Result<bool> {
        let ctx = Context::require()?;
        self.has_space_station(&ctx)
    }
}

impl FromWire for Planet {
    const ENTITY: &'static str = "Planet";

    fn from_wire(value: &Value) -> Result<Self> {
        let obj = WireObject::new(Self::ENTITY, value)?;
        let event = obj
            .optional_value("event")
            .map(PlanetEvent::from_wire)
            .transpose()?;

        Ok(Self {
            index: obj.required("index")?,
            name: obj.required("name")?,
            sector: obj.required("sector")?,
            biome: obj.nested("biome")?,
            hazards: obj.nested_list("hazards")?,
            hash: obj.required("hash")?,
            position: obj.nested("position")?,
            waypoints: obj.required("waypoints")?,
            max_health: obj.required("maxHealth")?,
            health: obj.required("health")?,
            disabled: obj.required("disabled")?,
            initial_owner: obj.faction("initialOwner")?,
            current_owner: obj.faction("currentOwner")?,
            regen_per_second: obj.required("regenPerSecond")?,
            event,
            statistics: obj.nested("statistics")?,
            attacking: obj.required("attacking")?,
        })
    }
}
