use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::decode::{FromWire, WireObject};
use crate::enums::CampaignKind;
use crate::error::Result;

use super::Planet;

/// An active front. The planet is embedded in full, not referenced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Campaign {
    pub id: i64,
    pub planet: Planet,
    pub kind: CampaignKind,
    pub count: i64,
}

impl FromWire for Campaign {
    const ENTITY: &'static str = "Campaign";

    fn from_wire(value: &Value) -> Result<Self> {
        let obj = WireObject::new(Self::ENTITY, value)?;
        Ok(Self {
            id: obj.required("id")?,
            planet: obj.nested("planet")?,
            kind: CampaignKind::from_code(obj.required("type")?),
            count: obj.required("count")?,
        })
    }
}

/// A space station orbiting a planet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpaceStation {
    pub id: i64,
    pub planet: Planet,
    pub election_end: DateTime<Utc>,
    /// Raw status bitfield.
    pub flags: i64,
}

impl FromWire for SpaceStation {
    const ENTITY: &'static str = "SpaceStation";

    fn from_wire(value: &Value) -> Result<Self> {
        let obj = WireObject::new(Self::ENTITY, value)?;
        Ok(Self {
            id: obj.required("id32")?,
            planet: obj.nested("planet")?,
            election_end: obj.timestamp("electionEnd")?,
            flags: obj.required("flags")?,
        })
    }
}
