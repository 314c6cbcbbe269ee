use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::decode::{FromWire, WireObject};
use crate::enums::{DispatchKind, Faction};
use crate::error::Result;

use super::Statistics;

/// Snapshot of the current war.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarInfo {
    pub started: DateTime<Utc>,
    pub ended: DateTime<Utc>,
    pub now: DateTime<Utc>,
    pub client_version: String,
    pub factions: BTreeSet<Faction>,
    pub impact_multiplier: f64,
    pub statistics: Statistics,
}

impl FromWire for WarInfo {
    const ENTITY: &'static str = "WarInfo";

    fn from_wire(value: &Value) -> Result<Self> {
        let obj = WireObject::new(Self::ENTITY, value)?;
        let factions = obj
            .value("factions")?
            .as_array()
            .ok_or_else(|| obj.error("factions", "expected array"))?
            .iter()
            .map(|raw| {
                Faction::from_wire(raw)
                    .ok_or_else(|| obj.error("factions", "expected faction name or code"))
            })
            .collect::<Result<BTreeSet<_>>>()?;

        Ok(Self {
            started: obj.timestamp("started")?,
            ended: obj.timestamp("ended")?,
            now: obj.timestamp("now")?,
            client_version: obj.required("clientVersion")?,
            factions,
            impact_multiplier: obj.required("impactMultiplier")?,
            statistics: obj.nested("statistics")?,
        })
    }
}

/// In-game news message.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dispatch {
    pub id: i64,
    pub published: DateTime<Utc>,
    pub kind: DispatchKind,
    pub message: String,
}

impl FromWire for Dispatch {
    const ENTITY: &'static str = "Dispatch";

    fn from_wire(value: &Value) -> Result<Self> {
        let obj = WireObject::new(Self::ENTITY, value)?;
        Ok(Self {
            id: obj.required("id")?,
            published: obj.timestamp("published")?,
            kind: DispatchKind::from_code(obj.required("type")?),
            message: obj.required("message")?,
        })
    }
}

/// Patch notes and announcements mirrored from Steam.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SteamNews {
    pub id: String,
    pub title: String,
    pub url: String,
    pub author: String,
    pub content: String,
    pub published_at: DateTime<Utc>,
}

impl FromWire for SteamNews {
    const ENTITY: &'static str = "SteamNews";

    fn from_wire(value: &Value) -> Result<Self> {
        let obj = WireObject::new(Self::ENTITY, value)?;
        Ok(Self {
            id: obj.required("id")?,
            title: obj.required("title")?,
            url: obj.required("url")?,
            author: obj.required("author")?,
            content: obj.required("content")?,
            published_at: obj.timestamp("publishedAt")?,
        })
    }
}
