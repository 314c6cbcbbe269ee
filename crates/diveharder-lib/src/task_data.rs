//! Decoding of an assignment task's parallel `valueTypes` / `values` arrays.
//!
//! Each positional pair is first turned into one [`TaskValue`] variant, then
//! the variants are folded into the sparse [`AssignmentTaskData`] record.

use serde::Serialize;
use tracing::warn;

use crate::context::Context;
use crate::enums::{Faction, ValueType};
use crate::error::Result;
use crate::models::{Planet, PlanetIndex};

/// One decoded `(value_type, value)` pair.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskValue {
    /// Planet reference. `planet` is `None` when the index did not resolve.
    Planet {
        index: PlanetIndex,
        planet: Option<Box<Planet>>,
    },
    Race(Faction),
    TargetCount(i64),
    Liberate(bool),
    /// A pair whose type carries nothing this client models.
    Ignored { value_type: ValueType, value: i64 },
}

impl TaskValue {
    /// Decode one pair, resolving planet references through `ctx`.
    pub fn resolve(ctx: &Context, value_type: ValueType, value: i64) -> Result<Self> {
        Ok(match value_type {
            ValueType::Planet => TaskValue::Planet {
                index: value,
                planet: ctx.planets().get_cached(value)?.map(Box::new),
            },
            ValueType::Race => TaskValue::Race(Faction::from_code(value)),
            ValueType::TargetCount => TaskValue::TargetCount(value),
            ValueType::Liberate => TaskValue::Liberate(value != 0),
            other => TaskValue::Ignored {
                value_type: other,
                value,
            },
        })
    }
}

/// Sparse record of the values a task carries.
///
/// Only slots whose type appears in the task are populated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssignmentTaskData {
    pub liberate: Option<bool>,
    pub planet: Option<Planet>,
    pub target_count: Option<i64>,
    pub race: Option<Faction>,
}

impl AssignmentTaskData {
    /// Fold decoded pairs into the record. A slot targeted twice keeps the
    /// last value.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = TaskValue>,
    {
        let mut data = AssignmentTaskData::default();
        let mut planet_seen = false;
        for value in values {
            match value {
                TaskValue::Planet { index, planet } => {
                    warn_duplicate("planet", planet_seen);
                    planet_seen = true;
                    if planet.is_none() {
                        warn!(index, "task references a planet that could not be found");
                    }
                    data.planet = planet.map(|planet| *planet);
                }
                TaskValue::Race(race) => {
                    warn_duplicate("race", data.race.is_some());
                    data.race = Some(race);
                }
                TaskValue::TargetCount(count) => {
                    warn_duplicate("target_count", data.target_count.is_some());
                    data.target_count = Some(count);
                }
                TaskValue::Liberate(flag) => {
                    warn_duplicate("liberate", data.liberate.is_some());
                    data.liberate = Some(flag);
                }
                TaskValue::Ignored { .. } => {}
            }
        }
        data
    }
}

fn warn_duplicate(slot: &'static str, already_set: bool) {
    if already_set {
        warn!(slot, "task carries the same value type more than once; keeping the last");
    }
}

/// Resolve every pair of a task and build its data record.
///
/// The slices must have equal length; callers validate this while decoding.
pub fn resolve_task_data(
    ctx: &Context,
    value_types: &[ValueType],
    values: &[i64],
) -> Result<AssignmentTaskData> {
    let resolved = value_types
        .iter()
        .zip(values)
        .map(|(value_type, value)| TaskValue::resolve(ctx, *value_type, *value))
        .collect::<Result<Vec<_>>>()?;
    Ok(AssignmentTaskData::from_values(resolved))
}
