use tracing::debug;

use crate::context::Context;
use crate::decode::FromWire;
use crate::error::Result;
use crate::models::{Planet, PlanetIndex};

use super::path;

/// Planet resolver. Keeps a snapshot of the last [`Planets::list`] result
/// for [`Planets::get_cached`].
#[derive(Debug, Clone, Copy)]
pub struct Planets<'a> {
    ctx: &'a Context,
}

impl<'a> Planets<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }

    /// Fetch every planet and replace the snapshot with the result.
    pub fn list(&self) -> Result<Vec<Planet>> {
        let raw = self.ctx.fetch(&path("planets", None))?;
        let planets = Planet::list_from_wire(&raw)?;
        self.ctx.planet_snapshot.replace(&planets);
        debug!(count = planets.len(), "refreshed planet snapshot");
        Ok(planets)
    }

    /// Fetch one planet by index. `None` when the server does not know it.
    pub fn get(&self, index: PlanetIndex) -> Result<Option<Planet>> {
        let index = index.to_string();
        self.ctx
            .fetch_optional(&path("planets", Some(index.as_str())))?
            .map(|raw| Planet::from_wire(&raw))
            .transpose()
    }

    /// Look `index` up in the last list snapshot, falling back to
    /// [`Planets::get`] when it is not there.
    pub fn get_cached(&self, index: PlanetIndex) -> Result<Option<Planet>> {
        if let Some(planet) = self
            .ctx
            .planet_snapshot
            .find(|planet| planet.index == index)
        {
            debug!(index, "planet served from snapshot");
            return Ok(Some(planet));
        }
        self.get(index)
    }

    /// Planets that currently carry an event.
    pub fn with_events(&self) -> Result<Vec<Planet>> {
        let raw = self.ctx.fetch(&path("planet-events", None))?;
        Planet::list_from_wire(&raw)
    }
}
