use crate::context::Context;
use crate::decode::FromWire;
use crate::error::Result;
use crate::models::SpaceStation;

use super::path;

#[derive(Debug, Clone, Copy)]
pub struct SpaceStations<'a> {
    ctx: &'a Context,
}

impl<'a> SpaceStations<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }

    pub fn list(&self) -> Result<Vec<SpaceStation>> {
        let raw = self.ctx.fetch(&path("space-stations", None))?;
        SpaceStation::list_from_wire(&raw)
    }

    pub fn get(&self, id: i64) -> Result<Option<SpaceStation>> {
        let id = id.to_string();
        self.ctx
            .fetch_optional(&path("space-stations", Some(id.as_str())))?
            .map(|raw| SpaceStation::from_wire(&raw))
            .transpose()
    }
}
