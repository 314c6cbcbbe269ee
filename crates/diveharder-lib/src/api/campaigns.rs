use tracing::debug;

use crate::context::Context;
use crate::decode::FromWire;
use crate::error::Result;
use crate::models::Campaign;

use super::path;

/// Campaign resolver with the same snapshot behaviour as planets.
#[derive(Debug, Clone, Copy)]
pub struct Campaigns<'a> {
    ctx: &'a Context,
}

impl<'a> Campaigns<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }

    /// All active campaigns. Replaces the campaign snapshot.
    pub fn list(&self) -> Result<Vec<Campaign>> {
        let raw = self.ctx.fetch(&path("campaigns", None))?;
        let campaigns = Campaign::list_from_wire(&raw)?;
        self.ctx.campaign_snapshot.replace(&campaigns);
        Ok(campaigns)
    }

    pub fn get(&self, id: i64) -> Result<Option<Campaign>> {
        let id = id.to_string();
        self.ctx
            .fetch_optional(&path("campaigns", Some(id.as_str())))?
            .map(|raw| Campaign::from_wire(&raw))
            .transpose()
    }

    pub fn get_cached(&self, id: i64) -> Result<Option<Campaign>> {
        if let Some(campaign) = self.ctx.campaign_snapshot.find(|campaign| campaign.id == id) {
            debug!(id, "campaign served from snapshot");
            return Ok(Some(campaign));
        }
        self.get(id)
    }
}
