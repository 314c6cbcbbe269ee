use tracing::debug;

use crate::context::Context;
use crate::decode::FromWire;
use crate::error::Result;
use crate::models::{Dispatch, SteamNews, WarInfo};

use super::path;

/// War status resolver.
#[derive(Debug, Clone, Copy)]
pub struct War<'a> {
    ctx: &'a Context,
}

impl<'a> War<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }

    /// Current war snapshot. Never cached.
    pub fn info(&self) -> Result<WarInfo> {
        let raw = self.ctx.fetch(&path("war", None))?;
        WarInfo::from_wire(&raw)
    }
}

/// In-game dispatch resolver.
#[derive(Debug, Clone, Copy)]
pub struct Dispatches<'a> {
    ctx: &'a Context,
}

impl<'a> Dispatches<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }

    pub fn list(&self) -> Result<Vec<Dispatch>> {
        let raw = self.ctx.fetch(&path("dispatches", None))?;
        let dispatches = Dispatch::list_from_wire(&raw)?;
        debug!(count = dispatches.len(), "decoded dispatches");
        Ok(dispatches)
    }

    pub fn get(&self, id: i64) -> Result<Option<Dispatch>> {
        let id = id.to_string();
        self.ctx
            .fetch_optional(&path("dispatches", Some(id.as_str())))?
            .map(|raw| Dispatch::from_wire(&raw))
            .transpose()
    }
}

/// Steam news resolver.
#[derive(Debug, Clone, Copy)]
pub struct News<'a> {
    ctx: &'a Context,
}

impl<'a> News<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }

    pub fn list(&self) -> Result<Vec<SteamNews>> {
        let raw = self.ctx.fetch(&path("steam-news", None))?;
        SteamNews::list_from_wire(&raw)
    }
}
