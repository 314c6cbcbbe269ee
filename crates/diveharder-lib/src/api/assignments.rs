use tracing::debug;

use crate::context::Context;
use crate::error::Result;
use crate::models::Assignment;

use super::path;

/// Assignment (major order) resolver.
///
/// Decoding resolves every planet a task references; warm the planet
/// snapshot with `ctx.planets().list()` first to avoid one request per
/// reference.
#[derive(Debug, Clone, Copy)]
pub struct Assignments<'a> {
    ctx: &'a Context,
}

impl<'a> Assignments<'a> {
    pub(crate) fn new(ctx: &'a Context) -> Self {
        Self { ctx }
    }

    pub fn list(&self) -> Result<Vec<Assignment>> {
        let raw = self.ctx.fetch(&path("assignments", None))?;
        let assignments = Assignment::decode_list(&raw, self.ctx)?;
        debug!(count = assignments.len(), "decoded assignments");
        Ok(assignments)
    }

    pub fn get(&self, id: i64) -> Result<Option<Assignment>> {
        let id = id.to_string();
        self.ctx
            .fetch_optional(&path("assignments", Some(id.as_str())))?
            .map(|raw| Assignment::decode(&raw, self.ctx))
            .transpose()
    }
}
