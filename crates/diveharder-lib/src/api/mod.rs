//! Per-family resolvers.
//!
//! Each resolver is a cheap view borrowed from a [`Context`]; obtain one via
//! `ctx.planets()`, `ctx.campaigns()` and so on. Paths are relative to the
//! community host.

mod assignments;
mod campaigns;
mod planets;
mod space_stations;
mod war;

use std::sync::{Mutex, PoisonError};

pub use assignments::Assignments;
pub use campaigns::Campaigns;
pub use planets::Planets;
pub use space_stations::SpaceStations;
pub use war::{Dispatches, News, War};

const API_PREFIX: [&str; 2] = ["api", "v1"];

/// Build the segment list `api/v1/<family>[/<id>]`.
fn path<'a>(family: &'a str, id: Option<&'a str>) -> Vec<&'a str> {
    let mut segments: Vec<&'a str> = API_PREFIX.to_vec();
    segments.push(family);
    segments.extend(id);
    segments
}

/// Most recent full-list result of one family, used to answer keyed lookups
/// without another request.
///
/// The snapshot is replaced wholesale by the next `list()` call and is never
/// invalidated otherwise, so its staleness is unbounded.
#[derive(Debug)]
pub(crate) struct Snapshot<T> {
    items: Mutex<Option<Vec<T>>>,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            items: Mutex::new(None),
        }
    }
}

impl<T: Clone> Snapshot<T> {
    pub(crate) fn replace(&self, items: &[T]) {
        let mut guard = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(items.to_vec());
    }

    pub(crate) fn find<P>(&self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let guard = self.items.lock().unwrap_or_else(PoisonError::into_inner);
        guard
            .as_ref()
            .and_then(|items| items.iter().find(|item| predicate(item)).cloned())
    }
}
