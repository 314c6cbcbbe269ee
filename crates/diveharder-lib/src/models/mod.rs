//! Typed entities decoded from wire payloads.
//!
//! All entities are plain values created fresh on every decode. Relations
//! that the wire expresses as integer references are resolved through
//! accessor methods taking a [`crate::Context`].

mod assignment;
mod campaign;
mod planet;
mod statistics;
mod war;

pub use assignment::{Assignment, AssignmentReward, AssignmentTask};
pub use campaign::{Campaign, SpaceStation};
pub use planet::{Biome, Planet, PlanetEvent, PlanetIndex, PlanetaryHazard, Position};
pub use statistics::Statistics;
pub use war::{Dispatch, SteamNews, WarInfo};
