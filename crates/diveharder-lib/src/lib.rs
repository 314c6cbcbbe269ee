//! Diveharder library entry points.
//!
//! A typed client-side data layer over the Helldivers 2 war API. Wire
//! payloads reference planets, campaigns and stations by integer index; this
//! crate decodes them into typed entities and resolves those references on
//! demand through a [`Context`].
//!
//! ```no_run
//! use diveharder_lib::{ClientConfig, Context, Identification};
//!
//! # fn main() -> diveharder_lib::Result<()> {
//! let ctx = Context::new(ClientConfig::new(Identification::new(
//!     "war-table/0.1",
//!     "ops@example.com",
//! )))?;
//! // Warm the planet snapshot so task planet references resolve locally.
//! ctx.planets().list()?;
//! for assignment in ctx.assignments().list()? {
//!     println!("{assignment} complete={}", assignment.is_complete());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod context;
pub mod decode;
pub mod enums;
pub mod error;
pub mod models;
pub mod task_data;
pub mod transport;

pub use config::{ApiHost, ApiUrls, ClientConfig, Identification, RetryPolicy};
pub use context::Context;
pub use decode::FromWire;
pub use enums::{
    AssignmentType, CampaignKind, DispatchKind, EventType, Faction, RewardType, ValueType,
};
pub use error::{Error, Result};
pub use models::{
    Assignment, AssignmentReward, AssignmentTask, Biome, Campaign, Dispatch, Planet,
    PlanetEvent, PlanetIndex, PlanetaryHazard, Position, SpaceStation, Statistics, SteamNews,
    WarInfo,
};
pub use task_data::{AssignmentTaskData, TaskValue};
pub use transport::{HttpTransport, Transport};
