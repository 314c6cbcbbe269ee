//! The resolution context: transport plus per-family resolver state.
//!
//! A [`Context`] is an ordinary value. Construct one with [`Context::new`] (or
//! [`Context::with_transport`] in tests) and pass it wherever entities need
//! to reach each other. For code that cannot thread a context through, a
//! process-wide instance is available via [`Context::initialize`] and
//! [`Context::current`].
//!
//! # Concurrency
//!
//! `Context` is `Send + Sync`, but calls are blocking and uncoordinated: two
//! threads asking for the same uncached planet will both hit the network, and
//! a `list()` on one thread replaces the snapshot another thread may be about
//! to read. Callers that need a consistent view should serialize access or use
//! independent contexts.

use std::fmt;
use std::sync::Arc;

use once_cell::sync::OnceCell;
use serde_json::Value;
use tracing::{debug, warn};

use crate::api::{
    Assignments, Campaigns, Dispatches, News, Planets, Snapshot, SpaceStations, War,
};
use crate::config::{ApiHost, ClientConfig};
use crate::error::{Error, Result};
use crate::models::{Campaign, Planet};
use crate::transport::{HttpTransport, Transport};

static SHARED: OnceCell<Arc<Context>> = OnceCell::new();

/// Shared resolution state for one API client.
pub struct Context {
    transport: Arc<dyn Transport>,
    config: Option<ClientConfig>,
    pub(crate) planet_snapshot: Snapshot<Planet>,
    pub(crate) campaign_snapshot: Snapshot<Campaign>,
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Context {
    /// Build a context backed by an HTTP transport.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        let mut ctx = Self::with_transport(Arc::new(transport));
        ctx.config = Some(config);
        Ok(ctx)
    }

    /// Build a context over any transport.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            transport,
            config: None,
            planet_snapshot: Snapshot::default(),
            campaign_snapshot: Snapshot::default(),
        }
    }

    /// Get or create the process-wide context.
    ///
    /// The first call builds the context from `config`. Every later call
    /// returns that same instance and **ignores its argument**, even when it
    /// differs; a warning is logged in that case. There is no teardown: the
    /// instance and its connection pool live for the rest of the process.
    pub fn initialize(config: ClientConfig) -> Result<Arc<Self>> {
        let mut created = false;
        let ctx = SHARED.get_or_try_init(|| {
            created = true;
            Context::new(config.clone()).map(Arc::new)
        })?;
        if !created && ctx.config.as_ref() != Some(&config) {
            warn!("shared context already initialized; ignoring different configuration");
        }
        Ok(Arc::clone(ctx))
    }

    /// Get or create the process-wide context over a custom transport.
    ///
    /// Same argument-ignoring semantics as [`Context::initialize`].
    pub fn initialize_with_transport(transport: Arc<dyn Transport>) -> Arc<Self> {
        let mut created = false;
        let ctx = SHARED.get_or_init(|| {
            created = true;
            Arc::new(Context::with_transport(transport))
        });
        if !created {
            warn!("shared context already initialized; ignoring supplied transport");
        }
        Arc::clone(ctx)
    }

    /// The process-wide context, if one was initialized.
    pub fn current() -> Option<Arc<Self>> {
        SHARED.get().cloned()
    }

    /// The process-wide context, or [`Error::ContextNotInitialized`].
    pub fn require() -> Result<Arc<Self>> {
        Self::current().ok_or(Error::ContextNotInitialized)
    }

    /// Configuration this context was built from; `None` for custom transports.
    pub fn config(&self) -> Option<&ClientConfig> {
        self.config.as_ref()
    }

    pub fn war(&self) -> War<'_> {
        War::new(self)
    }

    pub fn dispatches(&self) -> Dispatches<'_> {
        Dispatches::new(self)
    }

    pub fn news(&self) -> News<'_> {
        News::new(self)
    }

    pub fn assignments(&self) -> Assignments<'_> {
        Assignments::new(self)
    }

    pub fn planets(&self) -> Planets<'_> {
        Planets::new(self)
    }

    pub fn campaigns(&self) -> Campaigns<'_> {
        Campaigns::new(self)
    }

    pub fn space_stations(&self) -> SpaceStations<'_> {
        SpaceStations::new(self)
    }

    /// GET a path on the community host.
    pub(crate) fn fetch(&self, segments: &[&str]) -> Result<Value> {
        self.transport.get(ApiHost::Community, segments)
    }

    /// GET a single entity; 404 and an empty or `null` body mean absent.
    pub(crate) fn fetch_optional(&self, segments: &[&str]) -> Result<Option<Value>> {
        match self.fetch(segments) {
            Ok(Value::Null) => Ok(None),
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_not_found() => {
                debug!(path = %segments.join("/"), "entity not found");
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}
