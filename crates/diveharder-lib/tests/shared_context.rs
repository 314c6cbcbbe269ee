//! Get-or-create semantics of the process-wide context.
//!
//! Kept to a single test so ordering within this binary is deterministic.

mod common;

use std::sync::Arc;

use common::{fixture, ScriptedTransport};
use diveharder_lib::{ApiUrls, Assignment, ClientConfig, Context, FromWire, Identification, Planet};

#[test]
fn first_initialization_wins() {
    assert!(Context::current().is_none());

    let transport = Arc::new(
        ScriptedTransport::new()
            .route_fixture("api/v1/planets/64", "planet_64.json")
            .route_fixture("api/v1/space-stations", "space_stations.json"),
    );
    let first = Context::initialize_with_transport(transport.clone());

    let ignored = Context::initialize(
        ClientConfig::new(Identification::new("other-agent/2.0", "other@example.com")).with_urls(
            ApiUrls {
                diveharder: "http://127.0.0.1:9".to_string(),
                community: "http://127.0.0.1:9".to_string(),
            },
        ),
    )
    .expect("returns the existing context");
    assert!(Arc::ptr_eq(&first, &ignored));
    assert!(ignored.config().is_none(), "later configuration is ignored");

    let current = Context::current().expect("initialized");
    assert!(Arc::ptr_eq(&first, &current));

    // Shared accessors now resolve through the scripted transport.
    let meridia = Planet::from_wire(&fixture("planet_64.json")).expect("decodes");
    let event = meridia.event.clone().expect("event present");
    let resolved = event.planet_shared().expect("context present");
    assert_eq!(resolved, Some(meridia.clone()));
    assert!(meridia.has_space_station_shared().expect("stations"));

    let assignment =
        Assignment::decode_shared(&fixture("assignments.json")[1]).expect("decodes");
    assert!(assignment.is_complete());

    assert_eq!(
        transport.requests(),
        vec!["api/v1/planets/64", "api/v1/space-stations"]
    );
}
