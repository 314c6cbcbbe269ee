mod common;

use common::{fixture, ScriptedTransport};
use diveharder_lib::{Faction, FromWire, Planet, PlanetEvent};
use serde_json::json;

const PLANETS: &str = "api/v1/planets";

fn transport() -> ScriptedTransport {
    ScriptedTransport::new()
        .route_fixture(PLANETS, "planets.json")
        .route_fixture("api/v1/planets/64", "planet_64.json")
        .route_fixture("api/v1/planets/126", "planet_126.json")
        .route_fixture("api/v1/planet-events", "planet_events.json")
        .route_fixture("api/v1/campaigns", "campaigns.json")
        .route_fixture("api/v1/space-stations", "space_stations.json")
        .route_fixture("api/v1/war", "war.json")
        .route_fixture("api/v1/dispatches", "dispatches.json")
        .route("api/v1/dispatches/2794", fixture("dispatches.json")[0].clone())
        .route_fixture("api/v1/steam-news", "steam_news.json")
}

#[test]
fn cached_get_after_list_issues_no_request() {
    let (transport, ctx) = transport().into_context();
    let planets = ctx.planets().list().expect("list");
    assert_eq!(planets.len(), 4);

    let creek = ctx.planets().get_cached(126).expect("lookup").expect("present");
    assert_eq!(creek.name, "Malevelon Creek");
    assert_eq!(transport.requests(), vec![PLANETS]);
}

#[test]
fn cached_get_before_list_fetches_single_entity() {
    let (transport, ctx) = transport().into_context();
    let creek = ctx.planets().get_cached(126).expect("lookup").expect("present");
    assert_eq!(creek.index, 126);
    assert_eq!(transport.requests(), vec!["api/v1/planets/126"]);
}

#[test]
fn cached_get_falls_back_when_key_not_in_snapshot() {
    let (transport, ctx) = transport().into_context();
    ctx.planets().list().expect("list");
    assert!(ctx.planets().get_cached(9999).expect("lookup").is_none());
    assert_eq!(transport.requests(), vec![PLANETS, "api/v1/planets/9999"]);
}

#[test]
fn uncached_get_always_fetches() {
    let (transport, ctx) = transport().into_context();
    ctx.planets().list().expect("list");
    ctx.planets().get(126).expect("lookup").expect("present");
    assert_eq!(transport.count("api/v1/planets/126"), 1);
}

#[test]
fn snapshot_is_not_shared_between_contexts() {
    let (_, warm) = transport().into_context();
    warm.planets().list().expect("list");

    let (cold_transport, cold) = transport().into_context();
    cold.planets().get_cached(126).expect("lookup");
    assert_eq!(cold_transport.requests(), vec!["api/v1/planets/126"]);
}

#[test]
fn planets_with_events() {
    let (_, ctx) = transport().into_context();
    let planets = ctx.planets().with_events().expect("planet events");
    assert_eq!(planets.len(), 1);
    assert!(planets[0].event.is_some());
}

#[test]
fn campaigns_list_and_cached_lookup() {
    let (transport, ctx) = transport().into_context();
    let campaigns = ctx.campaigns().list().expect("list");
    assert_eq!(campaigns.len(), 2);

    let campaign = ctx.campaigns().get_cached(49002).expect("lookup").expect("present");
    assert_eq!(campaign.planet.name, "Hellmire");
    assert!(ctx.campaigns().get(1).expect("lookup").is_none());
    assert_eq!(
        transport.requests(),
        vec!["api/v1/campaigns", "api/v1/campaigns/1"]
    );
}

#[test]
fn war_dispatches_and_news() {
    let (_, ctx) = transport().into_context();
    let war = ctx.war().info().expect("war");
    assert!(war.factions.contains(&Faction::Automaton));

    assert_eq!(ctx.dispatches().list().expect("dispatches").len(), 2);
    let dispatch = ctx.dispatches().get(2794).expect("lookup").expect("present");
    assert!(dispatch.message.contains("Malevelon Creek"));
    assert!(ctx.dispatches().get(1).expect("lookup").is_none());

    assert_eq!(ctx.news().list().expect("news").len(), 1);
}

#[test]
fn null_body_is_absence() {
    let (_, ctx) = ScriptedTransport::new()
        .route("api/v1/space-stations/5", json!(null))
        .into_context();
    assert!(ctx.space_stations().get(5).expect("lookup").is_none());
}

#[test]
fn space_station_lookup_by_id() {
    let (_, ctx) = ScriptedTransport::new()
        .route(
            "api/v1/space-stations/749875195",
            fixture("space_stations.json")[0].clone(),
        )
        .into_context();
    let station = ctx
        .space_stations()
        .get(749_875_195)
        .expect("lookup")
        .expect("present");
    assert_eq!(station.planet.name, "Meridia");
}

#[test]
fn has_space_station_matches_station_planet_index() {
    let (transport, ctx) = transport().into_context();
    let planets = ctx.planets().list().expect("list");

    let meridia = planets.iter().find(|p| p.index == 64).expect("Meridia");
    let creek = planets.iter().find(|p| p.index == 126).expect("Creek");
    assert!(meridia.has_space_station(&ctx).expect("stations"));
    assert!(!creek.has_space_station(&ctx).expect("stations"));
    assert_eq!(transport.count("api/v1/space-stations"), 2);
}

#[test]
fn has_space_station_propagates_transport_errors() {
    let (_, ctx) = ScriptedTransport::new()
        .fail("api/v1/space-stations")
        .into_context();
    let planet = Planet::from_wire(&fixture("planet_126.json")).expect("decodes");
    assert!(planet
        .has_space_station(&ctx)
        .expect_err("hard relation")
        .is_transport());
}

#[test]
fn event_planet_is_looked_up_by_campaign_id() {
    let (transport, ctx) = transport().into_context();
    let meridia = Planet::from_wire(&fixture("planet_64.json")).expect("decodes");
    let event = meridia.event.expect("event present");

    let planet = event.planet(&ctx).expect("resolves");
    assert_eq!(planet, decode_meridia());
    assert_eq!(transport.requests(), vec!["api/v1/planets/64"]);
}

fn decode_meridia() -> Planet {
    Planet::from_wire(&fixture("planet_64.json")).expect("decodes")
}

#[test]
fn event_planet_is_weak() {
    let mut raw = fixture("planet_64.json")["event"].clone();
    raw["campaignId"] = json!(31337);
    let event = PlanetEvent::from_wire(&raw).expect("decodes");

    let (_, ctx) = transport().into_context();
    assert!(event.planet(&ctx).is_none(), "404 resolves to absence");

    let (_, failing) = ScriptedTransport::new()
        .fail("api/v1/planets/31337")
        .into_context();
    assert!(event.planet(&failing).is_none(), "transport failure resolves to absence");
}
