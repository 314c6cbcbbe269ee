//! Output formatting for war entities.
//!
//! Every command renders either as human-readable text or as pretty JSON of
//! the decoded entities.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use diveharder_lib::{
    Assignment, Campaign, Dispatch, Planet, SpaceStation, SteamNews, WarInfo,
};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Write `value` as pretty JSON followed by a newline.
///
/// Entity fields use their Rust names; embedded statistics keep the wire
/// (camelCase) names.
pub fn render_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::other)?;
    out.write_all(b"\n")
}

/// Percentage of `health` lost relative to `max_health`.
fn liberation(health: i64, max_health: i64) -> f64 {
    if max_health <= 0 {
        return 0.0;
    }
    (1.0 - health as f64 / max_health as f64) * 100.0
}

pub fn render_war<W: Write>(out: &mut W, war: &WarInfo) -> io::Result<()> {
    let factions: Vec<&str> = war.factions.iter().map(|f| f.name()).collect();
    writeln!(out, "War started {}, client {}", war.started, war.client_version)?;
    writeln!(out, "Factions: {}", factions.join(", "))?;
    writeln!(out, "Impact multiplier: {:.6}", war.impact_multiplier)?;
    writeln!(
        out,
        "Players online: {}  missions won/lost: {}/{}  success rate: {:.1}%",
        war.statistics.player_count,
        war.statistics.missions_won,
        war.statistics.missions_lost,
        war.statistics.mission_success_rate
    )
}

pub fn render_planet<W: Write>(out: &mut W, planet: &Planet) -> io::Result<()> {
    write!(
        out,
        "[{:>3}] {:<20} {:<12} owner: {:<10} liberation: {:>5.1}%",
        planet.index,
        planet.name,
        planet.sector,
        planet.current_owner,
        liberation(planet.health, planet.max_health)
    )?;
    if let Some(event) = &planet.event {
        write!(
            out,
            "  event: {} vs {} until {}",
            event.event_type, event.faction, event.end_time
        )?;
    }
    writeln!(out)
}

pub fn render_planets<W: Write>(out: &mut W, planets: &[Planet]) -> io::Result<()> {
    if planets.is_empty() {
        return writeln!(out, "No planets.");
    }
    for planet in planets {
        render_planet(out, planet)?;
    }
    Ok(())
}

pub fn render_campaigns<W: Write>(out: &mut W, campaigns: &[Campaign]) -> io::Result<()> {
    if campaigns.is_empty() {
        return writeln!(out, "No active campaigns.");
    }
    for campaign in campaigns {
        write!(out, "#{:<6} {:<10} x{:<3} ", campaign.id, campaign.kind, campaign.count)?;
        render_planet(out, &campaign.planet)?;
    }
    Ok(())
}

pub fn render_stations<W: Write>(out: &mut W, stations: &[SpaceStation]) -> io::Result<()> {
    if stations.is_empty() {
        return writeln!(out, "No space stations.");
    }
    for station in stations {
        writeln!(
            out,
            "Station {} over {} (election ends {}, flags {:#x})",
            station.id, station.planet.name, station.election_end, station.flags
        )?;
    }
    Ok(())
}

pub fn render_assignments<W: Write>(out: &mut W, assignments: &[Assignment]) -> io::Result<()> {
    if assignments.is_empty() {
        return writeln!(out, "No active assignments.");
    }
    for assignment in assignments {
        let status = if assignment.is_complete() { "complete" } else { "in progress" };
        writeln!(out, "{} [{}]", assignment, status)?;
        if let Some(description) = &assignment.description {
            writeln!(out, "  {}", description)?;
        }
        for (index, task) in assignment.tasks.iter().enumerate() {
            let progress = assignment.progress.get(index).copied().unwrap_or_default();
            let target = task
                .data
                .target_count
                .map_or_else(|| "?".to_string(), |count| count.to_string());
            write!(out, "  - {} {}/{}", task.task_type, progress, target)?;
            if let Some(planet) = &task.data.planet {
                write!(out, " on {}", planet.name)?;
            }
            if let Some(race) = task.data.race {
                write!(out, " against {}", race)?;
            }
            writeln!(out)?;
        }
        writeln!(
            out,
            "  reward: {} {}, expires {}",
            assignment.reward.amount, assignment.reward.reward_type, assignment.expiration
        )?;
    }
    Ok(())
}

pub fn render_dispatches<W: Write>(out: &mut W, dispatches: &[Dispatch]) -> io::Result<()> {
    for dispatch in dispatches {
        writeln!(out, "[{}] #{}", dispatch.published, dispatch.id)?;
        writeln!(out, "{}", dispatch.message.trim())?;
        writeln!(out)?;
    }
    Ok(())
}

pub fn render_news<W: Write>(out: &mut W, news: &[SteamNews]) -> io::Result<()> {
    for item in news {
        writeln!(out, "{} ({}, {})", item.title, item.author, item.published_at)?;
        writeln!(out, "  {}", item.url)?;
    }
    Ok(())
}
