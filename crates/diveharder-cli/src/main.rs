use std::io::{self, Write};

use anyhow::{bail, Context as _, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use diveharder_cli::output::{self, OutputFormat};
use diveharder_lib::{ClientConfig, Context, Identification, PlanetIndex};

#[derive(Parser, Debug)]
#[command(author, version, about = "Helldivers 2 war status from the command line")]
struct Cli {
    /// User-Agent sent with every request.
    #[arg(long, env = "DIVEHARDER_USER_AGENT", default_value = concat!("diveharder-cli/", env!("CARGO_PKG_VERSION")))]
    user_agent: String,

    /// Contact address sent to the API operators.
    #[arg(long, env = "DIVEHARDER_CONTACT")]
    contact: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the war summary and galaxy statistics.
    War,
    /// List every planet.
    Planets,
    /// Show a single planet by index.
    Planet {
        /// Planet index.
        index: PlanetIndex,
    },
    /// List planets with an active event.
    Events,
    /// List active campaigns.
    Campaigns,
    /// List space stations.
    Stations,
    /// List current assignments (major orders).
    Assignments,
    /// List recent dispatches.
    Dispatches,
    /// List Steam news items.
    News,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let config = ClientConfig::new(Identification::new(&cli.user_agent, &cli.contact));
    let ctx = Context::new(config).context("failed to configure the API client")?;
    let mut stdout = io::stdout().lock();
    run(&ctx, cli.command, cli.format, &mut stdout)
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to install tracing subscriber")
}

fn run<W: Write>(ctx: &Context, command: Command, format: OutputFormat, out: &mut W) -> Result<()> {
    match command {
        Command::War => {
            let war = ctx.war().info().context("failed to fetch war status")?;
            emit(out, format, &war, |out, war| output::render_war(out, war))
        }
        Command::Planets => {
            let planets = ctx.planets().list().context("failed to fetch planets")?;
            emit(out, format, &planets, |out, planets| output::render_planets(out, planets))
        }
        Command::Planet { index } => {
            let Some(planet) = ctx
                .planets()
                .get(index)
                .with_context(|| format!("failed to fetch planet {index}"))?
            else {
                bail!("no planet with index {index}");
            };
            emit(out, format, &planet, |out, planet| output::render_planet(out, planet))
        }
        Command::Events => {
            let planets = ctx
                .planets()
                .with_events()
                .context("failed to fetch planet events")?;
            emit(out, format, &planets, |out, planets| output::render_planets(out, planets))
        }
        Command::Campaigns => {
            let campaigns = ctx.campaigns().list().context("failed to fetch campaigns")?;
            emit(out, format, &campaigns, |out, campaigns| {
                output::render_campaigns(out, campaigns)
            })
        }
        Command::Stations => {
            let stations = ctx
                .space_stations()
                .list()
                .context("failed to fetch space stations")?;
            emit(out, format, &stations, |out, stations| output::render_stations(out, stations))
        }
        Command::Assignments => {
            // Task planet references resolve against the snapshot.
            ctx.planets().list().context("failed to fetch planets")?;
            let assignments = ctx
                .assignments()
                .list()
                .context("failed to fetch assignments")?;
            emit(out, format, &assignments, |out, assignments| {
                output::render_assignments(out, assignments)
            })
        }
        Command::Dispatches => {
            let dispatches = ctx.dispatches().list().context("failed to fetch dispatches")?;
            emit(out, format, &dispatches, |out, dispatches| {
                output::render_dispatches(out, dispatches)
            })
        }
        Command::News => {
            let news = ctx.news().list().context("failed to fetch news")?;
            emit(out, format, &news, |out, news| output::render_news(out, news))
        }
    }
}

fn emit<W, T, F>(out: &mut W, format: OutputFormat, value: &T, text: F) -> Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
    F: FnOnce(&mut W, &T) -> io::Result<()>,
{
    match format {
        OutputFormat::Text => text(out, value),
        OutputFormat::Json => output::render_json(out, value),
    }
    .context("failed to write output")
}
