//! Wealth Rock-Paper-Scissors
//!
//! Terminal animation of a fixed population gambling one unit of wealth per
//! game. Watch inequality grow, and optionally watch the have-nots revolt.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use wealth_core::output::{JsonRenderer, Renderer, TerminalRenderer};
use wealth_core::{
    default_config_toml, seeded_choices, Config, DebtFloor, SimError, Simulation, ThreadClock,
};

/// How frames are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum RendererKind {
    /// Full-screen ANSI table
    Terminal,
    /// One JSON object per frame on stdout
    Json,
}

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "wealth_rps")]
#[command(about = "Rock-paper-scissors wealth inequality simulation")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Starting wealth of every player
    #[arg(long)]
    initial_wealth: Option<i64>,

    /// Debt floor (0 or negative)
    #[arg(long, allow_hyphen_values = true, conflicts_with = "unlimited_debt")]
    debt_threshold: Option<i64>,

    /// Let players go arbitrarily deep into debt
    #[arg(long)]
    unlimited_debt: bool,

    /// Gini coefficient at which the have-nots revolt
    #[arg(long)]
    gini_threshold: Option<f64>,

    /// Stop after this many rounds
    #[arg(long)]
    ticks: Option<u64>,

    /// Milliseconds between rounds
    #[arg(long)]
    frame_ms: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = RendererKind::Terminal)]
    renderer: RendererKind,

    /// Print the default configuration file and exit
    #[arg(long)]
    print_default_config: bool,
}

impl Args {
    /// Loads the config file (if any) and layers the flags on top.
    fn build_config(&self) -> Result<Config, SimError> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };

        if let Some(initial_wealth) = self.initial_wealth {
            config.economy.initial_wealth = initial_wealth;
        }
        if self.unlimited_debt {
            config.economy.debt_threshold = DebtFloor::Unlimited;
        } else if let Some(limit) = self.debt_threshold {
            config.economy.debt_threshold = DebtFloor::Limit(limit);
        }
        if self.gini_threshold.is_some() {
            config.economy.gini_revolution_threshold = self.gini_threshold;
        }
        if self.seed.is_some() {
            config.simulation.seed = self.seed;
        }
        if self.ticks.is_some() {
            config.simulation.max_ticks = self.ticks;
        }
        if let Some(frame_ms) = self.frame_ms {
            config.timing.frame_interval_ms = frame_ms;
        }

        config.validate()?;
        Ok(config)
    }
}

fn run(args: &Args) -> Result<(), SimError> {
    let config = args.build_config()?;
    info!(
        initial_wealth = config.economy.initial_wealth,
        debt_threshold = %config.economy.debt_threshold,
        gini_threshold = ?config.economy.gini_revolution_threshold,
        seed = ?config.simulation.seed,
        "starting simulation"
    );

    let choices = seeded_choices(config.simulation.seed);
    let mut simulation = Simulation::new(config, choices, ThreadClock)?;

    let mut renderer: Box<dyn Renderer> = match args.renderer {
        RendererKind::Terminal => Box::new(TerminalRenderer::stdout()?),
        RendererKind::Json => Box::new(JsonRenderer::stdout()),
    };

    let stats = simulation.run(renderer.as_mut())?;
    info!(
        ticks = stats.ticks,
        contests = stats.contests,
        ties = stats.ties,
        skipped = stats.skipped_pairs,
        revolutions = stats.revolutions,
        "simulation finished"
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    if args.print_default_config {
        print!("{}", default_config_toml());
        return ExitCode::SUCCESS;
    }

    // Logs go to stderr so they never tear the animation on stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
