//! Workout Tracker CLI
//!
//! Prints workout summaries for sensor packages.

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use workout_tracker::{
    Config, Driver, ErrorPolicy, FixedSource, OutputFormat, SampleSource, WorkoutSample, VERSION,
};

#[derive(Parser)]
#[command(name = "workout-tracker")]
#[command(version = VERSION)]
#[command(about = "Workout statistics from fitness sensor packages", long_about = None)]
struct Cli {
    /// Log bad samples and keep going instead of stopping
    #[arg(long, global = true)]
    skip_invalid: bool,

    /// Output format (overrides the config file)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Process the built-in demo packages
    Demo,

    /// Process a single package
    Read {
        /// Workout type tag (SWM, RUN or WLK)
        workout_type: String,

        /// Positional values for the workout type
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },

    /// Show configuration
    Config,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = Config::load().context("could not load configuration")?;
    if cli.skip_invalid {
        config.error_policy = ErrorPolicy::Skip;
    }
    if let Some(format) = cli.format {
        config.output_format = format;
    }

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => cmd_process(&config, &mut FixedSource::demo()),
        Commands::Read {
            workout_type,
            values,
        } => {
            let mut source = FixedSource::new(vec![WorkoutSample::new(workout_type, values)]);
            cmd_process(&config, &mut source)
        }
        Commands::Config => cmd_config(&config),
    }
}

fn cmd_process(config: &Config, source: &mut dyn SampleSource) -> anyhow::Result<()> {
    tracing::info!(
        error_policy = ?config.error_policy,
        output_format = ?config.output_format,
        "processing samples"
    );

    let stdout = std::io::stdout();
    let stats = Driver::new(config).run(source, &mut stdout.lock())?;

    if stats.failed > 0 {
        anyhow::bail!("{}", stats.summary());
    }
    Ok(())
}

fn cmd_config(config: &Config) -> anyhow::Result<()> {
    println!("Config file: {:?}", Config::config_path());
    println!();
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
