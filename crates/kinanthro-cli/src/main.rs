use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use kinanthro_cli::config;
use kinanthro_cli::report::{build_report, AssessmentInput, Overrides};
use kinanthro_composition::formulas::FormulaId;
use kinanthro_composition::profile::{ActivityLevel, FormulaProfile};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "kinanthro", version, about = "Clinical anthropometry calculations")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assess a measurement file and print the report as JSON.
    Assess {
        input: PathBuf,
        #[arg(long)]
        profile: Option<FormulaProfile>,
        #[arg(long)]
        activity: Option<ActivityLevel>,
        #[arg(long)]
        formula: Option<FormulaId>,
        #[arg(long)]
        pretty: bool,
    },
    /// Write a default configuration file.
    Init {
        #[arg(long)]
        force: bool,
    },
    /// Print the active configuration.
    Config,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    // Runs before loading so it can replace a config that no longer loads.
    if let Command::Init { force } = cli.command {
        init_tracing(false);
        return init(force);
    }

    let config = config::load_or_default()?;
    init_tracing(config.json_logs);

    match cli.command {
        Command::Assess {
            input,
            profile,
            activity,
            formula,
            pretty,
        } => {
            let contents = std::fs::read_to_string(&input)
                .map_err(|e| eyre::eyre!("failed to read {}: {e}", input.display()))?;
            let input = AssessmentInput::from_json(&contents)?;
            let overrides = Overrides {
                profile,
                activity,
                formula,
            };
            let today = jiff::Zoned::now().date();
            let report = build_report(&input, &config, &overrides, today)?;

            let json = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{json}");
        }
        Command::Init { .. } => {}
        Command::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

fn init(force: bool) -> Result<()> {
    if config::has_config() && !force {
        return Err(eyre::eyre!(
            "config already exists at {}; pass --force to overwrite",
            config::config_path()?.display()
        ));
    }
    let path = config::save_config(&config::KinanthroConfig::new())?;
    println!("{}", path.display());
    Ok(())
}

/// Logs go to stderr so stdout stays machine-readable.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
