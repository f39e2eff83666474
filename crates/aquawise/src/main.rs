//! aquawise - Water usage demo server and CLI

mod cli;

use anyhow::{Context, Result};
use aquawise_core::{
    Entropy, PredictionRequest, generate_water_data, plumbing_tips, predict_usage, water_savings,
};
use aquawise_web::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig};
use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "aquawise",
    version,
    about = "Smart water usage demo server",
    long_about = "Serves mock water-usage statistics, a usage prediction, leak alerts,\n\
                  savings estimates and plumbing tips over a small JSON API.\n\
                  \n\
                  All data is synthesized per request; nothing is stored.\n\
                  \n\
                  Examples:\n\
                    aquawise                         # Serve on 0.0.0.0:5000 (default)\n\
                    aquawise --port 8080 serve       # Custom port\n\
                    aquawise --seed 42 serve         # Reproducible responses\n\
                    aquawise usage                   # Print a 30-day series\n\
                    aquawise predict 120 130 ...     # Predict from 7+ usage values\n\
                    aquawise predict                 # Predict from a synthesized series\n\
                  \n\
                  Environment Variables:\n\
                    AQUAWISE_HOST                    # Bind host\n\
                    AQUAWISE_PORT                    # Bind port\n\
                    AQUAWISE_DEBUG                   # Debug logging\n\
                    AQUAWISE_SEED                    # Fixed RNG seed\n\
                    AQUAWISE_LOG                     # tracing filter (e.g. aquawise_web=debug)\n\
                    AQUAWISE_NO_COLOR                # Disable ANSI colors"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Host to bind the web server to
    #[arg(long, env = "AQUAWISE_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Port to bind the web server to
    #[arg(long, env = "AQUAWISE_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Enable debug logging
    #[arg(long, env = "AQUAWISE_DEBUG")]
    debug: bool,

    /// Seed every request's RNG with this value (reproducible output)
    #[arg(long, env = "AQUAWISE_SEED")]
    seed: Option<u64>,

    /// Log filter directive, overrides --debug
    #[arg(long, env = "AQUAWISE_LOG")]
    log: Option<String>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, env = "AQUAWISE_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Run the web server (default)
    Serve,
    /// Print a synthesized 30-day usage series
    Usage {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print current usage and potential savings
    Savings {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the plumbing tips
    Tips,
    /// Predict usage from historical values (at least 7), or from a
    /// freshly synthesized 30-day series when none are given
    Predict {
        /// Daily usage values, oldest first
        usages: Vec<f64>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.log.as_deref(), cli.debug, cli.no_color)?;

    let entropy = Entropy::from_seed(cli.seed);

    match cli.mode.unwrap_or(Mode::Serve) {
        Mode::Serve => {
            let config = ServerConfig {
                host: cli.host,
                port: cli.port,
                entropy,
            };
            aquawise_web::run(config).await?;
        }
        Mode::Usage { json } => {
            let records = generate_water_data(&mut entropy.rng(), Local::now().date_naive());
            println!("{}", cli::format_usage_table(&records, json, cli.no_color));
        }
        Mode::Savings { json } => {
            let records = generate_water_data(&mut entropy.rng(), Local::now().date_naive());
            println!("{}", cli::format_savings(&water_savings(&records), json));
        }
        Mode::Tips => {
            println!("{}", cli::format_tips(plumbing_tips()));
        }
        Mode::Predict { usages, json } => {
            let mut rng = entropy.rng();
            let request = if usages.is_empty() {
                let records = generate_water_data(&mut rng, Local::now().date_naive());
                PredictionRequest::from_records(&records)
            } else {
                PredictionRequest::from_usages(usages)
            };
            let result = predict_usage(&mut rng, &request)
                .context("Prediction failed")?;
            println!("{}", cli::format_prediction(&result, json));
        }
    }

    Ok(())
}

/// Install the global tracing subscriber
///
/// Logs go to stderr so JSON output on stdout stays parseable.
fn init_tracing(filter: Option<&str>, debug: bool, no_color: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter = match filter {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("Invalid log filter '{}'", directive))?,
        None => EnvFilter::new(default_level),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
