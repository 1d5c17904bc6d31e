mod cli;
mod config;
mod datasources;
mod error;
mod logic;
mod models;

use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, FALLBACK_LATITUDE, FALLBACK_LONGITUDE};
use datasources::OpenMeteoClient;
use error::Result;
use logic::AdvisoryEngine;
use models::{AdvisoryOutput, WeatherBundle};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    match cli.command {
        Some(Commands::Init) => {
            let path = Config::setup_interactive()?;
            tracing::debug!("config written to {}", path.display());
            Ok(())
        }
        Some(Commands::Check) => run_check(cli.config).await,
        Some(Commands::Advise {
            lat,
            lon,
            json,
            rule,
        }) => run_advise(cli.config, lat, lon, json, rule).await,
        None => run_advise(cli.config, None, None, false, None).await,
    }
}

async fn run_check(config_override: Option<std::path::PathBuf>) -> Result<()> {
    let config = Config::load(config_override)?;
    println!("Config OK: plot '{}'", config.plot.name);

    println!("Rules:");
    for (id, name) in AdvisoryEngine::new().list_rules() {
        println!("  {} ({})", name, id);
    }

    let (lat, lon) = resolve_coordinates(&config, None, None);
    let client = OpenMeteoClient::new(config.weather.forecast_days);
    match client.test_connection(lat, lon).await {
        Ok(true) => println!("Weather provider: OK"),
        Ok(false) => println!("Weather provider: FAILED (non-success status)"),
        Err(e) => println!("Weather provider: FAILED ({})", e),
    }
    Ok(())
}

async fn run_advise(
    config_override: Option<std::path::PathBuf>,
    lat: Option<f64>,
    lon: Option<f64>,
    json: bool,
    rule: Option<String>,
) -> Result<()> {
    let config = if Config::exists(config_override.as_ref()) {
        Config::load(config_override)?
    } else {
        tracing::warn!("no config found, using defaults (run `anticipa init` to set up)");
        Config::default()
    };

    let (lat, lon) = resolve_coordinates(&config, lat, lon);
    let client = OpenMeteoClient::new(config.weather.forecast_days);

    let bundle = match client.fetch(lat, lon, &config.plot.name).await {
        Ok(b) => b,
        Err(e) => {
            tracing::error!("weather fetch failed: {}", e);
            eprintln!("Could not load weather data. Check your connection and try again.");
            std::process::exit(1);
        }
    };

    let engine = AdvisoryEngine::new();

    if let Some(rule_id) = rule {
        return print_single_rule(&engine, &rule_id, &bundle, json);
    }

    let advisory = engine.evaluate(&bundle);

    if json {
        println!("{}", serde_json::to_string_pretty(&advisory)?);
    } else {
        print_report(&bundle, &advisory);
    }
    Ok(())
}

fn print_single_rule(
    engine: &AdvisoryEngine,
    rule_id: &str,
    bundle: &WeatherBundle,
    json: bool,
) -> Result<()> {
    if !engine.list_rules().iter().any(|(id, _)| *id == rule_id) {
        eprintln!("Unknown rule '{}'. Available rules:", rule_id);
        for (id, name) in engine.list_rules() {
            eprintln!("  {} ({})", id, name);
        }
        std::process::exit(1);
    }

    match engine.evaluate_rule(rule_id, bundle) {
        Some(hit) if json => println!("{}", serde_json::to_string_pretty(&hit)?),
        Some(hit) => {
            for risk in &hit.risks {
                println!("  ! {}", risk);
            }
            println!("Recommended actions:");
            for action in &hit.actions {
                println!("  - {}", action);
            }
        }
        None => println!("Rule '{}' did not trigger.", rule_id),
    }
    Ok(())
}

/// CLI coordinates win over the config; when neither has a full pair the
/// static Sul de Minas fallback is used.
fn resolve_coordinates(config: &Config, lat: Option<f64>, lon: Option<f64>) -> (f64, f64) {
    if let (Some(lat), Some(lon)) = (lat, lon) {
        return (lat, lon);
    }
    if let Some(coords) = config.plot.coordinates() {
        return coords;
    }
    tracing::info!(
        "no coordinates configured, falling back to {}, {}",
        FALLBACK_LATITUDE,
        FALLBACK_LONGITUDE
    );
    (FALLBACK_LATITUDE, FALLBACK_LONGITUDE)
}

fn print_report(bundle: &WeatherBundle, advisory: &AdvisoryOutput) {
    println!("Advisory for {}", bundle.location);
    println!(
        "Now: {:.1}°C, {}% humidity, wind {:.0} kph",
        bundle.current.temp_c, bundle.current.humidity_pct, bundle.current.wind_kph
    );
    println!();

    if advisory.is_stable() {
        println!("{}", advisory.summary);
        return;
    }

    println!("{}", advisory.summary);
    println!();
    for risk in &advisory.risks {
        println!("  ! {}", risk);
    }
    println!();
    println!("Recommended actions:");
    for action in &advisory.actions {
        println!("  - {}", action.text);
    }
}
