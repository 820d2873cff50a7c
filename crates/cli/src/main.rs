mod pipeline;

use std::fs;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use overpass::{fetch_overpass, load_payload};
use pipeline::{build_districts, write_districts};
use util::DistrictsConfig;

#[derive(Parser)]
#[command(version, about, long_about)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Query Overpass for district boundaries and write the GeoJSON
    Fetch {
        #[arg(short, long)]
        config_path: Option<String>,

        #[arg(short, long)]
        output_path: Option<String>,

        #[arg(short, long)]
        tolerance: Option<f64>,

        /// Also save the raw Overpass response here
        #[arg(short, long)]
        raw_output_path: Option<String>,
    },
    /// Build the GeoJSON from a saved Overpass response
    Build {
        #[arg(short, long)]
        input_path: String,

        #[arg(short, long)]
        config_path: Option<String>,

        #[arg(short, long)]
        output_path: Option<String>,

        #[arg(short, long)]
        tolerance: Option<f64>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Args::parse();

    match cli.command {
        Commands::Fetch {
            config_path,
            output_path,
            tolerance,
            raw_output_path,
        } => {
            let config = districts_config(config_path.as_deref(), output_path, tolerance)?;
            let payload = fetch_overpass(&config)?;

            if let Some(raw_path) = raw_output_path {
                fs::write(&raw_path, &payload).with_context(|| format!("writing {raw_path}"))?;
                info!("Saved raw response to {raw_path}");
            }

            let districts = build_districts(&payload, &config)?;
            write_districts(&districts, &config.output_path)?;
        }
        Commands::Build {
            input_path,
            config_path,
            output_path,
            tolerance,
        } => {
            let config = districts_config(config_path.as_deref(), output_path, tolerance)?;
            info!("Read file {input_path}");
            let payload = load_payload(&input_path)?;

            let districts = build_districts(&payload, &config)?;
            write_districts(&districts, &config.output_path)?;
        }
    }
    Ok(())
}

fn districts_config(
    config_path: Option<&str>,
    output_path: Option<String>,
    tolerance: Option<f64>,
) -> Result<DistrictsConfig> {
    let mut config = match config_path {
        Some(path) => DistrictsConfig::from_path(path)?,
        None => DistrictsConfig::default(),
    };

    if let Some(output_path) = output_path {
        config.output_path = output_path;
    }
    if let Some(tolerance) = tolerance {
        config.tolerance = tolerance;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn flags_override_config() {
        let config = districts_config(None, Some("out/d.geojson".to_string()), Some(0.01)).unwrap();
        assert_eq!(config.output_path, "out/d.geojson");
        assert_eq!(config.tolerance, 0.01);
        assert_eq!(config.admin_level, "9");
    }

    #[test]
    fn build_arguments_parse() {
        let args = Args::try_parse_from(["districts", "build", "-i", "raw.json", "-t", "0.002"]).unwrap();
        let Commands::Build { input_path, tolerance, .. } = args.command else {
            panic!("expected build");
        };
        assert_eq!(input_path, "raw.json");
        assert_eq!(tolerance, Some(0.002));
    }
}
