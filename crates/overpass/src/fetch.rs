use std::{fs, path::Path, time::Duration};

use anyhow::{Context, Result};
use log::info;
use util::DistrictsConfig;

pub fn build_query(config: &DistrictsConfig) -> String {
    format!(
        "[out:json][timeout:{timeout}];\n\
         relation({area});\n\
         map_to_area->.city;\n\
         relation[\"boundary\"=\"administrative\"][\"admin_level\"=\"{level}\"](area.city);\n\
         out body;\n\
         >;\n\
         out skel qt;\n",
        timeout = config.query_timeout_secs,
        area = config.area_relation_id,
        level = config.admin_level,
    )
}

/// Runs the boundary query and returns the raw response body.
///
/// A single attempt with a long timeout; any transport or status failure is
/// returned to the caller.
pub fn fetch_overpass(config: &DistrictsConfig) -> Result<String> {
    info!("Fetching district boundaries from {}", config.overpass_url);

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()
        .context("building HTTP client")?;

    let body = client
        .post(&config.overpass_url)
        .form(&[("data", build_query(config))])
        .send()
        .with_context(|| format!("requesting {}", config.overpass_url))?
        .error_for_status()
        .context("Overpass API returned an error status")?
        .text()
        .context("reading Overpass response body")?;

    info!("Received {} KB", body.len() / 1024);
    Ok(body)
}

/// Loads a response previously saved to disk.
pub fn load_payload<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).with_context(|| format!("reading payload {}", path.display()))
}
