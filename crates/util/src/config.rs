use std::{fs::read_to_string, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::NameAliases;

/// Settings for one boundary run. Missing fields take the Madrid defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DistrictsConfig {
    pub overpass_url: String,
    pub area_relation_id: i64,
    pub admin_level: String,
    pub query_timeout_secs: u64,
    pub request_timeout_secs: u64,
    /// Simplification tolerance in coordinate degrees.
    pub tolerance: f64,
    pub expected_districts: usize,
    pub output_path: String,
    pub name_aliases: NameAliases,
}

impl Default for DistrictsConfig {
    fn default() -> Self {
        DistrictsConfig {
            overpass_url: "https://overpass-api.de/api/interpreter".to_string(),
            area_relation_id: 5326784,
            admin_level: "9".to_string(),
            query_timeout_secs: 120,
            request_timeout_secs: 180,
            // roughly 111 m at Madrid's latitude
            tolerance: 0.001,
            expected_districts: 21,
            output_path: "docs/districts.geojson".to_string(),
            name_aliases: NameAliases::default(),
        }
    }
}

impl DistrictsConfig {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_str = read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&config_str)
            .with_context(|| format!("parsing config {}", path.display()))
    }

    /// True when the parsed district count is far enough below the expected
    /// total to be worth a warning. One missing district is tolerated.
    pub fn district_count_is_low(&self, found: usize) -> bool {
        found + 1 < self.expected_districts
    }
}
