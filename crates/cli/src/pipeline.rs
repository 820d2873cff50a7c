use std::{fs, path::Path};

use anyhow::{Context, Result};
use boundary::{
    assemble_districts, count_points, simplify_ways, to_feature_collection, District,
};
use geojson::GeoJson;
use log::{info, warn};
use overpass::parse_boundaries;
use util::DistrictsConfig;

/// Parses an Overpass payload and turns it into simplified district shapes.
pub fn build_districts(payload: &str, config: &DistrictsConfig) -> Result<Vec<District>> {
    let parsed = parse_boundaries(payload, &config.name_aliases)?;

    if config.district_count_is_low(parsed.areas.len()) {
        warn!(
            "Only found {}/{} districts",
            parsed.areas.len(),
            config.expected_districts
        );
    }

    let (simplified, stats) = simplify_ways(&parsed.segments, config.tolerance);
    let districts = assemble_districts(&parsed.areas, &simplified);

    info!(
        "Ways: {} points -> {} points ({:.0}% reduction)",
        stats.original_points,
        stats.simplified_points,
        stats.reduction_percent()
    );
    info!("GeoJSON total: {} points", count_points(&districts));

    Ok(districts)
}

pub fn districts_to_geojson(districts: &[District]) -> String {
    GeoJson::from(to_feature_collection(districts)).to_string()
}

pub fn write_districts(districts: &[District], output_path: &str) -> Result<()> {
    let path = Path::new(output_path);
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }

    let geojson_str = districts_to_geojson(districts);
    fs::write(path, &geojson_str).with_context(|| format!("writing {}", path.display()))?;
    info!("Wrote {} ({} KB)", path.display(), geojson_str.len() / 1024);

    let mut names: Vec<&str> = districts.iter().map(|d| d.name.as_str()).collect();
    names.sort_unstable();
    for name in names {
        info!("  ✓ {name}");
    }

    Ok(())
}
