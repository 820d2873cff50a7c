mod fetch;
mod read_overpass_data;

use std::collections::HashMap;

use anyhow::Result;
use geo::coord;
use log::{debug, info, warn};
use read_overpass_data::{read_overpass_elements, RelationWithMembers};
use util::{Area, NameAliases, Point, Segments};

pub use fetch::{build_query, fetch_overpass, load_payload};

/// Segment geometry and the named districts that reference it.
///
/// `unmapped` lists relation names missing from the alias table, in
/// response order; each one is reported as a warning.
#[derive(Debug, Clone, Default)]
pub struct ParsedBoundaries {
    pub segments: Segments,
    pub areas: Vec<Area>,
    pub unmapped: Vec<String>,
}

pub fn parse_boundaries(payload: &str, aliases: &NameAliases) -> Result<ParsedBoundaries> {
    let (relations, ways, nodes) = read_overpass_elements(payload)?;

    let segments = build_segments(ways, &nodes);
    let (areas, unmapped) = build_areas(relations, &segments, aliases);

    info!(
        "Parsed {} districts, {} ways, {} nodes",
        areas.len(),
        segments.len(),
        nodes.len()
    );

    Ok(ParsedBoundaries {
        segments,
        areas,
        unmapped,
    })
}

// Node ids that do not resolve are dropped from the way.
fn build_segments(ways: HashMap<i64, Vec<i64>>, nodes: &HashMap<i64, (f64, f64)>) -> Segments {
    ways.into_iter()
        .map(|(way_id, node_ids)| {
            let points: Vec<Point> = node_ids
                .iter()
                .filter_map(|node_id| nodes.get(node_id))
                .map(|(lon, lat)| coord! {x: *lon, y: *lat})
                .collect();

            if points.len() < node_ids.len() {
                debug!(
                    "Way {way_id}: {} of {} nodes unresolved",
                    node_ids.len() - points.len(),
                    node_ids.len()
                );
            }

            (way_id, points)
        })
        .collect()
}

fn build_areas(
    relations: Vec<RelationWithMembers>,
    segments: &Segments,
    aliases: &NameAliases,
) -> (Vec<Area>, Vec<String>) {
    let mut areas = Vec::<Area>::new();
    let mut unmapped = Vec::<String>::new();

    for relation in relations {
        let name = match relation.tags.get("name") {
            Some(name) if !name.is_empty() => name,
            _ => continue,
        };

        let Some(canonical) = aliases.resolve(name) else {
            warn!("Skipping unmapped district: {name}");
            unmapped.push(name.clone());
            continue;
        };

        let inner_count = relation
            .members
            .iter()
            .filter(|member| member.outer_id().is_none())
            .count();
        if inner_count > 0 {
            debug!("{name}: ignoring {inner_count} inner ways");
        }

        // Relation order and direction are kept for stitching.
        let segment_ids: Vec<i64> = relation
            .members
            .iter()
            .filter_map(|member| member.outer_id())
            .filter(|way_id| segments.contains_key(way_id))
            .collect();

        if segment_ids.is_empty() {
            warn!("No outer ways for: {name} (relation {})", relation.id);
            continue;
        }

        areas.push(Area {
            name: canonical.to_string(),
            segment_ids,
        });
    }

    (areas, unmapped)
}
