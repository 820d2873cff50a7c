mod assemble;
mod shared_edges;
mod simplify;
mod stitch;

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};

pub use assemble::{assemble_district, assemble_districts, count_points, District};
pub use shared_edges::{simplify_ways, SimplificationStats};
pub use simplify::{perpendicular_distance, simplify};
pub use stitch::{stitch_rings, MIN_RING_POINTS};

/// One feature per district, `properties.name` holding the district name.
pub fn to_feature_collection(districts: &[District]) -> FeatureCollection {
    let features = districts
        .iter()
        .map(|district| {
            let mut properties = JsonObject::new();
            properties.insert(
                "name".to_string(),
                serde_json::Value::String(district.name.clone()),
            );

            Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::from(&district.geometry))),
                id: None,
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
