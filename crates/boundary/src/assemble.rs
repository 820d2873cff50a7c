use geo::{CoordsIter, Geometry, LineString, MultiPolygon, Polygon};
use log::warn;
use util::{Area, Ring, Segments};

use crate::stitch::stitch_rings;

/// A district ready for output: a polygon for one ring, a multi-polygon
/// with one part per ring otherwise. Parts never carry holes.
///
/// `forced_rings` counts the rings that had to be closed by repeating their
/// first point; each one is reported as a warning.
#[derive(Debug, Clone, PartialEq)]
pub struct District {
    pub name: String,
    pub geometry: Geometry<f64>,
    pub forced_rings: usize,
}

impl District {
    pub fn point_count(&self) -> usize {
        self.geometry.coords_count()
    }
}

/// Builds the districts that produce at least one ring, in area order.
pub fn assemble_districts(areas: &[Area], segments: &Segments) -> Vec<District> {
    areas
        .iter()
        .filter_map(|area| assemble_district(area, segments))
        .collect()
}

pub fn assemble_district(area: &Area, segments: &Segments) -> Option<District> {
    let rings = stitch_rings(&area.segment_ids, segments);

    let mut forced_rings = 0;
    for ring in rings.iter().filter(|ring| ring.forced) {
        warn!(
            "{}: ring of {} points closed without a matching segment",
            area.name,
            ring.points.len()
        );
        forced_rings += 1;
    }

    let mut polygons: Vec<Polygon> = rings.into_iter().map(ring_to_polygon).collect();

    let geometry = match polygons.len() {
        0 => {
            warn!("No rings for {}", area.name);
            return None;
        }
        1 => Geometry::Polygon(polygons.remove(0)),
        _ => Geometry::MultiPolygon(MultiPolygon::new(polygons)),
    };

    Some(District {
        name: area.name.clone(),
        geometry,
        forced_rings,
    })
}

fn ring_to_polygon(ring: Ring) -> Polygon {
    Polygon::new(LineString::new(ring.points), vec![])
}

pub fn count_points(districts: &[District]) -> usize {
    districts.iter().map(District::point_count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;
    use util::Point;

    fn line(points: &[(f64, f64)]) -> Vec<Point> {
        points.iter().map(|(x, y)| coord! {x: *x, y: *y}).collect()
    }

    fn area(name: &str, segment_ids: Vec<i64>) -> Area {
        Area {
            name: name.to_string(),
            segment_ids,
        }
    }

    fn two_blocks() -> Segments {
        [
            (1, line(&[(1.0, 0.0), (1.0, 0.5), (1.0, 1.0)])),
            (2, line(&[(1.0, 1.0), (0.0, 1.0), (0.0, 0.0), (1.0, 0.0)])),
            (3, line(&[(1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (1.0, 1.0)])),
            (4, line(&[(5.0, 5.0), (6.0, 5.0), (6.0, 6.0), (5.0, 5.0)])),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn single_ring_is_a_polygon() {
        let district = assemble_district(&area("Centro", vec![1, 2]), &two_blocks()).unwrap();

        let Geometry::Polygon(polygon) = &district.geometry else {
            panic!("expected a polygon, got {:?}", district.geometry);
        };
        assert!(polygon.interiors().is_empty());
        assert_eq!(polygon.exterior().0.len(), 6);
        assert_eq!(district.point_count(), 6);
        assert_eq!(district.forced_rings, 0);
    }

    #[test]
    fn open_boundary_is_closed_and_reported() {
        // way 3 alone is an open "C" around the right block
        let district = assemble_district(&area("Usera", vec![3]), &two_blocks()).unwrap();

        let Geometry::Polygon(polygon) = &district.geometry else {
            panic!("expected a polygon, got {:?}", district.geometry);
        };
        let ring = &polygon.exterior().0;
        assert_eq!(ring.len(), 5);
        assert_eq!(ring.first(), ring.last());
        assert_eq!(district.forced_rings, 1);
    }

    #[test]
    fn forced_rings_counted_per_part() {
        let district =
            assemble_district(&area("Centro", vec![3, 4]), &two_blocks()).unwrap();

        let Geometry::MultiPolygon(multi) = &district.geometry else {
            panic!("expected a multipolygon, got {:?}", district.geometry);
        };
        assert_eq!(multi.0.len(), 2);
        // the enclave closes through its own endpoints
        assert_eq!(district.forced_rings, 1);
    }

    #[test]
    fn enclave_makes_a_multipolygon() {
        let district = assemble_district(&area("Centro", vec![1, 2, 4]), &two_blocks()).unwrap();

        let Geometry::MultiPolygon(multi) = &district.geometry else {
            panic!("expected a multipolygon, got {:?}", district.geometry);
        };
        assert_eq!(multi.0.len(), 2);
        assert!(multi.0.iter().all(|polygon| polygon.interiors().is_empty()));
        assert_eq!(district.point_count(), 10);
    }

    #[test]
    fn district_without_rings_is_dropped() {
        let areas = vec![
            area("Centro", vec![1, 2]),
            area("Retiro", vec![99]),
            area("Usera", vec![3, 1]),
        ];

        let districts = assemble_districts(&areas, &two_blocks());

        let names: Vec<&str> = districts.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Centro", "Usera"]);
        assert_eq!(count_points(&districts), 6 + 6);
    }

    #[test]
    fn shared_way_gives_identical_border() {
        let segments = two_blocks();
        let districts = assemble_districts(
            &[area("Centro", vec![1, 2]), area("Usera", vec![3, 1])],
            &segments,
        );

        let border = &segments[&1];
        for district in &districts {
            let coords: Vec<Point> = district.geometry.coords_iter().collect();
            assert!(
                coords.windows(border.len()).any(|w| w == border.as_slice())
                    || coords
                        .windows(border.len())
                        .any(|w| w.iter().rev().eq(border.iter()))
            );
        }
    }
}
