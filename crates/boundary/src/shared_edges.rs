use util::{Point, Segments};

use crate::simplify::simplify;

/// Point totals before and after simplifying every segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimplificationStats {
    pub original_points: usize,
    pub simplified_points: usize,
}

impl SimplificationStats {
    pub fn reduction_percent(&self) -> f64 {
        if self.original_points == 0 {
            return 0.0;
        }
        (1.0 - self.simplified_points as f64 / self.original_points as f64) * 100.0
    }
}

/// Simplifies each segment exactly once, keyed by its id.
///
/// Districts that share a border reference the same segment id, so they all
/// see the same simplified points and adjacent polygons meet without gaps.
pub fn simplify_ways(segments: &Segments, tolerance: f64) -> (Segments, SimplificationStats) {
    let simplified: Segments = segments
        .iter()
        .map(|(way_id, points)| (*way_id, simplify_way(points, tolerance)))
        .collect();

    let stats = SimplificationStats {
        original_points: segments.values().map(Vec::len).sum(),
        simplified_points: simplified.values().map(Vec::len).sum(),
    };

    (simplified, stats)
}

fn simplify_way(points: &[Point], tolerance: f64) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let simplified = simplify(points, tolerance);
    if simplified.len() < 2 {
        return vec![points[0], points[points.len() - 1]];
    }
    simplified
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;

    #[test]
    fn every_way_is_simplified_under_its_own_id() {
        let segments: Segments = [
            (
                1,
                vec![
                    coord! {x: 0.0, y: 0.0},
                    coord! {x: 0.5, y: 0.00001},
                    coord! {x: 1.0, y: 0.0},
                ],
            ),
            (2, vec![coord! {x: 1.0, y: 0.0}, coord! {x: 1.0, y: 1.0}]),
            (3, vec![coord! {x: 4.0, y: 4.0}]),
        ]
        .into_iter()
        .collect();

        let (simplified, stats) = simplify_ways(&segments, 0.001);

        assert_eq!(simplified.len(), 3);
        assert_eq!(
            simplified[&1],
            vec![coord! {x: 0.0, y: 0.0}, coord! {x: 1.0, y: 0.0}]
        );
        assert_eq!(simplified[&2], segments[&2]);
        assert_eq!(simplified[&3], segments[&3]);
        assert_eq!(stats.original_points, 6);
        assert_eq!(stats.simplified_points, 5);
    }

    #[test]
    fn reduction_is_zero_without_points() {
        let (_, stats) = simplify_ways(&Segments::new(), 0.001);
        assert_eq!(stats.reduction_percent(), 0.0);
    }

    #[test]
    fn reduction_percent_of_halved_points() {
        let stats = SimplificationStats {
            original_points: 200,
            simplified_points: 50,
        };
        assert!((stats.reduction_percent() - 75.0).abs() < 1e-9);
    }
}
