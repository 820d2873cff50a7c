mod config;
mod name_aliases;

use std::collections::HashMap;

use geo::Coord;

pub use config::DistrictsConfig;
pub use name_aliases::NameAliases;

/// A `(longitude, latitude)` pair. Compared by exact value when matching endpoints.
pub type Point = Coord<f64>;

pub type SegmentId = i64;

/// Boundary segments ("ways") keyed by id, each an ordered run of points.
pub type Segments = HashMap<SegmentId, Vec<Point>>;

/// A named district and the outer segments that bound it, in relation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Area {
    pub name: String,
    pub segment_ids: Vec<SegmentId>,
}

/// A closed boundary loop: first point equals last point.
///
/// `forced` is set when the loop did not close through matching segment
/// endpoints and the first point had to be appended to close it.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub points: Vec<Point>,
    pub forced: bool,
}

impl Ring {
    pub fn is_closed(&self) -> bool {
        self.points.len() >= 2 && self.points.first() == self.points.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;

    #[test]
    fn ring_closure_requires_matching_ends() {
        let open = Ring {
            points: vec![coord! {x: 0.0, y: 0.0}, coord! {x: 1.0, y: 0.0}],
            forced: false,
        };
        assert!(!open.is_closed());

        let closed = Ring {
            points: vec![
                coord! {x: 0.0, y: 0.0},
                coord! {x: 1.0, y: 0.0},
                coord! {x: 1.0, y: 1.0},
                coord! {x: 0.0, y: 0.0},
            ],
            forced: false,
        };
        assert!(closed.is_closed());
        assert_eq!(closed.points.len(), 4);
    }
}
