use log::{debug, warn};
use util::{Point, Ring, SegmentId, Segments};

/// A ring needs three distinct points plus the closing point.
pub const MIN_RING_POINTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Join {
    /// candidate start meets the ring's end
    Append,
    /// candidate end meets the ring's end
    AppendReversed,
    /// candidate end meets the ring's start
    Prepend,
    /// candidate start meets the ring's start
    PrependReversed,
}

/// Joins the segments of one district into closed rings by matching
/// endpoints, in the order the ids are given.
///
/// Ids without geometry are skipped. A chain that cannot be closed through
/// its segments is closed by repeating its first point and marked `forced`.
/// Chains shorter than [`MIN_RING_POINTS`] after closing are dropped.
pub fn stitch_rings(segment_ids: &[SegmentId], segments: &Segments) -> Vec<Ring> {
    let mut remaining = Vec::<Vec<Point>>::new();
    for segment_id in segment_ids {
        match segments.get(segment_id) {
            Some(points) if !points.is_empty() => remaining.push(points.clone()),
            _ => debug!("Way {segment_id} has no geometry, skipping"),
        }
    }

    let mut rings = Vec::<Ring>::new();

    while !remaining.is_empty() {
        let mut current = remaining.remove(0);
        while splice_next(&mut current, &mut remaining) {}

        let mut forced = false;
        if current.len() >= 3 && current.first() != current.last() {
            current.push(current[0]);
            forced = true;
        }

        if current.len() >= MIN_RING_POINTS {
            rings.push(Ring {
                points: current,
                forced,
            });
        } else {
            warn!("Dropping degenerate ring with {} points", current.len());
        }
    }

    rings
}

/// Attaches the first remaining segment that touches either end of
/// `current`. Returns false when nothing touches.
fn splice_next(current: &mut Vec<Point>, remaining: &mut Vec<Vec<Point>>) -> bool {
    let (Some(&head), Some(&tail)) = (current.first(), current.last()) else {
        return false;
    };

    let Some((index, join)) = remaining
        .iter()
        .enumerate()
        .find_map(|(i, candidate)| find_join(head, tail, candidate).map(|join| (i, join)))
    else {
        return false;
    };

    let mut segment = remaining.remove(index);
    match join {
        Join::Append => current.extend_from_slice(&segment[1..]),
        Join::AppendReversed => current.extend(segment.iter().rev().skip(1)),
        Join::Prepend => {
            segment.pop();
            segment.append(current);
            *current = segment;
        }
        Join::PrependReversed => {
            segment.reverse();
            segment.pop();
            segment.append(current);
            *current = segment;
        }
    }
    true
}

fn find_join(head: Point, tail: Point, candidate: &[Point]) -> Option<Join> {
    let (start, end) = (*candidate.first()?, *candidate.last()?);

    if tail == start {
        Some(Join::Append)
    } else if tail == end {
        Some(Join::AppendReversed)
    } else if head == end {
        Some(Join::Prepend)
    } else if head == start {
        Some(Join::PrependReversed)
    } else {
        None
    }
}
