use util::Point;

/// Distance from `point` to the closest point of the segment `start`-`end`.
pub fn perpendicular_distance(point: Point, start: Point, end: Point) -> f64 {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if dx == 0.0 && dy == 0.0 {
        return (point.x - start.x).hypot(point.y - start.y);
    }

    let t = ((point.x - start.x) * dx + (point.y - start.y) * dy) / (dx * dx + dy * dy);
    let t = t.clamp(0.0, 1.0);

    let projected_x = start.x + t * dx;
    let projected_y = start.y + t * dy;
    (point.x - projected_x).hypot(point.y - projected_y)
}

/// Douglas-Peucker simplification.
///
/// The first and last points are always kept. Among equally distant
/// candidates the earliest one splits the run. Runs are processed from an
/// explicit work list so very long ways cannot exhaust the stack.
pub fn simplify(points: &[Point], tolerance: f64) -> Vec<Point> {
    if points.len() <= 2 {
        return points.to_vec();
    }

    let last = points.len() - 1;
    let mut kept = vec![false; points.len()];
    kept[0] = true;
    kept[last] = true;

    let mut pending = vec![(0, last)];
    while let Some((start, end)) = pending.pop() {
        if end <= start + 1 {
            continue;
        }

        let mut max_distance = 0.0;
        let mut max_index = start;
        for i in (start + 1)..end {
            let distance = perpendicular_distance(points[i], points[start], points[end]);
            if distance > max_distance {
                max_distance = distance;
                max_index = i;
            }
        }

        if max_index > start && max_distance > tolerance {
            kept[max_index] = true;
            pending.push((max_index, end));
            pending.push((start, max_index));
        }
    }

    points
        .iter()
        .zip(&kept)
        .filter(|(_, keep)| **keep)
        .map(|(point, _)| *point)
        .collect()
}
