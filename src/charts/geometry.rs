//! Ring-chart geometry, kept free of rendering types so it can be tested
//! without a terminal.
//!
//! Angles use "sweep" degrees: clockwise from 12 o'clock, 0..360. The
//! conversion to standard math angles (counter-clockwise from the x-axis,
//! y pointing up) happens in one place, `polar_point`.

/// Inner radius of the ring band, in canvas units
pub const INNER_RADIUS: f64 = 60.0;
/// Outer radius of the ring band
pub const OUTER_RADIUS: f64 = 80.0;
/// Highlight arc drawn over the active wedge, offset from the outer radius
pub const HIGHLIGHT_INNER: f64 = OUTER_RADIUS + 6.0;
pub const HIGHLIGHT_OUTER: f64 = OUTER_RADIUS + 10.0;
/// Leader line: starts just off the wedge, bends, then runs horizontally
pub const LEADER_START_OFFSET: f64 = 10.0;
pub const LEADER_ELBOW_OFFSET: f64 = 30.0;
pub const LEADER_TAIL: f64 = 22.0;
/// Gap between the leader tail and the value/percentage label
pub const LABEL_GAP: f64 = 12.0;

/// Angular extent of one slice
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceGeometry {
    pub index: usize,
    pub sweep_start: f64,
    pub sweep_end: f64,
    pub fraction: f64,
}

impl SliceGeometry {
    pub fn mid_sweep(&self) -> f64 {
        (self.sweep_start + self.sweep_end) / 2.0
    }

    pub fn contains(&self, sweep: f64) -> bool {
        sweep >= self.sweep_start && sweep < self.sweep_end
    }
}

/// Anchor points for the expanded active-wedge callout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveShape {
    /// Start of the leader line, just outside the highlight arc
    pub anchor: (f64, f64),
    /// Bend point of the leader line
    pub elbow: (f64, f64),
    /// End of the horizontal tail; the label sits past this point
    pub tail: (f64, f64),
    /// True when the callout points right (label text reads rightward)
    pub points_right: bool,
}

/// Split the full circle into slices proportional to `values`.
/// Zero-valued slices get a zero-width span and remain addressable.
pub fn slice_geometries(values: &[u64]) -> Vec<SliceGeometry> {
    let total: u64 = values.iter().sum();
    if total == 0 {
        return values
            .iter()
            .enumerate()
            .map(|(index, _)| SliceGeometry {
                index,
                sweep_start: 0.0,
                sweep_end: 0.0,
                fraction: 0.0,
            })
            .collect();
    }

    let mut cursor = 0.0;
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let fraction = value as f64 / total as f64;
            let span = fraction * 360.0;
            let geometry = SliceGeometry {
                index,
                sweep_start: cursor,
                sweep_end: cursor + span,
                fraction,
            };
            cursor += span;
            geometry
        })
        .collect()
}

/// Percentage of the total held by `values[index]`, 0..100
pub fn percent_of_total(values: &[u64], index: usize) -> f64 {
    let total: u64 = values.iter().sum();
    if total == 0 {
        return 0.0;
    }
    values[index] as f64 / total as f64 * 100.0
}

/// Point on the circle of radius `radius` at the given sweep angle
pub fn polar_point(cx: f64, cy: f64, radius: f64, sweep: f64) -> (f64, f64) {
    let theta = (90.0 - sweep).to_radians();
    (cx + radius * theta.cos(), cy + radius * theta.sin())
}

/// Sampled points along an arc of the ring, for painting
pub fn arc_points(
    cx: f64,
    cy: f64,
    radius: f64,
    sweep_start: f64,
    sweep_end: f64,
    step: f64,
) -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    let mut sweep = sweep_start;
    while sweep <= sweep_end {
        points.push(polar_point(cx, cy, radius, sweep));
        sweep += step;
    }
    points.push(polar_point(cx, cy, radius, sweep_end));
    points
}

/// Callout geometry for the active wedge, mirroring the ring renderer's
/// fixed offsets: anchor at outer+10, elbow at outer+30, horizontal tail
/// of 22 units toward the nearer side of the chart.
pub fn active_shape(cx: f64, cy: f64, outer_radius: f64, mid_sweep: f64) -> ActiveShape {
    let anchor = polar_point(cx, cy, outer_radius + LEADER_START_OFFSET, mid_sweep);
    let elbow = polar_point(cx, cy, outer_radius + LEADER_ELBOW_OFFSET, mid_sweep);

    let theta = (90.0 - mid_sweep).to_radians();
    let points_right = theta.cos() >= 0.0;
    let direction = if points_right { 1.0 } else { -1.0 };
    let tail = (elbow.0 + direction * LEADER_TAIL, elbow.1);

    ActiveShape {
        anchor,
        elbow,
        tail,
        points_right,
    }
}

/// Map a point in canvas coordinates back to the slice under it.
/// Returns `None` off the ring band; any `Some` index is in range.
pub fn hit_test(
    x: f64,
    y: f64,
    cx: f64,
    cy: f64,
    r_min: f64,
    r_max: f64,
    slices: &[SliceGeometry],
) -> Option<usize> {
    let dx = x - cx;
    let dy = y - cy;
    let radius = (dx * dx + dy * dy).sqrt();
    if radius < r_min || radius > r_max {
        return None;
    }

    let theta = dy.atan2(dx).to_degrees();
    let sweep = (90.0 - theta).rem_euclid(360.0);
    slices.iter().find(|s| s.contains(sweep)).map(|s| s.index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const DEMO_VALUES: [u64; 4] = [400, 300, 100, 200];

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_slice_spans_are_proportional() {
        let slices = slice_geometries(&DEMO_VALUES);

        assert_eq!(slices.len(), 4);
        assert_close(slices[0].sweep_start, 0.0);
        assert_close(slices[0].sweep_end, 144.0);
        assert_close(slices[1].sweep_end, 252.0);
        assert_close(slices[2].sweep_end, 288.0);
        assert_close(slices[3].sweep_end, 360.0);
        assert_close(slices[0].fraction, 0.4);
    }

    #[test]
    fn test_percent_of_total() {
        assert_close(percent_of_total(&DEMO_VALUES, 0), 40.0);
        assert_close(percent_of_total(&DEMO_VALUES, 1), 30.0);
        assert_close(percent_of_total(&DEMO_VALUES, 2), 10.0);
        assert_close(percent_of_total(&DEMO_VALUES, 3), 20.0);
        assert_close(percent_of_total(&[0, 0], 0), 0.0);
    }

    #[test]
    fn test_polar_point_cardinal_directions() {
        let (x, y) = polar_point(0.0, 0.0, 80.0, 0.0);
        assert_close(x, 0.0);
        assert_close(y, 80.0);

        let (x, y) = polar_point(0.0, 0.0, 80.0, 90.0);
        assert_close(x, 80.0);
        assert_close(y, 0.0);

        let (x, y) = polar_point(0.0, 0.0, 80.0, 180.0);
        assert_close(x, 0.0);
        assert_close(y, -80.0);
    }

    #[test]
    fn test_active_shape_sides() {
        // First demo slice peaks at sweep 72, on the right half
        let shape = active_shape(0.0, 0.0, OUTER_RADIUS, 72.0);
        assert!(shape.points_right);
        assert_close(shape.tail.0, shape.elbow.0 + LEADER_TAIL);
        assert_close(shape.tail.1, shape.elbow.1);

        let theta = (90.0_f64 - 72.0).to_radians();
        assert_close(shape.anchor.0, 90.0 * theta.cos());
        assert_close(shape.anchor.1, 90.0 * theta.sin());

        // Maintenance slice peaks at sweep 270, pointing left
        let shape = active_shape(0.0, 0.0, OUTER_RADIUS, 270.0);
        assert!(!shape.points_right);
        assert_close(shape.tail.0, shape.elbow.0 - LEADER_TAIL);
    }

    #[test]
    fn test_hit_test_resolves_wedges() {
        let slices = slice_geometries(&DEMO_VALUES);

        let (x, y) = polar_point(0.0, 0.0, 70.0, 72.0);
        assert_eq!(hit_test(x, y, 0.0, 0.0, INNER_RADIUS, HIGHLIGHT_OUTER, &slices), Some(0));

        let (x, y) = polar_point(0.0, 0.0, 70.0, 200.0);
        assert_eq!(hit_test(x, y, 0.0, 0.0, INNER_RADIUS, HIGHLIGHT_OUTER, &slices), Some(1));

        let (x, y) = polar_point(0.0, 0.0, 70.0, 300.0);
        assert_eq!(hit_test(x, y, 0.0, 0.0, INNER_RADIUS, HIGHLIGHT_OUTER, &slices), Some(3));

        // Inside the hole and outside the band both miss
        assert_eq!(hit_test(10.0, 10.0, 0.0, 0.0, INNER_RADIUS, HIGHLIGHT_OUTER, &slices), None);
        assert_eq!(hit_test(0.0, 150.0, 0.0, 0.0, INNER_RADIUS, HIGHLIGHT_OUTER, &slices), None);
    }

    #[test]
    fn test_arc_points_cover_the_span() {
        let points = arc_points(0.0, 0.0, OUTER_RADIUS, 0.0, 90.0, 5.0);
        assert!(points.len() >= 19);

        for (x, y) in points {
            let radius = (x * x + y * y).sqrt();
            assert_close(radius, OUTER_RADIUS);
        }
    }
}
