use crate::constants::CAR_WIDTH;

/// One straight piece of a rail path.
///
/// Endpoints are snapped up to whole pixels so adjacent rails that share a
/// junction point meet exactly on screen. Spans always run west to east
/// (`x1 <= x2`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSpan {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl TrackSpan {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: x1.ceil(),
            y1: y1.ceil(),
            x2: x2.ceil(),
            y2: y2.ceil(),
        }
    }

    fn contains_x(&self, x: f64) -> bool {
        self.x1 <= x && x <= self.x2
    }

    fn y_at(&self, x: f64) -> f64 {
        let slope = (self.y2 - self.y1) / (self.x2 - self.x1);
        self.y1 + slope * (x - self.x1)
    }

    fn angle(&self) -> f64 {
        (self.y2 - self.y1).atan2(self.x2 - self.x1)
    }
}

/// A piecewise-linear rail path, spans ordered west to east.
///
/// Purely geometric and immutable after construction; every train on the
/// rail shares it read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Rail {
    spans: Vec<TrackSpan>,
}

impl Rail {
    /// Callers must supply at least one span; `TrackLayout` guarantees this
    /// for every rail it constructs.
    #[must_use]
    pub fn new(spans: Vec<TrackSpan>) -> Self {
        debug_assert!(!spans.is_empty(), "rail needs at least one span");
        Self { spans }
    }

    #[must_use]
    pub fn spans(&self) -> &[TrackSpan] {
        &self.spans
    }

    /// Car center y for a given x, offset up by half a car width so the car
    /// body straddles the rail line. Outside every span (off-screen run-out)
    /// this falls back to the first span's terminal y, with no extrapolation.
    #[must_use]
    pub fn y_at(&self, x: f64) -> f64 {
        for span in &self.spans {
            if span.contains_x(x) {
                return span.y_at(x) - CAR_WIDTH / 2.0;
            }
        }
        self.spans[0].y2 - CAR_WIDTH / 2.0
    }

    /// Local slope angle in radians at x, or 0 outside every span.
    #[must_use]
    pub fn angle_at(&self, x: f64) -> f64 {
        for span in &self.spans {
            if span.contains_x(x) {
                return span.angle();
            }
        }
        0.0
    }

    /// Westmost x of the path.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.spans[0].x1
    }

    /// Eastmost x of the path.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.spans[self.spans.len() - 1].x2
    }

    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.left() + self.right()) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch_rail() -> Rail {
        // Rises from y=300 to y=200, runs flat, descends back: the shape of
        // every side path in the yard.
        Rail::new(vec![
            TrackSpan::new(100.0, 300.0, 200.0, 200.0),
            TrackSpan::new(200.0, 200.0, 300.0, 200.0),
            TrackSpan::new(300.0, 200.0, 400.0, 300.0),
        ])
    }

    #[test]
    fn interpolates_y_along_the_matching_span() {
        let rail = branch_rail();
        // Halfway up the first incline: y = 250, minus half a car width.
        assert!((rail.y_at(150.0) - (250.0 - CAR_WIDTH / 2.0)).abs() < 1e-9);
        // On the flat stretch.
        assert!((rail.y_at(250.0) - (200.0 - CAR_WIDTH / 2.0)).abs() < 1e-9);
    }

    #[test]
    fn falls_back_to_first_span_terminal_outside_bounds() {
        let rail = branch_rail();
        let expected = 200.0 - CAR_WIDTH / 2.0;
        assert!((rail.y_at(50.0) - expected).abs() < 1e-9);
        assert!((rail.y_at(450.0) - expected).abs() < 1e-9);
    }

    #[test]
    fn angle_follows_span_slope() {
        let rail = branch_rail();
        assert!((rail.angle_at(150.0) - (-100.0f64).atan2(100.0)).abs() < 1e-9);
        assert!(rail.angle_at(250.0).abs() < 1e-9);
        assert!(rail.angle_at(999.0).abs() < 1e-9);
    }

    #[test]
    fn bounds_and_midpoint() {
        let rail = branch_rail();
        assert_eq!(rail.left(), 100.0);
        assert_eq!(rail.right(), 400.0);
        assert_eq!(rail.midpoint(), 250.0);
    }

    #[test]
    fn span_endpoints_snap_up_to_whole_pixels() {
        let span = TrackSpan::new(0.3, 1.2, 10.7, 2.0);
        assert_eq!(span.x1, 1.0);
        assert_eq!(span.y1, 2.0);
        assert_eq!(span.x2, 11.0);
        assert_eq!(span.y2, 2.0);
    }
}
