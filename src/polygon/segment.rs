use crate::geometry::Point;
use std::fmt;

/// A directed edge between two points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn reversed(self) -> Self {
        Self::new(self.end, self.start)
    }

    /// Whether both segments connect the same two points, in either
    /// direction.
    pub fn is_duplicate_of(&self, other: &Segment) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// The point where both segments cross, if any.
    ///
    /// Returns `None` for parallel (including collinear) segments and for
    /// zero-length ones.
    pub fn intersection(&self, other: &Segment) -> Option<Point> {
        if self.is_degenerate() || other.is_degenerate() {
            return None;
        }
        let d1 = self.end - self.start;
        let d2 = other.end - other.start;
        let denominator = d2.y * d1.x - d2.x * d1.y;
        if denominator == 0.0 {
            return None;
        }

        let offset = self.start - other.start;
        let ua = (d2.x * offset.y - d2.y * offset.x) / denominator;
        let ub = (d1.x * offset.y - d1.y * offset.x) / denominator;
        if !(0.0..=1.0).contains(&ua) || !(0.0..=1.0).contains(&ub) {
            return None;
        }

        Some(Point::new(
            self.start.x + ua * d1.x,
            self.start.y + ua * d1.y,
        ))
    }

    /// Same as [Segment::intersection], except segments sharing an endpoint
    /// never intersect.
    pub fn strict_intersection(&self, other: &Segment) -> Option<Point> {
        if self.start == other.start
            || self.start == other.end
            || self.end == other.start
            || self.end == other.end
        {
            return None;
        }
        self.intersection(other)
    }

    /// Whether `p` lies on the segment, endpoints excluded.
    pub fn contains_strictly(&self, p: Point) -> bool {
        let d = self.end - self.start;
        let v = p - self.start;
        let cross = d.x * v.y - d.y * v.x;
        if cross != 0.0 {
            return false;
        }
        let dot = d.x * v.x + d.y * v.y;
        0.0 < dot && dot < d.x * d.x + d.y * d.y
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(Point::new(x1, y1), Point::new(x2, y2))
    }

    #[test]
    fn test_duplicates() {
        let s = segment(0., 0., 1., 2.);
        assert!(s.is_duplicate_of(&s));
        assert!(s.is_duplicate_of(&s.reversed()));
        assert!(!s.is_duplicate_of(&segment(0., 0., 2., 1.)));
    }

    #[test]
    fn test_intersection() {
        let a = segment(0., 0., 2., 2.);
        let b = segment(0., 2., 2., 0.);
        assert_eq!(a.intersection(&b), Some(Point::new(1., 1.)));
        assert_eq!(a.strict_intersection(&b), Some(Point::new(1., 1.)));

        // Parallel and collinear segments.
        assert_eq!(a.intersection(&segment(1., 0., 3., 2.)), None);
        assert_eq!(a.intersection(&segment(1., 1., 3., 3.)), None);

        // Crossing lines, but not within the segments.
        assert_eq!(a.intersection(&segment(3., 0., 4., -1.)), None);

        // Zero-length segments.
        assert_eq!(a.intersection(&segment(1., 1., 1., 1.)), None);
    }

    #[test]
    fn test_strict_intersection_ignores_endpoints() {
        let a = segment(0., 0., 2., 0.);
        let b = segment(2., 0., 2., 2.);
        assert_eq!(a.intersection(&b), Some(Point::new(2., 0.)));
        assert_eq!(a.strict_intersection(&b), None);
    }

    #[test]
    fn test_contains_strictly() {
        let s = segment(0., 0., 4., 0.);
        assert!(s.contains_strictly(Point::new(1., 0.)));
        assert!(!s.contains_strictly(Point::new(0., 0.)));
        assert!(!s.contains_strictly(Point::new(4., 0.)));
        assert!(!s.contains_strictly(Point::new(5., 0.)));
        assert!(!s.contains_strictly(Point::new(1., 1.)));
        assert!(segment(0., 4., 0., 0.).contains_strictly(Point::new(0., 3.)));
    }
}
