use super::Segment;
use crate::geometry::Point;
use crate::geometry::Rectangle;
use itertools::Itertools as _;

/// A closed loop of points. The last point connects back to the first one.
///
/// The traversal direction tells fills from holes: in screen coordinates, a
/// filled contour has a negative signed area and a hole a positive one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Contour {
    points: Vec<Point>,
}

impl Contour {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The edges of the contour, starting with the closing edge from the last
    /// point to the first one.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.points
            .last()
            .into_iter()
            .chain(&self.points)
            .tuple_windows()
            .map(|(start, end)| Segment::new(*start, *end))
    }

    /// Shoelace area. Negative for fills, positive for holes.
    pub fn signed_area(&self) -> f64 {
        self.segments()
            .map(|s| s.start.x * s.end.y - s.end.x * s.start.y)
            .sum::<f64>()
            / 2.0
    }

    pub fn is_hole(&self) -> bool {
        self.signed_area() > 0.0
    }

    pub fn bounding_box(&self) -> Option<Rectangle> {
        Rectangle::bounding(&self.points)
    }

    pub fn translate(&mut self, offset: Point) {
        for p in &mut self.points {
            *p = *p + offset;
        }
    }

    /// A copy of the contour where every vertex that lies strictly inside an
    /// edge is inserted into that edge.
    pub(crate) fn split_at(&self, vertices: &[Point]) -> Contour {
        let n = self.points.len();
        let mut points = Vec::with_capacity(n);
        for (i, start) in self.points.iter().enumerate() {
            let edge = Segment::new(*start, self.points[(i + 1) % n]);
            points.push(*start);

            let mut on_edge: Vec<Point> = vertices
                .iter()
                .copied()
                .filter(|v| edge.contains_strictly(*v))
                .unique()
                .collect();
            let distance = |p: &Point| {
                let d = *p - edge.start;
                d.x * d.x + d.y * d.y
            };
            on_edge.sort_by(|a, b| distance(a).total_cmp(&distance(b)));
            points.extend(on_edge);
        }
        Contour { points }
    }

    /// Removes points in the middle of straight runs, until there are none
    /// left. Contours with no area collapse to nothing.
    pub fn simplify(&mut self) {
        loop {
            let mut changed = false;
            let mut i = 0;
            while i < self.points.len() {
                let n = self.points.len();
                let p = self.points[i];
                let next = self.points[(i + 1) % n];
                let after = self.points[(i + 2) % n];
                if is_straight(p, next, after) {
                    self.points.remove((i + 1) % n);
                    changed = true;
                } else {
                    i += 1;
                }
            }
            if !changed {
                break;
            }
        }
    }

    /// The contour as SVG path coordinates, closing point included.
    pub fn to_svg_path_string(&self) -> String {
        self.points
            .iter()
            .chain(self.points.first())
            .map(|p| format!("{},{}", p.x, p.y))
            .join(" ")
    }
}

/// Whether `next` sits on a straight line from `p` to `after`.
fn is_straight(p: Point, next: Point, after: Point) -> bool {
    if p.x == next.x && next.x == after.x {
        return true;
    }
    // Division by zero gives infinities for vertical steps and NaN for
    // repeated points, which never compare equal.
    let slope = |a: Point, b: Point| (b.y - a.y) / (b.x - a.x);
    slope(p, next) == slope(next, after)
}
