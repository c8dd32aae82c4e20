//! Rectilinear polygons built by merging adjacent rectangles.
//!
//! Merging works on directed edges. Every rectangle is traversed in the same
//! rotational direction, so the edge two adjacent rectangles share appears
//! once in each direction and the pair cancels out. What is left are the
//! outer boundary and the boundaries of holes, which are chained back into
//! contours.

use crate::geometry::Point;
use crate::geometry::Rectangle;
use itertools::Itertools as _;
use registry::SegmentRegistry;

mod contour;
mod registry;
mod segment;

pub use contour::Contour;
pub use segment::Segment;

/// A set of contours. Filled contours have a negative signed area, holes a
/// positive one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    contours: Vec<Contour>,
}

impl Polygon {
    /// A single contour going top-left, bottom-left, bottom-right, top-right.
    pub fn from_rectangle(rectangle: &Rectangle) -> Polygon {
        Polygon {
            contours: vec![Contour::new(vec![
                rectangle.top_left(),
                rectangle.bottom_left(),
                rectangle.bottom_right(),
                rectangle.top_right(),
            ])],
        }
    }

    pub fn from_contours(contours: Vec<Contour>) -> Polygon {
        Polygon { contours }
    }

    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    pub fn into_contours(self) -> Vec<Contour> {
        self.contours
    }

    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Every vertex of every contour.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.contours
            .iter()
            .flat_map(|contour| contour.points().iter().copied())
    }

    /// Replaces the contours of `self` by the union of `self` and `other`.
    ///
    /// Both polygons must come from non-overlapping rectangles with the
    /// orientation of [Polygon::from_rectangle]. Edges they share, fully or
    /// partially, disappear from the result.
    ///
    /// # Panics
    ///
    /// If the edges do not chain back into closed contours, which happens
    /// when the polygons overlap.
    pub fn merge(&mut self, other: Polygon) {
        let own_vertices: Vec<Point> = self.points().collect();
        let other_vertices: Vec<Point> = other.points().collect();

        let mut registry = SegmentRegistry::default();
        for contour in &self.contours {
            for segment in contour.split_at(&other_vertices).segments() {
                registry.insert(segment);
            }
        }
        for contour in &other.contours {
            for segment in contour.split_at(&own_vertices).segments() {
                if !registry.remove(segment.reversed()) {
                    registry.insert(segment);
                }
            }
        }

        self.contours = registry.into_contours();
    }

    /// The union of non-overlapping rectangles, in a single pass.
    ///
    /// Every edge is split at the rectangle corners lying inside it, so that
    /// shared pieces cancel out whatever the order of the rectangles. Edges
    /// go around each rectangle from its top-left corner, in the orientation
    /// of [Polygon::from_rectangle]. Empty rectangles are skipped, and the
    /// result is not simplified.
    ///
    /// # Panics
    ///
    /// If the rectangles overlap.
    pub fn from_rectangles(rectangles: &[Rectangle]) -> Polygon {
        let rectangles: Vec<&Rectangle> = rectangles.iter().filter(|r| !r.is_empty()).collect();
        let junctions = Junctions::new(&rectangles);

        let mut registry = SegmentRegistry::default();
        let mut pieces = Vec::new();
        for rectangle in rectangles {
            let corners = [
                rectangle.top_left(),
                rectangle.bottom_left(),
                rectangle.bottom_right(),
                rectangle.top_right(),
            ];
            for (i, start) in corners.iter().enumerate() {
                junctions.split(Segment::new(*start, corners[(i + 1) % 4]), &mut pieces);
            }
            for piece in pieces.drain(..) {
                if !registry.remove(piece.reversed()) {
                    registry.insert(piece);
                }
            }
        }

        Polygon {
            contours: registry.into_contours(),
        }
    }

    /// Removes points in the middle of straight runs, and contours left with
    /// no area.
    pub fn simplify(&mut self) {
        for contour in &mut self.contours {
            contour.simplify();
        }
        self.contours.retain(|contour| !contour.is_empty());
    }

    /// Sum of the contours' signed areas: negative when fills outweigh holes.
    pub fn area(&self) -> f64 {
        self.contours.iter().map(Contour::signed_area).sum()
    }

    pub fn bounding_box(&self) -> Option<Rectangle> {
        let points: Vec<Point> = self.points().collect();
        Rectangle::bounding(&points)
    }

    /// Area-weighted center, or `None` if the polygon has no area.
    pub fn centroid(&self) -> Option<Point> {
        let mut x = 0.0;
        let mut y = 0.0;
        for segment in self.contours.iter().flat_map(Contour::segments) {
            let (a, b) = (segment.start, segment.end);
            let f = a.x * b.y - b.x * a.y;
            x += (a.x + b.x) * f;
            y += (a.y + b.y) * f;
        }
        let f = self.area() * 6.0;
        if f == 0.0 {
            return None;
        }
        Some(Point::new(x / f, y / f))
    }

    /// Whether holes cover more area than fills.
    pub fn is_mostly_hollow(&self) -> bool {
        let (solid, hollow) = self
            .contours
            .iter()
            .map(Contour::signed_area)
            .fold((0.0, 0.0), |(solid, hollow), area| {
                if area < 0.0 {
                    (solid - area, hollow)
                } else {
                    (solid, hollow + area)
                }
            });
        hollow > solid
    }

    pub fn translate(&mut self, offset: Point) {
        for contour in &mut self.contours {
            contour.translate(offset);
        }
    }

    /// Whether the bounding box of the polygon overlaps `rectangle`.
    pub fn intersects(&self, rectangle: &Rectangle) -> bool {
        self.bounding_box()
            .map_or(false, |bbox| bbox.intersects(rectangle))
    }

    /// The `d` attribute of an SVG path drawing every contour.
    ///
    /// ```rust
    /// use rectiles::Polygon;
    /// use rectiles::Rectangle;
    ///
    /// let polygon = Polygon::from_rectangle(&Rectangle::new(0.0, 0.0, 1.0, 2.0));
    /// assert_eq!(polygon.to_svg_path_string(), "M0,0 0,2 1,2 1,0 0,0");
    /// ```
    pub fn to_svg_path_string(&self) -> String {
        if self.contours.is_empty() {
            return String::new();
        }
        let contours = self
            .contours
            .iter()
            .map(Contour::to_svg_path_string)
            .join("\n M");
        format!("M{contours}")
    }
}

/// Rectangle corners sorted along rows and columns.
struct Junctions {
    by_row: Vec<Point>,
    by_column: Vec<Point>,
}

impl Junctions {
    fn new(rectangles: &[&Rectangle]) -> Junctions {
        let mut by_row: Vec<Point> = rectangles.iter().flat_map(|r| r.corners()).collect();
        by_row.sort_unstable_by(|a, b| a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)));
        by_row.dedup();
        let mut by_column = by_row.clone();
        by_column.sort_unstable_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        Junctions { by_row, by_column }
    }

    /// Pushes the pieces of the axis-aligned `edge` cut at every corner lying
    /// strictly inside it, from start to end.
    fn split(&self, edge: Segment, pieces: &mut Vec<Segment>) {
        let (a, b) = (edge.start, edge.end);
        let inside = if a.y == b.y {
            let line = |p: &Point| p.y.total_cmp(&a.y);
            let (lo, hi) = (a.x.min(b.x), a.x.max(b.x));
            let from = self
                .by_row
                .partition_point(|p| line(p).then(p.x.total_cmp(&lo)).is_le());
            let to = self
                .by_row
                .partition_point(|p| line(p).then(p.x.total_cmp(&hi)).is_lt());
            &self.by_row[from..to.max(from)]
        } else {
            let line = |p: &Point| p.x.total_cmp(&a.x);
            let (lo, hi) = (a.y.min(b.y), a.y.max(b.y));
            let from = self
                .by_column
                .partition_point(|p| line(p).then(p.y.total_cmp(&lo)).is_le());
            let to = self
                .by_column
                .partition_point(|p| line(p).then(p.y.total_cmp(&hi)).is_lt());
            &self.by_column[from..to.max(from)]
        };

        let mut start = a;
        let mut cut = |p: Point| {
            pieces.push(Segment::new(start, p));
            start = p;
        };
        if a.x < b.x || a.y < b.y {
            inside.iter().copied().for_each(&mut cut);
        } else {
            inside.iter().rev().copied().for_each(&mut cut);
        }
        cut(b);
    }
}
