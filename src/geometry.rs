//! Points and axis-aligned rectangles in screen coordinates (y grows
//! downwards).

use approx::AbsDiffEq;
use approx::RelativeEq;
use approx::UlpsEq;
use itertools::Itertools as _;
use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;
use std::ops::Add;
use std::ops::Sub;

/// A point of the plane.
///
/// Equality is exact. Coordinates are expected to be finite; NaN coordinates
/// break the `Eq` and `Hash` contracts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn floor(self) -> Self {
        Self::new(self.x.floor(), self.y.floor())
    }

    pub fn round(self) -> Self {
        Self::new(self.x.round(), self.y.round())
    }

    pub fn ceil(self) -> Self {
        Self::new(self.x.ceil(), self.y.ceil())
    }
}

impl Eq for Point {}

// -0.0 and 0.0 compare equal, so they must hash the same.
fn coordinate_bits(v: f64) -> u64 {
    if v == 0.0 {
        0
    } else {
        v.to_bits()
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        coordinate_bits(self.x).hash(state);
        coordinate_bits(self.y).hash(state);
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl AbsDiffEq for Point {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon) && self.y.abs_diff_eq(&other.y, epsilon)
    }
}

impl RelativeEq for Point {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
    }
}

impl UlpsEq for Point {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps) && self.y.ulps_eq(&other.y, epsilon, max_ulps)
    }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// The "top-left, most square" order, relative to `origin`.
///
/// Points closer to `origin` in Manhattan distance come first. On ties, the
/// point spanning the larger rectangle with `origin` (the more square one)
/// comes first, then the one with the larger x.
pub fn cmp_top_left(a: Point, b: Point, origin: Point) -> Ordering {
    let a = a - origin;
    let b = b - origin;
    cmp_f64(a.x + a.y, b.x + b.y)
        .then_with(|| cmp_f64(b.x * b.y, a.x * a.y))
        .then_with(|| cmp_f64(b.x, a.x))
        .then_with(|| cmp_f64(a.y, b.y))
}

/// An axis-aligned rectangle.
///
/// Constructors normalize their input, so `left <= right` and `top <= bottom`
/// always hold. Width and height may be zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl Rectangle {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_sides(x, y, x + width, y + height)
    }

    pub fn from_sides(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left: f64::min(left, right),
            top: f64::min(top, bottom),
            right: f64::max(left, right),
            bottom: f64::max(top, bottom),
        }
    }

    /// The rectangle spanned by two opposite corners, given in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::from_sides(a.x, a.y, b.x, b.y)
    }

    /// The smallest rectangle containing all the given points, or `None` if
    /// there are none.
    pub fn bounding(points: &[Point]) -> Option<Self> {
        let (left, right) = points.iter().map(|p| p.x).minmax().into_option()?;
        let (top, bottom) = points.iter().map(|p| p.y).minmax().into_option()?;
        Some(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    pub fn x(&self) -> f64 {
        self.left
    }

    pub fn y(&self) -> f64 {
        self.top
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.right, self.top)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.left, self.bottom)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.right, self.bottom)
    }

    /// The four corners: top-left, top-right, bottom-left, bottom-right.
    pub fn corners(&self) -> [Point; 4] {
        [
            self.top_left(),
            self.top_right(),
            self.bottom_left(),
            self.bottom_right(),
        ]
    }

    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Whether the rectangle has no area.
    pub fn is_empty(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// Closed containment, borders included.
    pub fn contains(&self, p: Point) -> bool {
        self.left <= p.x && p.x <= self.right && self.top <= p.y && p.y <= self.bottom
    }

    /// Containment excluding the right and bottom borders.
    pub fn contains_end_exclusive(&self, p: Point) -> bool {
        self.left <= p.x && p.x < self.right && self.top <= p.y && p.y < self.bottom
    }

    /// Containment in the open interior.
    pub fn contains_strictly(&self, p: Point) -> bool {
        self.left < p.x && p.x < self.right && self.top < p.y && p.y < self.bottom
    }

    /// Whether both interiors overlap.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        self.left < other.right
            && other.left < self.right
            && self.top < other.bottom
            && other.top < self.bottom
    }

    /// Whether the rectangles overlap or share part of their border.
    pub fn intersects_or_touches(&self, other: &Rectangle) -> bool {
        self.left <= other.right
            && other.left <= self.right
            && self.top <= other.bottom
            && other.top <= self.bottom
    }

    pub fn union(&self, other: &Rectangle) -> Rectangle {
        Rectangle {
            left: f64::min(self.left, other.left),
            top: f64::min(self.top, other.top),
            right: f64::max(self.right, other.right),
            bottom: f64::max(self.bottom, other.bottom),
        }
    }

    /// Grows every side outwards by the given margins. Negative margins
    /// shrink the rectangle, down to zero.
    pub fn inflate(&self, dx: f64, dy: f64) -> Rectangle {
        let center = Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        );
        Rectangle::from_sides(
            f64::min(self.left - dx, center.x),
            f64::min(self.top - dy, center.y),
            f64::max(self.right + dx, center.x),
            f64::max(self.bottom + dy, center.y),
        )
    }

    pub fn translate(&self, offset: Point) -> Rectangle {
        Rectangle {
            left: self.left + offset.x,
            top: self.top + offset.y,
            right: self.right + offset.x,
            bottom: self.bottom + offset.y,
        }
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}x{}]",
            self.left,
            self.top,
            self.width(),
            self.height(),
        )
    }
}

impl AbsDiffEq for Rectangle {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.top_left().abs_diff_eq(&other.top_left(), epsilon)
            && self.bottom_right().abs_diff_eq(&other.bottom_right(), epsilon)
    }
}

impl RelativeEq for Rectangle {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.top_left()
            .relative_eq(&other.top_left(), epsilon, max_relative)
            && self
                .bottom_right()
                .relative_eq(&other.bottom_right(), epsilon, max_relative)
    }
}

impl UlpsEq for Rectangle {
    fn default_max_ulps() -> u32 {
        f64::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f64, max_ulps: u32) -> bool {
        self.top_left()
            .ulps_eq(&other.top_left(), epsilon, max_ulps)
            && self
                .bottom_right()
                .ulps_eq(&other.bottom_right(), epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_ulps_eq;
    use std::collections::HashSet;

    #[test]
    fn test_point_hash_zero_sign() {
        let mut set = HashSet::new();
        set.insert(Point::new(0.0, 1.0));
        assert!(set.contains(&Point::new(-0.0, 1.0)));
        assert!(!set.contains(&Point::new(1.0, 0.0)));
    }

    #[test]
    fn test_point_rounding() {
        let p = Point::new(1.5, -2.25);
        assert_eq!(p.floor(), Point::new(1.0, -3.0));
        assert_eq!(p.round(), Point::new(2.0, -2.0));
        assert_eq!(p.ceil(), Point::new(2.0, -2.0));
        assert_eq!(p.to_string(), "(1.5, -2.25)");
    }

    #[test]
    fn test_cmp_top_left() {
        let origin = Point::new(0.0, 0.0);
        let mut points = vec![
            Point::new(2.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 2.0),
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ];
        points.sort_by(|a, b| cmp_top_left(*a, *b, origin));
        assert_eq!(
            points,
            [
                Point::new(0.0, 0.0),
                Point::new(1.0, 0.0),
                Point::new(0.0, 1.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, 0.0),
                Point::new(0.0, 2.0),
            ]
        );

        // The order only depends on offsets from the origin.
        let origin = Point::new(10.0, -5.0);
        assert_eq!(
            cmp_top_left(Point::new(11.0, -5.0), Point::new(10.0, -4.0), origin),
            Ordering::Less,
        );
    }

    #[test]
    fn test_rectangle_normalizes() {
        let r = Rectangle::from_corners(Point::new(3.0, 1.0), Point::new(1.0, 4.0));
        assert_eq!(r, Rectangle::from_sides(1.0, 1.0, 3.0, 4.0));
        assert_eq!(r, Rectangle::new(3.0, 4.0, -2.0, -3.0));
        assert_eq!(r.width(), 2.0);
        assert_eq!(r.height(), 3.0);
        assert_eq!(r.area(), 6.0);
        assert_eq!(
            r.corners(),
            [
                Point::new(1.0, 1.0),
                Point::new(3.0, 1.0),
                Point::new(1.0, 4.0),
                Point::new(3.0, 4.0),
            ]
        );
    }

    #[test]
    fn test_rectangle_bounding() {
        assert_eq!(Rectangle::bounding(&[]), None);
        let single = Rectangle::bounding(&[Point::new(2.0, 3.0)]).unwrap();
        assert!(single.is_empty());
        let bbox = Rectangle::bounding(&[
            Point::new(1.0, 2.0),
            Point::new(0.0, 0.0),
            Point::new(3.0, 1.0),
            Point::new(5.0, 4.0),
        ])
        .unwrap();
        assert_eq!(bbox, Rectangle::new(0.0, 0.0, 5.0, 4.0));
    }

    #[test]
    fn test_rectangle_containment() {
        let r = Rectangle::new(0.0, 0.0, 2.0, 2.0);
        let corner = Point::new(2.0, 2.0);
        let edge = Point::new(0.0, 1.0);
        let inside = Point::new(1.0, 1.0);

        assert!(r.contains(corner));
        assert!(!r.contains_end_exclusive(corner));
        assert!(!r.contains_strictly(corner));

        assert!(r.contains(edge));
        assert!(r.contains_end_exclusive(edge));
        assert!(!r.contains_strictly(edge));

        assert!(r.contains_strictly(inside));
        assert!(!r.contains(Point::new(2.5, 1.0)));
    }

    #[test]
    fn test_rectangle_relations() {
        let a = Rectangle::new(0.0, 0.0, 2.0, 2.0);
        let b = Rectangle::new(2.0, 0.0, 1.0, 1.0);
        let c = Rectangle::new(1.0, 1.0, 2.0, 2.0);

        assert!(!a.intersects(&b));
        assert!(a.intersects_or_touches(&b));
        assert!(a.intersects(&c));
        assert_eq!(a.union(&b), Rectangle::new(0.0, 0.0, 3.0, 2.0));
        assert_eq!(
            a.translate(Point::new(1.0, -1.0)),
            Rectangle::new(1.0, -1.0, 2.0, 2.0)
        );
        assert_eq!(a.inflate(1.0, 0.5), Rectangle::new(-1.0, -0.5, 4.0, 3.0));
        assert_eq!(a.inflate(-5.0, 0.0), Rectangle::new(1.0, 0.0, 0.0, 2.0));
        assert_eq!(a.to_string(), "[0, 0, 2x2]");
    }

    #[test]
    fn test_rectangle_approx() {
        let a = Rectangle::new(0.1 + 0.2, 0.0, 1.0, 1.0);
        let b = Rectangle::new(0.3, 0.0, 1.0, 1.0);
        assert_ne!(a, b);
        assert_ulps_eq!(a, b);
    }
}
