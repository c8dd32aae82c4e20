//! Distances from points to rectangle boundaries, and a value oracle that
//! picks the closest of a set of labelled rectangles.
//!
//! A point inside a rectangle is always closer to it than to a rectangle
//! that does not contain it. Otherwise, the rectangle whose boundary is the
//! closest in Manhattan distance wins.

use crate::geometry::Point;
use crate::geometry::Rectangle;
use std::cmp::Ordering;

/// Signed offsets of a point from each side of a rectangle.
///
/// Offsets are measured along the positive axes: a negative `from_left`
/// means the point is left of the rectangle, a negative `from_bottom` means
/// it is above the bottom side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ManhattanOffset {
    pub from_left: f64,
    pub from_right: f64,
    pub from_top: f64,
    pub from_bottom: f64,
}

impl ManhattanOffset {
    pub fn between(rectangle: &Rectangle, p: Point) -> Self {
        Self {
            from_left: p.x - rectangle.left(),
            from_right: p.x - rectangle.right(),
            from_top: p.y - rectangle.top(),
            from_bottom: p.y - rectangle.bottom(),
        }
    }
}

/// Closest vertical side of a rectangle, and on which side of it the point
/// lies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HorizontalSide {
    LeftOut,
    LeftIn,
    RightIn,
    RightOut,
}

impl HorizontalSide {
    pub fn is_in(self) -> bool {
        matches!(self, HorizontalSide::LeftIn | HorizontalSide::RightIn)
    }
}

/// Closest horizontal side of a rectangle, and on which side of it the point
/// lies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VerticalSide {
    TopOut,
    TopIn,
    BottomIn,
    BottomOut,
}

impl VerticalSide {
    pub fn is_in(self) -> bool {
        matches!(self, VerticalSide::TopIn | VerticalSide::BottomIn)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MinDistances {
    /// Distance to the closest side.
    pub min_distance: f64,
    /// Distance to the closest of the left and right sides.
    pub horizontal_distance: f64,
    /// Distance to the closest of the top and bottom sides.
    pub vertical_distance: f64,
    pub horizontal: HorizontalSide,
    pub vertical: VerticalSide,
}

impl MinDistances {
    pub fn from_offset(offset: &ManhattanOffset) -> Self {
        let left = offset.from_left.abs();
        let right = offset.from_right.abs();
        let top = offset.from_top.abs();
        let bottom = offset.from_bottom.abs();

        let horizontal = if left < right {
            if offset.from_left >= 0.0 {
                HorizontalSide::LeftIn
            } else {
                HorizontalSide::LeftOut
            }
        } else if offset.from_right > 0.0 {
            HorizontalSide::RightOut
        } else {
            HorizontalSide::RightIn
        };

        let vertical = if top < bottom {
            if offset.from_top >= 0.0 {
                VerticalSide::TopIn
            } else {
                VerticalSide::TopOut
            }
        } else if offset.from_bottom > 0.0 {
            VerticalSide::BottomOut
        } else {
            VerticalSide::BottomIn
        };

        Self {
            min_distance: left.min(right).min(top).min(bottom),
            horizontal_distance: left.min(right),
            vertical_distance: top.min(bottom),
            horizontal,
            vertical,
        }
    }

    pub fn between(rectangle: &Rectangle, p: Point) -> Self {
        Self::from_offset(&ManhattanOffset::between(rectangle, p))
    }

    /// Whether the point lies in the rectangle, borders included.
    pub fn contains(&self) -> bool {
        self.horizontal.is_in() && self.vertical.is_in()
    }

    /// Manhattan distance from the point to the rectangle's boundary.
    pub fn manhattan_distance(&self) -> f64 {
        match (self.horizontal.is_in(), self.vertical.is_in()) {
            (true, true) => self.horizontal_distance.min(self.vertical_distance),
            (true, false) => self.vertical_distance,
            (false, true) => self.horizontal_distance,
            (false, false) => self.horizontal_distance + self.vertical_distance,
        }
    }
}

/// Orders distances from closest to farthest: containing rectangles first,
/// then by Manhattan distance to the boundary.
pub fn cmp_by_boundary_distance(a: &MinDistances, b: &MinDistances) -> Ordering {
    b.contains().cmp(&a.contains()).then_with(|| {
        a.manhattan_distance()
            .partial_cmp(&b.manhattan_distance())
            .unwrap_or(Ordering::Equal)
    })
}

/// A value oracle mapping points to the label of the closest rectangle.
///
/// # Example
///
/// ```rust
/// use rectiles::NearestRectangle;
/// use rectiles::Point;
/// use rectiles::Rectangle;
///
/// let oracle: NearestRectangle<_> = [
///     (Rectangle::new(0.0, 0.0, 2.0, 2.0), 'a'),
///     (Rectangle::new(6.0, 0.0, 2.0, 2.0), 'b'),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(oracle.value_at(Point::new(1.0, 1.0)), Some('a'));
/// assert_eq!(oracle.value_at(Point::new(5.0, 4.0)), Some('b'));
/// ```
#[derive(Clone, Debug, Default)]
pub struct NearestRectangle<V> {
    rectangles: Vec<(Rectangle, V)>,
}

impl<V> NearestRectangle<V> {
    pub fn new(rectangles: Vec<(Rectangle, V)>) -> Self {
        Self { rectangles }
    }

    pub fn rectangles(&self) -> &[(Rectangle, V)] {
        &self.rectangles
    }

    /// The closest rectangle to `p` with its distances. The first one wins on
    /// ties.
    pub fn nearest(&self, p: Point) -> Option<(&Rectangle, &V, MinDistances)> {
        self.rectangles
            .iter()
            .map(|(rectangle, value)| (rectangle, value, MinDistances::between(rectangle, p)))
            .min_by(|(_, _, a), (_, _, b)| cmp_by_boundary_distance(a, b))
    }
}

impl<V: Clone> NearestRectangle<V> {
    /// The label of the closest rectangle to `p`, or `None` if there are no
    /// rectangles.
    pub fn value_at(&self, p: Point) -> Option<V> {
        self.nearest(p).map(|(_, value, _)| value.clone())
    }
}

impl<V> FromIterator<(Rectangle, V)> for NearestRectangle<V> {
    fn from_iter<I: IntoIterator<Item = (Rectangle, V)>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets() {
        let rectangle = Rectangle::new(0., 1., 13.4375, 21.);
        let offset = ManhattanOffset::between(&rectangle, Point::new(0., 0.));
        assert_eq!(
            offset,
            ManhattanOffset {
                from_left: 0.,
                from_right: -13.4375,
                from_top: -1.,
                from_bottom: -22.,
            }
        );

        let distances = MinDistances::from_offset(&offset);
        assert_eq!(distances.horizontal, HorizontalSide::LeftIn);
        assert_eq!(distances.vertical, VerticalSide::TopOut);
        assert_eq!(distances.min_distance, 0.);
        assert!(!distances.contains());
        assert_eq!(distances.manhattan_distance(), 1.);
    }

    #[test]
    fn test_sides() {
        let rectangle = Rectangle::new(0., 0., 10., 10.);
        let at = |x, y| MinDistances::between(&rectangle, Point::new(x, y));

        let inside = at(2., 7.);
        assert_eq!(inside.horizontal, HorizontalSide::LeftIn);
        assert_eq!(inside.vertical, VerticalSide::BottomIn);
        assert!(inside.contains());
        assert_eq!(inside.manhattan_distance(), 2.);

        let outside = at(13., -4.);
        assert_eq!(outside.horizontal, HorizontalSide::RightOut);
        assert_eq!(outside.vertical, VerticalSide::TopOut);
        assert!(!outside.contains());
        assert_eq!(outside.manhattan_distance(), 7.);

        let below = at(4., 12.);
        assert_eq!(below.horizontal, HorizontalSide::LeftIn);
        assert_eq!(below.vertical, VerticalSide::BottomOut);
        assert_eq!(below.manhattan_distance(), 2.);

        // Borders are inside.
        assert!(at(10., 10.).contains());
    }

    #[test]
    fn test_containment_wins() {
        let big = Rectangle::new(0., 0., 100., 100.);
        let small = Rectangle::new(51., 50., 1., 1.);
        let p = Point::new(50., 50.);

        let in_big = MinDistances::between(&big, p);
        let near_small = MinDistances::between(&small, p);
        assert!(in_big.manhattan_distance() > near_small.manhattan_distance());
        assert_eq!(
            cmp_by_boundary_distance(&in_big, &near_small),
            Ordering::Less
        );
        assert_eq!(
            cmp_by_boundary_distance(&near_small, &in_big),
            Ordering::Greater
        );
    }

    #[test]
    fn test_nearest_rectangle() {
        let oracle = NearestRectangle::new(vec![
            (Rectangle::new(0., 0., 4., 4.), 0),
            (Rectangle::new(2., 2., 4., 4.), 1),
            (Rectangle::new(10., 0., 2., 2.), 2),
        ]);

        // In both of the first two: the closest boundary wins.
        assert_eq!(oracle.value_at(Point::new(3.5, 3.5)), Some(0));
        assert_eq!(oracle.value_at(Point::new(2.5, 2.5)), Some(1));
        assert_eq!(oracle.value_at(Point::new(13., 1.)), Some(2));

        // Tie between 0 and 1: the first one wins.
        assert_eq!(oracle.value_at(Point::new(3., 3.)), Some(0));

        let empty: NearestRectangle<u8> = NearestRectangle::default();
        assert_eq!(empty.value_at(Point::new(0., 0.)), None);
    }
}
