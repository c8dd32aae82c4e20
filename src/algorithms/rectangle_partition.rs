//! Tiling of a point set's bounding box into rectangles whose corners are
//! taken from the point set.
//!
//! The bounding box is filled greedily from its top-left corner: the first
//! point to the right fixes the tile's right side, the first point below it
//! fixes its bottom side, and the points inside the tile are dropped. What is
//! left of the box is an L-shaped region, which is cut into rectangles
//! according to where the next unresolved point lies, and each of them is
//! tiled recursively.

use super::Error;
use crate::geometry::cmp_top_left;
use crate::geometry::Point;
use crate::geometry::Rectangle;
use itertools::Itertools as _;

/// Position of the first unresolved point relative to the last emitted tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Quadrant {
    /// Right of the tile, within its vertical extent.
    Right,
    /// Right of the tile and below it.
    RightBelow,
    /// Below the tile, within its horizontal extent.
    Below,
    /// On the tile's right or bottom edge.
    Edge,
}

impl Quadrant {
    fn of(p: Point, tile: &Rectangle) -> Quadrant {
        match (p.x > tile.right(), p.y > tile.bottom()) {
            (true, false) => Quadrant::Right,
            (true, true) => Quadrant::RightBelow,
            (false, true) => Quadrant::Below,
            (false, false) => Quadrant::Edge,
        }
    }
}

/// Rectangles covering `container` minus `tile`, where `tile` shares the
/// top-left corner of `container`.
fn remaining_regions(container: &Rectangle, tile: &Rectangle, next: Point) -> Vec<Rectangle> {
    let (l, t, r, b) = (
        container.left(),
        container.top(),
        container.right(),
        container.bottom(),
    );
    let (tr, tb) = (tile.right(), tile.bottom());

    if tr == r {
        return vec![Rectangle::from_sides(l, tb, r, b)];
    }
    if tb == b {
        return vec![Rectangle::from_sides(tr, t, r, b)];
    }

    let right_band = Rectangle::from_sides(tr, t, r, tb);
    let full_bottom = Rectangle::from_sides(l, tb, r, b);
    let below_left = Rectangle::from_sides(l, tb, tr, b);
    let full_right = Rectangle::from_sides(tr, t, r, b);

    match Quadrant::of(next, tile) {
        Quadrant::Right if next.y == tb => vec![
            Rectangle::from_sides(tr, t, next.x, tb),
            Rectangle::from_sides(next.x, t, r, tb),
            full_bottom,
        ],
        Quadrant::Right => vec![right_band, full_bottom],
        Quadrant::RightBelow => vec![
            right_band,
            below_left,
            Rectangle::from_sides(tr, tb, r, b),
        ],
        Quadrant::Below => vec![below_left, full_right],
        Quadrant::Edge if next.x == tr => vec![right_band, full_bottom],
        Quadrant::Edge => vec![below_left, full_right],
    }
}

/// Tiles the bounding box of `points` and appends the tiles to `tiles`.
fn divide(points: Vec<Point>, tiles: &mut Vec<Rectangle>) -> Result<(), Error> {
    let container = match Rectangle::bounding(&points) {
        Some(container) if !container.is_empty() => container,
        _ => return Ok(()),
    };

    let origin = container.top_left();
    let mut points: Vec<Point> = points
        .into_iter()
        .chain(container.corners())
        .unique()
        .collect();
    points.sort_by(|a, b| cmp_top_left(*a, *b, origin));

    let (top_left, rest) = match points.split_first() {
        Some((top_left, rest)) => (*top_left, rest),
        None => return Ok(()),
    };

    let right = rest
        .iter()
        .find(|p| p.x > top_left.x)
        .map(|p| p.x)
        .ok_or(Error::AllPointsOnVerticalLine)?;
    // Points the tile ends up covering are dropped below.
    let bottom = rest
        .iter()
        .find(|p| p.x <= right && p.y > top_left.y)
        .or_else(|| rest.iter().find(|p| p.y > top_left.y))
        .map(|p| p.y)
        .ok_or(Error::AllSeedsOnHorizontalLine)?;

    let tile = Rectangle::from_sides(top_left.x, top_left.y, right, bottom);
    tiles.push(tile);

    let tile_corners = tile.corners();
    let remaining: Vec<Point> = rest
        .iter()
        .copied()
        .filter(|p| {
            if tile_corners.contains(p) {
                return false;
            }
            if tile.contains_end_exclusive(*p) {
                tracing::debug!(point = %p, %tile, "point covered by tile");
                return false;
            }
            true
        })
        .collect();

    if tile == container {
        return Ok(());
    }
    let next = match remaining.first() {
        Some(next) => *next,
        None => return Ok(()),
    };

    for region in remaining_regions(&container, &tile, next) {
        let inside = remaining
            .iter()
            .copied()
            .filter(|p| region.contains(*p))
            .chain(region.corners())
            .collect();
        divide(inside, tiles)?;
    }

    Ok(())
}

/// Partitions the bounding box of `seeds` into non-overlapping rectangles.
///
/// Every side of every rectangle lies on the x or y coordinate of a seed.
/// The output only depends on the set of distinct seeds, not on their order.
///
/// # Errors
///
/// - [Error::InsufficientPoints] if there are fewer than two distinct seeds,
/// - [Error::DegenerateLine] if all seeds share the same x or the same y.
///
/// # Example
///
/// ```rust
/// use rectiles::Point;
/// use rectiles::Rectangle;
///
/// let seeds = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 1.0)];
/// let tiles = rectiles::divide_into_rectangles(&seeds)?;
///
/// assert_eq!(
///     tiles,
///     [Rectangle::new(0.0, 0.0, 1.0, 1.0), Rectangle::new(1.0, 0.0, 1.0, 1.0)],
/// );
/// # Ok::<(), rectiles::Error>(())
/// ```
pub fn divide_into_rectangles(seeds: &[Point]) -> Result<Vec<Rectangle>, Error> {
    let span = tracing::info_span!("divide_into_rectangles", seeds = seeds.len());
    let _enter = span.enter();

    let points: Vec<Point> = seeds.iter().copied().unique().collect();
    if points.len() < 2 {
        return Err(Error::InsufficientPoints {
            distinct: points.len(),
        });
    }
    match Rectangle::bounding(&points) {
        Some(container) if !container.is_empty() => {}
        _ => return Err(Error::DegenerateLine),
    }

    let mut tiles = Vec::new();
    divide(points, &mut tiles)?;
    tracing::debug!(tiles = tiles.len(), "partition done");

    Ok(tiles)
}
