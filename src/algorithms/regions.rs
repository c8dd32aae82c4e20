//! Merging of uniform tiles into polygons, and the pipeline that goes from
//! seed points to one polygon per value.

use super::Error;
use super::Subdivision;
use super::UnderMinDistance;
use super::ValueCache;
use crate::geometry::Point;
use crate::geometry::Rectangle;
use crate::polygon::Polygon;
use rayon::prelude::*;
use std::collections::HashMap;
use std::hash::Hash;

/// Merges non-overlapping rectangles into one polygon.
///
/// Contours are chained from the oldest edge left on the boundary, which is
/// usually the left edge of their first rectangle. The result is not
/// simplified.
pub fn merge_rectangles(rectangles: &[Rectangle]) -> Polygon {
    Polygon::from_rectangles(rectangles)
}

/// Merges every group of rectangles into a simplified polygon.
///
/// Groups are merged in parallel.
pub fn polygons_from_rectangles<V>(rectangles: &HashMap<V, Vec<Rectangle>>) -> HashMap<V, Polygon>
where
    V: Clone + Eq + Hash + Send + Sync,
{
    rectangles
        .par_iter()
        .map(|(value, tiles)| {
            let span = tracing::debug_span!("merge", tiles = tiles.len());
            let _enter = span.enter();

            let mut polygon = merge_rectangles(tiles);
            polygon.simplify();
            tracing::debug!(contours = polygon.contours().len(), "merged");
            (value.clone(), polygon)
        })
        .collect()
}

/// Output of [Subdivision::polygons_by_value].
#[derive(Clone, Debug)]
pub struct Regions<V> {
    /// One simplified polygon per value.
    pub polygons: HashMap<V, Polygon>,

    /// The uniform tiles the polygons are made of.
    pub rectangles: HashMap<V, Vec<Rectangle>>,

    /// Every sampled value.
    pub values: ValueCache<V>,

    /// Number of tiles that got no value.
    pub discarded: usize,
}

impl<R, U> Subdivision<R, U>
where
    R: Fn(f64) -> f64,
{
    /// Partitions the bounding box of `seeds` into polygons of uniform value.
    ///
    /// # Errors
    ///
    /// Same as [Subdivision::rectangles_by_value].
    pub fn polygons_by_value<V, F>(&self, seeds: &[Point], value_at: F) -> Result<Regions<V>, Error>
    where
        V: Clone + Eq + Hash + Send + Sync,
        F: FnMut(Point) -> V,
        U: UnderMinDistance<V>,
    {
        let by_value = self.rectangles_by_value(seeds, value_at)?;
        let polygons = polygons_from_rectangles(&by_value.rectangles);
        Ok(Regions {
            polygons,
            rectangles: by_value.rectangles,
            values: by_value.values,
            discarded: by_value.discarded,
        })
    }
}

/// [Subdivision::polygons_by_value] with default settings, keeping only the
/// polygons.
///
/// # Example
///
/// ```rust
/// use rectiles::Point;
///
/// let seeds = [Point::new(0.0, 0.0), Point::new(4.0, 4.0)];
/// let polygons = rectiles::polygons_by_value(&seeds, |p| p.x < 2.0)?;
///
/// assert_eq!(polygons[&true].to_svg_path_string(), "M0,0 0,4 2,4 2,0 0,0");
/// assert_eq!(polygons[&false].to_svg_path_string(), "M2,0 2,4 4,4 4,0 2,0");
/// # Ok::<(), rectiles::Error>(())
/// ```
pub fn polygons_by_value<V, F>(seeds: &[Point], value_at: F) -> Result<HashMap<V, Polygon>, Error>
where
    V: Clone + Eq + Hash + Send + Sync,
    F: FnMut(Point) -> V,
{
    Subdivision::default()
        .polygons_by_value(seeds, value_at)
        .map(|regions| regions.polygons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::divide_into_rectangles;
    use proptest::prelude::*;

    #[test]
    fn test_merge_nothing() {
        assert!(merge_rectangles(&[]).is_empty());
    }

    #[test]
    fn test_merge_keeps_first_rectangle_start() {
        let polygon = merge_rectangles(&[Rectangle::new(0., 0., 1., 2.)]);
        assert_eq!(polygon.to_svg_path_string(), "M0,0 0,2 1,2 1,0 0,0");
    }

    #[test]
    fn test_merge_many_tiles() {
        // A staircase of thin tiles, each sharing part of an edge with the
        // next one.
        let n = 500;
        let tiles: Vec<Rectangle> = (0..n)
            .flat_map(|i| {
                let i = f64::from(i);
                [
                    Rectangle::new(0., i, i + 1., 1.),
                    Rectangle::new(i + 1., i, f64::from(n) - i - 1., 1.),
                ]
            })
            .filter(|tile| !tile.is_empty())
            .collect();

        let mut polygon = merge_rectangles(&tiles);
        polygon.simplify();
        assert_eq!(polygon.contours().len(), 1);
        assert_eq!(polygon.contours()[0].len(), 4);
        assert_eq!(polygon.area(), -f64::from(n * n));
    }

    #[test]
    fn test_polygons_from_rectangles() {
        let mut rectangles = HashMap::new();
        rectangles.insert(
            'a',
            vec![Rectangle::new(0., 0., 1., 1.), Rectangle::new(1., 0., 1., 1.)],
        );
        rectangles.insert('b', vec![Rectangle::new(0., 1., 2., 1.)]);

        let polygons = polygons_from_rectangles(&rectangles);
        assert_eq!(polygons.len(), 2);
        assert_eq!(polygons[&'a'].to_svg_path_string(), "M0,0 0,1 2,1 2,0 0,0");
        assert_eq!(polygons[&'b'].to_svg_path_string(), "M0,1 0,2 2,2 2,1 0,1");
    }

    #[test]
    fn test_regions_keep_intermediate_results() {
        let seeds = [Point::new(0., 0.), Point::new(4., 1.)];
        let regions = Subdivision::default()
            .polygons_by_value(&seeds, |p| p.x < 2.0)
            .unwrap();
        assert_eq!(regions.polygons.len(), 2);
        assert_eq!(regions.rectangles[&true].len(), 2);
        assert_eq!(regions.polygons[&true].contours()[0].len(), 4);
        assert_eq!(regions.discarded, 0);
        assert!(regions.values.len() >= 4);
    }

    proptest!(
        #[test]
        fn test_merge_full_tiling(
            seeds in prop::collection::vec((0..9_i32, 0..9_i32), 2..16)
                .prop_map(|coords| {
                    coords
                        .into_iter()
                        .map(|(x, y)| Point::new(f64::from(x), f64::from(y)))
                        .collect::<Vec<_>>()
                })
                .prop_filter("seeds must not be aligned", |seeds| {
                    seeds.iter().any(|p| p.x != seeds[0].x)
                        && seeds.iter().any(|p| p.y != seeds[0].y)
                })
        ) {
            let tiles = divide_into_rectangles(&seeds).unwrap();
            let mut polygon = merge_rectangles(&tiles);
            polygon.simplify();

            let bbox = Rectangle::bounding(&seeds).unwrap();
            prop_assert_eq!(polygon.contours().len(), 1);
            let mut points = polygon.contours()[0].points().to_vec();
            let mut corners = bbox.corners().to_vec();
            let by_coords = |a: &Point, b: &Point| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y));
            points.sort_by(by_coords);
            corners.sort_by(by_coords);
            prop_assert_eq!(points, corners);
            prop_assert_eq!(polygon.area(), -bbox.area());
        }
    );
}
