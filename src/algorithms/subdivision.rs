//! Value-driven refinement of a rectangle partition.
//!
//! Tiles whose four corners map to the same value are kept whole. The others
//! are cut in halves or quarters until they are uniform or too small to be
//! cut, which localizes value boundaries without sampling every point of the
//! plane.

use super::divide_into_rectangles;
use super::Error;
use crate::geometry::cmp_top_left;
use crate::geometry::Point;
use crate::geometry::Rectangle;
use std::collections::hash_map;
use std::collections::HashMap;
use std::hash::Hash;

/// Values sampled by the subdivision, by point.
///
/// Every point is sampled at most once.
#[derive(Clone, Debug)]
pub struct ValueCache<V> {
    values: HashMap<Point, V>,
}

impl<V> Default for ValueCache<V> {
    fn default() -> Self {
        Self {
            values: HashMap::new(),
        }
    }
}

impl<V> ValueCache<V> {
    pub fn get(&self, p: Point) -> Option<&V> {
        self.values.get(&p)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Point, &V)> + '_ {
        self.values.iter().map(|(p, v)| (*p, v))
    }

    fn sample(&mut self, p: Point, value_at: &mut impl FnMut(Point) -> V) {
        if let hash_map::Entry::Vacant(entry) = self.values.entry(p) {
            entry.insert(value_at(p));
        }
    }
}

/// Picks the value of a tile whose corners disagree but that is too small to
/// be cut further.
///
/// Returning `None` drops the tile from the output.
pub trait UnderMinDistance<V> {
    /// `values` holds at least the four corners of `tile`.
    fn value_of(&self, tile: &Rectangle, values: &ValueCache<V>) -> Option<V>;
}

impl<V, F> UnderMinDistance<V> for F
where
    F: Fn(&Rectangle, &ValueCache<V>) -> Option<V>,
{
    fn value_of(&self, tile: &Rectangle, values: &ValueCache<V>) -> Option<V> {
        self(tile, values)
    }
}

/// Gives small tiles the value of their top-left corner.
#[derive(Clone, Copy, Debug, Default)]
pub struct TopLeftValue;

impl<V: Clone> UnderMinDistance<V> for TopLeftValue {
    fn value_of(&self, tile: &Rectangle, values: &ValueCache<V>) -> Option<V> {
        values.get(tile.top_left()).cloned()
    }
}

/// Output of [Subdivision::rectangles_by_value].
#[derive(Clone, Debug)]
pub struct RectanglesByValue<V> {
    /// Uniform tiles, grouped by value and sorted from the top-left corner of
    /// the seeds' bounding box.
    pub rectangles: HashMap<V, Vec<Rectangle>>,

    /// Every sampled value.
    pub values: ValueCache<V>,

    /// Number of tiles dropped because no value could be picked for them.
    pub discarded: usize,
}

/// Settings of the value-driven subdivision.
///
/// # Example
///
/// ```rust
/// use rectiles::Point;
/// use rectiles::Rectangle;
/// use rectiles::Subdivision;
///
/// let seeds = [Point::new(0.0, 0.0), Point::new(4.0, 1.0)];
/// let left_half = |p: Point| p.x < 2.0;
///
/// let result = Subdivision::default().rectangles_by_value(&seeds, left_half)?;
///
/// assert_eq!(result.rectangles[&false], [Rectangle::new(2.0, 0.0, 2.0, 1.0)]);
/// assert_eq!(
///     result.rectangles[&true],
///     [Rectangle::new(0.0, 0.0, 1.0, 1.0), Rectangle::new(1.0, 0.0, 1.0, 1.0)],
/// );
/// # Ok::<(), rectiles::Error>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Subdivision<R = fn(f64) -> f64, U = TopLeftValue> {
    /// Tiles are only cut along an axis if they span at least twice this
    /// length on it. Must be strictly positive.
    pub min_spacing: f64,

    /// Rounding applied to half of a tile's extent to find the cut.
    pub round: R,

    /// Policy for tiles that are too small to be cut.
    pub under_min_distance: U,
}

impl Default for Subdivision {
    fn default() -> Self {
        Self {
            min_spacing: 1.0,
            round: f64::floor,
            under_min_distance: TopLeftValue,
        }
    }
}

impl<R, U> Subdivision<R, U> {
    pub fn with_min_spacing(self, min_spacing: f64) -> Self {
        Self {
            min_spacing,
            ..self
        }
    }

    pub fn with_round<R2>(self, round: R2) -> Subdivision<R2, U> {
        Subdivision {
            min_spacing: self.min_spacing,
            round,
            under_min_distance: self.under_min_distance,
        }
    }

    pub fn with_under_min_distance<U2>(self, under_min_distance: U2) -> Subdivision<R, U2> {
        Subdivision {
            min_spacing: self.min_spacing,
            round: self.round,
            under_min_distance,
        }
    }
}

impl<R, U> Subdivision<R, U>
where
    R: Fn(f64) -> f64,
{
    /// Where to cut a tile along one axis, if it can be cut.
    fn cut(&self, start: f64, extent: f64) -> Option<f64> {
        if extent < 2.0 * self.min_spacing {
            return None;
        }
        let half = (self.round)(extent / 2.0);
        if 0.0 < half && half < extent {
            Some(start + half)
        } else {
            None
        }
    }

    /// Partitions the bounding box of `seeds` into tiles of uniform value.
    ///
    /// `value_at` must be deterministic: it is called at most once per point.
    ///
    /// # Errors
    ///
    /// - [Error::InvalidSegmentCount] if `min_spacing` is not strictly
    ///   positive,
    /// - any error of [divide_into_rectangles].
    pub fn rectangles_by_value<V, F>(
        &self,
        seeds: &[Point],
        mut value_at: F,
    ) -> Result<RectanglesByValue<V>, Error>
    where
        V: Clone + Eq + Hash,
        F: FnMut(Point) -> V,
        U: UnderMinDistance<V>,
    {
        if self.min_spacing.is_nan() || self.min_spacing <= 0.0 {
            return Err(Error::InvalidSegmentCount {
                min_spacing: self.min_spacing,
            });
        }

        let span = tracing::info_span!(
            "subdivision",
            seeds = seeds.len(),
            min_spacing = self.min_spacing,
        );
        let _enter = span.enter();

        let mut worklist = divide_into_rectangles(seeds)?;
        let origin = Rectangle::bounding(seeds)
            .map(|bbox| bbox.top_left())
            .unwrap_or_default();

        let mut values = ValueCache::default();
        let mut rectangles: HashMap<V, Vec<Rectangle>> = HashMap::new();
        let mut discarded = 0;
        let mut pass = 0;

        while !worklist.is_empty() {
            pass += 1;
            for tile in &worklist {
                for corner in tile.corners() {
                    values.sample(corner, &mut value_at);
                }
            }
            tracing::trace!(pass, tiles = worklist.len(), samples = values.len());

            let mut next = Vec::new();
            for tile in worklist {
                if let Some(value) = uniform_value(&tile, &values) {
                    rectangles.entry(value.clone()).or_default().push(tile);
                    continue;
                }

                let (l, t, r, b) = (tile.left(), tile.top(), tile.right(), tile.bottom());
                match (self.cut(l, tile.width()), self.cut(t, tile.height())) {
                    (Some(x), Some(y)) => next.extend([
                        Rectangle::from_sides(l, t, x, y),
                        Rectangle::from_sides(x, t, r, y),
                        Rectangle::from_sides(l, y, x, b),
                        Rectangle::from_sides(x, y, r, b),
                    ]),
                    (Some(x), None) => next.extend([
                        Rectangle::from_sides(l, t, x, b),
                        Rectangle::from_sides(x, t, r, b),
                    ]),
                    (None, Some(y)) => next.extend([
                        Rectangle::from_sides(l, t, r, y),
                        Rectangle::from_sides(l, y, r, b),
                    ]),
                    (None, None) => match self.under_min_distance.value_of(&tile, &values) {
                        Some(value) => rectangles.entry(value).or_default().push(tile),
                        None => discarded += 1,
                    },
                }
            }
            worklist = next;
        }

        for list in rectangles.values_mut() {
            list.sort_by(|a, b| cmp_top_left(a.top_left(), b.top_left(), origin));
        }
        tracing::debug!(
            passes = pass,
            samples = values.len(),
            groups = rectangles.len(),
            discarded,
            "subdivision done",
        );

        Ok(RectanglesByValue {
            rectangles,
            values,
            discarded,
        })
    }
}

/// The value shared by the four corners of `tile`, if any.
fn uniform_value<'v, V: PartialEq>(tile: &Rectangle, values: &'v ValueCache<V>) -> Option<&'v V> {
    let [first, rest @ ..] = tile.corners().map(|corner| values.get(corner));
    let first = first?;
    if rest.iter().all(|value| *value == Some(first)) {
        Some(first)
    } else {
        None
    }
}
