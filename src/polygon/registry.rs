use super::Contour;
use super::Segment;
use crate::geometry::Point;
use std::collections::HashMap;

#[derive(Debug)]
struct Origin {
    point: Point,
    destinations: Vec<Point>,
}

/// Directed segments grouped by their start point.
///
/// Origins are kept in insertion order. An origin whose last segment is
/// removed is forgotten, and comes back at the end if it is inserted again.
#[derive(Debug, Default)]
pub(crate) struct SegmentRegistry {
    // Exhausted origins stay in place with no destination.
    origins: Vec<Origin>,
    index: HashMap<Point, usize>,
    first_live: usize,
}

impl SegmentRegistry {
    pub fn insert(&mut self, segment: Segment) {
        let origins = &mut self.origins;
        let slot = *self.index.entry(segment.start).or_insert_with(|| {
            origins.push(Origin {
                point: segment.start,
                destinations: Vec::new(),
            });
            origins.len() - 1
        });
        self.origins[slot].destinations.push(segment.end);
    }

    /// Removes one occurrence of `segment`, returning whether it was there.
    pub fn remove(&mut self, segment: Segment) -> bool {
        let slot = match self.index.get(&segment.start) {
            Some(slot) => *slot,
            None => return false,
        };
        let destinations = &mut self.origins[slot].destinations;
        match destinations.iter().position(|d| *d == segment.end) {
            Some(pos) => {
                destinations.remove(pos);
                if destinations.is_empty() {
                    self.index.remove(&segment.start);
                }
                true
            }
            None => false,
        }
    }

    fn pop_destination(&mut self, from: Point) -> Option<Point> {
        let slot = *self.index.get(&from)?;
        let destinations = &mut self.origins[slot].destinations;
        let to = destinations.remove(0);
        if destinations.is_empty() {
            self.index.remove(&from);
        }
        Some(to)
    }

    fn first_origin(&mut self) -> Option<Point> {
        while let Some(origin) = self.origins.get(self.first_live) {
            if !origin.destinations.is_empty() {
                return Some(origin.point);
            }
            self.first_live += 1;
        }
        None
    }

    /// Chains the segments into closed contours, oldest origin first.
    ///
    /// # Panics
    ///
    /// If a chain does not come back to its start, meaning the segments do not
    /// come from a set of non-overlapping rectangles.
    pub fn into_contours(mut self) -> Vec<Contour> {
        let mut contours = Vec::new();
        while let Some(start) = self.first_origin() {
            let mut points = Vec::new();
            let mut current = start;
            while let Some(next) = self.pop_destination(current) {
                points.push(current);
                current = next;
            }
            assert_eq!(
                current, start,
                "dangling segment chain from {start} to {current}",
            );
            contours.push(Contour::new(points));
        }
        contours
    }
}
