//! A library that splits the plane into regions of uniform value.
//!
//! Given a set of seed points and a function giving a value at any point,
//! rectiles:
//!
//! 1. tiles the seeds' bounding box into rectangles whose corners are seeds
//!    (see [divide_into_rectangles]),
//! 2. refines the tiles until the four corners of each tile agree on a value
//!    (see [Subdivision]),
//! 3. merges the tiles of each value into a polygon, holes included (see
//!    [Polygon::merge]).
//!
//! # Example
//!
//! ```rust
//! use rectiles::Point;
//! use rectiles::Rectangle;
//!
//! let seeds = [Point::new(0.0, 0.0), Point::new(4.0, 1.0)];
//! let polygons = rectiles::polygons_by_value(&seeds, |p| p.x < 2.0)?;
//!
//! assert_eq!(polygons[&true].to_svg_path_string(), "M0,0 0,1 2,1 2,0 0,0");
//! assert_eq!(polygons[&false].to_svg_path_string(), "M2,0 2,1 4,1 4,0 2,0");
//!
//! // A ring of rectangles merges into an outer contour and a hole.
//! let mut ring = rectiles::merge_rectangles(&[
//!     Rectangle::new(0.0, 0.0, 3.0, 1.0),
//!     Rectangle::new(0.0, 1.0, 1.0, 1.0),
//!     Rectangle::new(2.0, 1.0, 1.0, 1.0),
//!     Rectangle::new(0.0, 2.0, 3.0, 1.0),
//! ]);
//! ring.simplify();
//! assert_eq!(ring.contours().len(), 2);
//! assert!(ring.contours()[1].is_hole());
//! assert_eq!(ring.area(), -8.0);
//! # Ok::<(), rectiles::Error>(())
//! ```

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    rust_2018_idioms
)]

pub mod algorithms;
pub mod geometry;
pub mod polygon;
pub mod proximity;
pub mod svg;


pub use crate::algorithms::divide_into_rectangles;
pub use crate::algorithms::merge_rectangles;
pub use crate::algorithms::polygons_by_value;
pub use crate::algorithms::polygons_from_rectangles;
pub use crate::algorithms::Error;
pub use crate::algorithms::RectanglesByValue;
pub use crate::algorithms::Regions;
pub use crate::algorithms::Stage;
pub use crate::algorithms::Subdivision;
pub use crate::algorithms::TopLeftValue;
pub use crate::algorithms::UnderMinDistance;
pub use crate::algorithms::ValueCache;
pub use crate::geometry::Point;
pub use crate::geometry::Rectangle;
pub use crate::polygon::Contour;
pub use crate::polygon::Polygon;
pub use crate::polygon::Segment;
pub use crate::proximity::NearestRectangle;
