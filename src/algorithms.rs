use std::fmt;

mod rectangle_partition;
mod regions;
mod subdivision;

pub use rectangle_partition::divide_into_rectangles;
pub use regions::merge_rectangles;
pub use regions::polygons_by_value;
pub use regions::polygons_from_rectangles;
pub use regions::Regions;
pub use subdivision::RectanglesByValue;
pub use subdivision::Subdivision;
pub use subdivision::TopLeftValue;
pub use subdivision::UnderMinDistance;
pub use subdivision::ValueCache;

/// The pipeline stage an [Error] comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Partition,
    Subdivision,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Partition => write!(f, "rectangle partition"),
            Stage::Subdivision => write!(f, "value subdivision"),
        }
    }
}

/// Common errors thrown by algorithms.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Fewer than two distinct seed points were given.
    InsufficientPoints { distinct: usize },

    /// The seed points and the corners of their bounding box all lie on the
    /// same horizontal or vertical line.
    DegenerateLine,

    /// A partition step found no point to the right of its top-left corner.
    AllPointsOnVerticalLine,

    /// A partition step found no point below its top-left corner.
    AllSeedsOnHorizontalLine,

    /// The minimum tile size is not strictly positive.
    InvalidSegmentCount { min_spacing: f64 },
}

impl Error {
    /// Which stage of the pipeline failed.
    pub fn stage(&self) -> Stage {
        match self {
            Error::InsufficientPoints { .. }
            | Error::DegenerateLine
            | Error::AllPointsOnVerticalLine
            | Error::AllSeedsOnHorizontalLine => Stage::Partition,
            Error::InvalidSegmentCount { .. } => Stage::Subdivision,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = self.stage();
        match self {
            Error::InsufficientPoints { distinct } => write!(
                f,
                "{stage}: need at least 2 distinct seed points, got {distinct}",
            ),
            Error::DegenerateLine => write!(f, "{stage}: all points are on the same line"),
            Error::AllPointsOnVerticalLine => {
                write!(f, "{stage}: all remaining points are on a vertical line")
            }
            Error::AllSeedsOnHorizontalLine => {
                write!(f, "{stage}: all remaining points are on a horizontal line")
            }
            Error::InvalidSegmentCount { min_spacing } => write!(
                f,
                "{stage}: minimum spacing must be strictly positive (got {min_spacing})",
            ),
        }
    }
}

impl std::error::Error for Error {}
