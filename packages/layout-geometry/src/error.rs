//! Error types shared by every engine.

use std::collections::TryReserveError;
use thiserror::Error;

/// Coarse result tag reported alongside an operation's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Ok,
    InvalidGeometry,
    NumericOverflow,
    AllocationFailure,
}

impl ErrorCode {
    pub fn from_result<T>(result: &Result<T, GeometryError>) -> Self {
        match result {
            Ok(_) => ErrorCode::Ok,
            Err(error) => error.code(),
        }
    }
}

/// Errors that can occur while preparing or processing polygons.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Scaling factor is zero, negative or not finite.
    #[error("invalid scaling factor {0}")]
    InvalidScale(f64),

    /// Polygon has fewer than 3 distinct vertices once snapped to the grid.
    #[error("polygon {index} has {count} distinct vertices, at least 3 are required")]
    TooFewVertices {
        /// Position of the polygon in its input collection.
        index: usize,
        /// Number of distinct vertices left after scaling.
        count: usize,
    },

    /// Cut positions are not strictly increasing.
    #[error("slice position {index} is not strictly greater than its predecessor")]
    UnorderedPositions {
        /// Index of the first offending position.
        index: usize,
    },

    /// A numeric parameter is not usable (NaN or infinite).
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// A scaled coordinate falls outside the supported grid range.
    #[error("scaled coordinate {value} exceeds the grid range")]
    CoordinateOverflow {
        /// The offending scaled value.
        value: f64,
    },

    /// Accumulated winding count left the i32 range.
    #[error("winding count overflow")]
    WindingOverflow,

    /// Output storage could not grow.
    #[error("result storage allocation failed")]
    AllocationFailure,
}

impl GeometryError {
    pub fn code(&self) -> ErrorCode {
        match self {
            GeometryError::InvalidScale(_)
            | GeometryError::TooFewVertices { .. }
            | GeometryError::UnorderedPositions { .. }
            | GeometryError::InvalidParameter { .. } => ErrorCode::InvalidGeometry,
            GeometryError::CoordinateOverflow { .. } | GeometryError::WindingOverflow => {
                ErrorCode::NumericOverflow
            }
            GeometryError::AllocationFailure => ErrorCode::AllocationFailure,
        }
    }
}

impl From<TryReserveError> for GeometryError {
    fn from(_: TryReserveError) -> Self {
        GeometryError::AllocationFailure
    }
}

/// Appends `items` to `target` only if the whole batch fits.
pub fn append_all<T>(target: &mut Vec<T>, items: Vec<T>) -> Result<(), GeometryError> {
    target.try_reserve(items.len())?;
    target.extend(items);
    Ok(())
}
