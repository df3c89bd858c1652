//! Polygon geometry on an integer grid: boolean clipping, offsetting,
//! point containment and slicing.
//!
//! Every public operation scales its input by a caller supplied factor,
//! snaps it to the grid, runs the clipping engine and scales the result
//! back. Errors are reported through [`GeometryError`]; on error nothing
//! is appended to caller buffers.

pub mod boolean;
pub mod clipper;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod inside;
pub mod offset;
pub mod scaler;
pub mod slice;
pub mod utils;

pub use crate::boolean::{boolean, boolean_polygons, boolean_with_config};
pub use crate::clipper::enums::{JoinType as OffsetJoin, Operation};
pub use crate::config::GeometryConfig;
pub use crate::error::{ErrorCode, GeometryError};
pub use crate::geometry::point::Point;
pub use crate::geometry::polygon::Polygon;
pub use crate::inside::{
    all_inside, any_inside, inside, inside_group, inside_polygon, inside_with_config, ShortCircuit,
};
pub use crate::offset::{offset, offset_polygon, offset_with_config};
pub use crate::slice::{slice, slice_with_config};
