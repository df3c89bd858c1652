// Clipping engine on the integer grid: edge table, split pass, sweep and
// contour stitching, plus the offset generator built on top of it.

pub mod clipper;
pub mod clipper_offset;
pub mod constants;
pub mod enums;
pub mod intersect_node;
pub mod local_minima;
pub mod out_rec;
pub mod scanbeam;
pub mod t_edge;
pub mod utils;

#[cfg(test)]
pub mod tests;

pub use clipper::Clipper;
pub use clipper_offset::ClipperOffset;
pub use constants::*;
pub use enums::*;
