/// Largest absolute grid coordinate. Keeps every exact predicate of the
/// sweep (products of three coordinate differences) inside `i128`.
pub const HI_RANGE: i64 = (1 << 40) - 1;

/// Miter limits below this are raised to it, so right angles always miter.
pub const MIN_MITER_LIMIT: f64 = 2.0;

/// Round-join chord error in grid units when no tolerance is given.
pub const DEFAULT_ARC_TOLERANCE: f64 = 0.25;

/// Round-join chord error is never allowed above this fraction of the offset.
pub const ARC_TOLERANCE_RATIO: f64 = 0.25;

pub const MAX_SPLIT_PASSES: usize = 8;
