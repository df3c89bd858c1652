use crate::clipper::constants::{DEFAULT_ARC_TOLERANCE, MAX_SPLIT_PASSES, MIN_MITER_LIMIT};
use crate::error::GeometryError;

/// Per-call settings shared by the public operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    /// Multiplier from user units to grid units.
    pub scale: f64,
    /// Classification of points lying exactly on a contour edge.
    pub boundary_inside: bool,
    /// Lower bound applied to the miter limit taken from the offset tolerance.
    pub min_miter_limit: f64,
    /// Round-join chord error in grid units when the tolerance is not positive.
    pub default_arc_tolerance: f64,
    /// Upper bound on edge splitting passes before the sweep.
    pub max_split_passes: usize,
}

impl GeometryConfig {
    pub fn new(scale: f64) -> GeometryConfig {
        GeometryConfig {
            scale,
            ..GeometryConfig::default()
        }
    }

    pub fn with_boundary_inside(mut self, boundary_inside: bool) -> Self {
        self.boundary_inside = boundary_inside;
        self
    }

    pub fn with_min_miter_limit(mut self, min_miter_limit: f64) -> Self {
        self.min_miter_limit = min_miter_limit;
        self
    }

    pub fn with_default_arc_tolerance(mut self, default_arc_tolerance: f64) -> Self {
        self.default_arc_tolerance = default_arc_tolerance;
        self
    }

    pub fn with_max_split_passes(mut self, max_split_passes: usize) -> Self {
        self.max_split_passes = max_split_passes;
        self
    }

    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(GeometryError::InvalidScale(self.scale));
        }
        if !self.min_miter_limit.is_finite() || self.min_miter_limit < 1.0 {
            return Err(GeometryError::InvalidParameter {
                name: "min_miter_limit",
                value: self.min_miter_limit,
            });
        }
        if !self.default_arc_tolerance.is_finite() || self.default_arc_tolerance <= 0.0 {
            return Err(GeometryError::InvalidParameter {
                name: "default_arc_tolerance",
                value: self.default_arc_tolerance,
            });
        }

        Ok(())
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        GeometryConfig {
            scale: 1000.0,
            boundary_inside: true,
            min_miter_limit: MIN_MITER_LIMIT,
            default_arc_tolerance: DEFAULT_ARC_TOLERANCE,
            max_split_passes: MAX_SPLIT_PASSES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = GeometryConfig::new(100.0)
            .with_boundary_inside(false)
            .with_max_split_passes(2);

        assert_eq!(config.scale, 100.0);
        assert!(!config.boundary_inside);
        assert_eq!(config.max_split_passes, 2);
        assert_eq!(config.min_miter_limit, MIN_MITER_LIMIT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_scale() {
        assert_eq!(
            GeometryConfig::new(0.0).validate(),
            Err(GeometryError::InvalidScale(0.0))
        );
        assert!(GeometryConfig::new(f64::NAN).validate().is_err());
        assert!(GeometryConfig::new(-1.0).validate().is_err());
    }

    #[test]
    fn rejects_bad_policy_values() {
        assert!(GeometryConfig::new(1.0)
            .with_default_arc_tolerance(0.0)
            .validate()
            .is_err());
        assert!(GeometryConfig::new(1.0)
            .with_min_miter_limit(0.5)
            .validate()
            .is_err());
    }
}
