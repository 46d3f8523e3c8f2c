use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Join thresholds. Validated once, before any record is touched.
#[derive(Clone, Copy, Serialize, Deserialize, Debug)]
pub struct JoinConfig {
    /// Spatial threshold: maximum Euclidean distance between a pair.
    /// Doubles as the grid cell side length.
    pub distance: f64,
    /// Textual threshold: minimum Jaccard similarity between term sets.
    pub similarity: f64,
}

impl JoinConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.distance.is_finite() || self.distance <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "distance",
                reason: format!("{} is not a positive number", self.distance),
            });
        }
        if !self.similarity.is_finite() || self.similarity <= 0.0 || self.similarity > 1.0 {
            return Err(ConfigError::InvalidValue {
                field: "similarity",
                reason: format!("{} is not in (0, 1]", self.similarity),
            });
        }
        Ok(())
    }
}
