use crate::error::{HollywoodError, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_INITIAL_CAPACITY: usize = 10;
pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;

/// Sizing knobs for the slot table of a [`GraphStore`](crate::GraphStore).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphParams {
    /// Number of slots allocated before the first insertion.
    pub initial_capacity: usize,
    /// Growth is triggered once `vertex_count / capacity` reaches this ratio.
    pub load_factor: f64,
}

impl Default for GraphParams {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            load_factor: DEFAULT_LOAD_FACTOR,
        }
    }
}

impl GraphParams {
    /// Read `HOLLYWOOD_INITIAL_CAPACITY` and `HOLLYWOOD_LOAD_FACTOR`, keeping
    /// the defaults for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let initial_capacity = std::env::var("HOLLYWOOD_INITIAL_CAPACITY")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(defaults.initial_capacity);
        let load_factor = std::env::var("HOLLYWOOD_LOAD_FACTOR")
            .ok()
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(defaults.load_factor);
        Self {
            initial_capacity,
            load_factor,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.initial_capacity == 0 {
            return Err(HollywoodError::InvalidParams(
                "initial capacity must be at least 1".into(),
            ));
        }
        if !(self.load_factor > 0.0 && self.load_factor < 1.0) {
            return Err(HollywoodError::InvalidParams(format!(
                "load factor must lie in (0, 1), got {}",
                self.load_factor
            )));
        }
        Ok(())
    }
}
