//! Session configuration.

use std::time::Duration;

use crate::error::{Error, Result};
use crate::graph::MIN_VERTICES;
use crate::solver::DEFAULT_PERMUTATION_CAP;

/// Largest vertex count: one label per letter `A..Z`.
pub const MAX_VERTICES: usize = 26;

/// Tunables for a [`Session`](crate::session::Session).
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Vertices in generated graphs.
    pub vertex_count: usize,
    /// Fraction of all vertex pairs joined by an edge, in `[0, 1]`.
    pub edge_density: f64,
    /// Inactivity before the solver completes the attempt.
    pub idle_timeout: Duration,
    /// Permutations examined by the TSP search.
    pub permutation_cap: usize,
    /// Fixed seed for reproducible graphs; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            vertex_count: 6,
            edge_density: 0.6,
            idle_timeout: Duration::from_secs(30),
            permutation_cap: DEFAULT_PERMUTATION_CAP,
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    pub fn with_edge_density(mut self, edge_density: f64) -> Self {
        self.edge_density = edge_density;
        self
    }

    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }

    pub fn with_permutation_cap(mut self, permutation_cap: usize) -> Self {
        self.permutation_cap = permutation_cap;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check every field.
    ///
    /// # Errors
    /// The first offending field, as [`Error::TooFewVertices`],
    /// [`Error::InvalidDensity`] or [`Error::Config`].
    pub fn validate(&self) -> Result<()> {
        if self.vertex_count < MIN_VERTICES {
            return Err(Error::TooFewVertices {
                count: self.vertex_count,
                min: MIN_VERTICES,
            });
        }
        if self.vertex_count > MAX_VERTICES {
            return Err(Error::Config(format!(
                "vertex_count {} exceeds the maximum of {}",
                self.vertex_count, MAX_VERTICES
            )));
        }
        if !self.edge_density.is_finite() || !(0.0..=1.0).contains(&self.edge_density) {
            return Err(Error::InvalidDensity(self.edge_density));
        }
        if self.idle_timeout.is_zero() {
            return Err(Error::Config("idle_timeout must be positive".to_string()));
        }
        if self.permutation_cap == 0 {
            return Err(Error::Config("permutation_cap must be positive".to_string()));
        }
        Ok(())
    }
}
