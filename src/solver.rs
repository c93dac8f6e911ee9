//! Newton-Raphson solver settings shared by `rate` and `irr`

use serde::{Deserialize, Serialize};

/// Default starting estimate
pub const DEFAULT_GUESS: f64 = 0.1;

/// Default convergence tolerance
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default iteration budget
pub const DEFAULT_MAX_ITER: u32 = 100;

/// Iteration settings for the root finders
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverOptions {
    /// Starting guess for the rate
    #[serde(default = "default_guess")]
    pub guess: f64,

    /// Required tolerance for the solution
    #[serde(default = "default_tol")]
    pub tol: f64,

    /// Maximum iterations before giving up (result is `NaN`)
    #[serde(default = "default_max_iter")]
    pub max_iter: u32,
}

fn default_guess() -> f64 { DEFAULT_GUESS }
fn default_tol() -> f64 { DEFAULT_TOLERANCE }
fn default_max_iter() -> u32 { DEFAULT_MAX_ITER }

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            guess: DEFAULT_GUESS,
            tol: DEFAULT_TOLERANCE,
            max_iter: DEFAULT_MAX_ITER,
        }
    }
}

impl SolverOptions {
    pub fn with_guess(mut self, guess: f64) -> Self {
        self.guess = guess;
        self
    }

    pub fn with_tol(mut self, tol: f64) -> Self {
        self.tol = tol;
        self
    }

    pub fn with_max_iter(mut self, max_iter: u32) -> Self {
        self.max_iter = max_iter;
        self
    }
}
