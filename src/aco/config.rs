//! ACO configuration.
//!
//! [`AcoConfig`] holds every parameter of a solve. There is no
//! process-wide state: two runs with different configs never interact.

/// Configuration for the Ant System solver.
///
/// # Defaults
///
/// ```
/// use u_aco::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.num_ants, 50);
/// assert_eq!(config.evaluation_budget, 10_000);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_aco::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_alpha(1.0)
///     .with_beta(5.0)
///     .with_num_ants(20)
///     .with_rho(0.5)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Pheromone exponent. Higher values make ants follow strong trails.
    pub alpha: f64,

    /// Heuristic exponent. Higher values make ants greedier towards
    /// nearby cities.
    pub beta: f64,

    /// Number of ants (tour constructions) per iteration.
    pub num_ants: usize,

    /// Maximum number of iterations.
    pub max_iterations: usize,

    /// Evaporation rate in `(0, 1]`.
    pub rho: f64,

    /// Deposit scale: each tour of length `L` deposits `q / L` per step.
    pub q: f64,

    /// Maximum number of fitness evaluations (constructed tours).
    ///
    /// Checked after each iteration, so the final count may overshoot by
    /// up to `num_ants - 1`. Set to 0 to disable.
    pub evaluation_budget: usize,

    /// Whether to construct the ants of an iteration on the rayon pool.
    ///
    /// Has no effect unless the `parallel` feature is enabled. Results are
    /// identical either way for a fixed seed.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// Checked at the start of each iteration.
    pub time_limit_ms: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            beta: 10.0,
            num_ants: 50,
            max_iterations: 10_000,
            rho: 0.1,
            q: 1.0,
            evaluation_budget: 10_000,
            parallel: false,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl AcoConfig {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_rho(mut self, rho: f64) -> Self {
        self.rho = rho;
        self
    }

    pub fn with_q(mut self, q: f64) -> Self {
        self.q = q;
        self
    }

    /// Sets the evaluation budget (0 to disable).
    pub fn with_evaluation_budget(mut self, n: usize) -> Self {
        self.evaluation_budget = n;
        self
    }

    /// Enables or disables parallel ant construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Preset for quick runs on small instances.
    ///
    /// - Ants: 10, Iterations: 200, Budget: 2,000 evaluations
    pub fn fast() -> Self {
        Self {
            num_ants: 10,
            max_iterations: 200,
            evaluation_budget: 2_000,
            ..Self::default()
        }
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(format!("alpha must be finite and non-negative, got {}", self.alpha));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(format!("beta must be finite and non-negative, got {}", self.beta));
        }
        if self.num_ants == 0 {
            return Err("num_ants must be at least 1".into());
        }
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if !(self.rho > 0.0 && self.rho <= 1.0) {
            return Err(format!("rho must be in (0, 1], got {}", self.rho));
        }
        if !self.q.is_finite() || self.q <= 0.0 {
            return Err(format!("q must be finite and positive, got {}", self.q));
        }
        if self.time_limit_ms == Some(0) {
            return Err("time_limit_ms must be positive or None".into());
        }
        Ok(())
    }
}
