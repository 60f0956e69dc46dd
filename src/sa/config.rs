//! SA configuration and cooling schedules.

use crate::error::{Result, TeamingError};

/// Cooling schedule applied after every iteration.
///
/// # References
///
/// - Geometric: standard textbook approach
/// - Linear: fixed-duration cooling over `max_iterations`
/// - LundyMees: Lundy & Mees (1986), with convergence proof
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CoolingSchedule {
    /// Geometric (exponential) cooling: `T_{k+1} = alpha * T_k`.
    ///
    /// `alpha` is the cooling rate. Typical values: 0.99–0.999.
    Geometric { alpha: f64 },

    /// Linear cooling: `T_k = T_0 - k * (T_0 - T_min) / max_iterations`.
    Linear,

    /// Lundy-Mees cooling: `T_{k+1} = T_k / (1 + beta * T_k)`.
    ///
    /// Cools fast at high T, slow at low T.
    LundyMees { beta: f64 },
}

impl Default for CoolingSchedule {
    fn default() -> Self {
        CoolingSchedule::Geometric { alpha: 0.995 }
    }
}

/// Configuration for the annealing search.
///
/// The run stops at whichever comes first: `T <= min_temperature`,
/// `max_iterations`, the time limit, or an external cancel.
///
/// # Examples
///
/// ```
/// use u_teaming::sa::{SaConfig, CoolingSchedule};
///
/// let config = SaConfig::default()
///     .with_initial_temperature(10.0)
///     .with_min_temperature(0.001)
///     .with_cooling_rate(0.999)
///     .with_max_iterations(20_000)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.cooling, CoolingSchedule::Geometric { alpha: 0.999 });
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SaConfig {
    /// Initial temperature. Higher values allow more uphill moves early on.
    pub initial_temperature: f64,

    /// The run stops once the temperature falls to this value.
    pub min_temperature: f64,

    pub cooling: CoolingSchedule,

    /// Hard iteration budget. Must be positive.
    pub max_iterations: usize,

    /// Record the best cost every this many iterations.
    pub history_interval: usize,

    /// Random seed. `None` draws a fresh seed.
    pub seed: Option<u64>,

    /// Optional wall-clock limit in milliseconds, checked once per
    /// iteration.
    pub time_limit_ms: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1.0,
            min_temperature: 0.001,
            cooling: CoolingSchedule::default(),
            max_iterations: 10_000,
            history_interval: 1,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_cooling(mut self, cooling: CoolingSchedule) -> Self {
        self.cooling = cooling;
        self
    }

    /// Geometric cooling with the given rate.
    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling = CoolingSchedule::Geometric { alpha: rate };
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n;
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

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: String| Err(TeamingError::InvalidConfig(msg));

        if !(self.initial_temperature > 0.0 && self.initial_temperature.is_finite()) {
            return invalid(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            ));
        }
        if !(self.min_temperature > 0.0) {
            return invalid(format!(
                "min_temperature must be positive, got {}",
                self.min_temperature
            ));
        }
        if self.min_temperature >= self.initial_temperature {
            return invalid("min_temperature must be less than initial_temperature".into());
        }
        if self.max_iterations == 0 {
            return invalid("max_iterations must be positive".into());
        }
        if self.history_interval == 0 {
            return invalid("history_interval must be positive".into());
        }
        if self.time_limit_ms == Some(0) {
            return invalid("time_limit_ms must be positive or None".into());
        }
        match self.cooling {
            CoolingSchedule::Geometric { alpha } => {
                if !(alpha > 0.0 && alpha < 1.0) {
                    return invalid(format!("cooling rate must be in (0, 1), got {alpha}"));
                }
            }
            CoolingSchedule::LundyMees { beta } => {
                if !(beta > 0.0 && beta.is_finite()) {
                    return invalid(format!("lundy-mees beta must be positive, got {beta}"));
                }
            }
            CoolingSchedule::Linear => {}
        }
        Ok(())
    }
}
