//! Match pipeline configuration.

use crate::assignment::DEFAULT_SWAP_ATTEMPTS;
use crate::error::{Result, TeamingError};
use crate::models::RoleQuotas;
use crate::sa::SaConfig;
use crate::scoring::{CategoryScoring, CostWeights, TraitBalanceConfig};

/// Everything a match run needs besides the roster and the edges.
///
/// `annealing.seed` seeds the single RNG used for the initial shuffle,
/// neighbor sampling and Metropolis draws.
///
/// # Examples
///
/// ```
/// use u_teaming::matcher::MatchConfig;
/// use u_teaming::scoring::WeightingScheme;
///
/// let config = MatchConfig::default()
///     .with_team_count(3)
///     .with_scheme(WeightingScheme::Linear)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.annealing.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MatchConfig {
    /// Number of teams to form.
    pub team_count: usize,

    pub quotas: RoleQuotas,

    pub category: CategoryScoring,

    pub weights: CostWeights,

    pub trait_balance: TraitBalanceConfig,

    pub annealing: SaConfig,

    /// Sampling attempts per neighbor before returning an unchanged copy.
    pub swap_attempts: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            team_count: 4,
            quotas: RoleQuotas::default(),
            category: CategoryScoring::default(),
            weights: CostWeights::default(),
            trait_balance: TraitBalanceConfig::default(),
            annealing: SaConfig::default(),
            swap_attempts: DEFAULT_SWAP_ATTEMPTS,
        }
    }
}

impl MatchConfig {
    pub fn with_team_count(mut self, n: usize) -> Self {
        self.team_count = n;
        self
    }

    pub fn with_quotas(mut self, quotas: RoleQuotas) -> Self {
        self.quotas = quotas;
        self
    }

    pub fn with_category(mut self, category: CategoryScoring) -> Self {
        self.category = category;
        self
    }

    pub fn with_scheme(mut self, scheme: crate::scoring::WeightingScheme) -> Self {
        self.category.scheme = scheme;
        self
    }

    pub fn with_weights(mut self, weights: CostWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_trait_balance(mut self, config: TraitBalanceConfig) -> Self {
        self.trait_balance = config;
        self
    }

    pub fn with_annealing(mut self, annealing: SaConfig) -> Self {
        self.annealing = annealing;
        self
    }

    pub fn with_swap_attempts(mut self, n: usize) -> Self {
        self.swap_attempts = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.annealing.seed = Some(seed);
        self
    }

    /// Validates every nested section.
    pub fn validate(&self) -> Result<()> {
        if self.team_count == 0 {
            return Err(TeamingError::InvalidConfig(
                "team_count must be positive".into(),
            ));
        }
        if self.swap_attempts == 0 {
            return Err(TeamingError::InvalidConfig(
                "swap_attempts must be positive".into(),
            ));
        }
        self.quotas.validate()?;
        self.weights.validate()?;
        self.trait_balance.validate()?;
        self.annealing.validate()
    }
}
