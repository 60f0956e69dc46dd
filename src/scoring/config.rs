//! Scoring and cost configuration.

use crate::error::{Result, TeamingError};

/// How a category value's global frequency becomes its rarity weight.
///
/// The two schemes produce numbers on different scales and are never mixed
/// within one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WeightingScheme {
    /// `1 - frequency`. Weights lie in `[0, 1)`.
    Linear,

    /// `-ln(frequency)`, with weight `1` for a value every participant
    /// chose. Punishes common values harder.
    #[default]
    Logarithmic,
}

/// Category similarity scoring options.
///
/// # Examples
///
/// ```
/// use u_teaming::scoring::{CategoryScoring, WeightingScheme};
///
/// let scoring = CategoryScoring::default()
///     .with_scheme(WeightingScheme::Linear)
///     .with_rescale(false);
/// assert_eq!(scoring.scheme, WeightingScheme::Linear);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryScoring {
    pub scheme: WeightingScheme,

    /// Divide by the largest weight and multiply by 100, giving `[0, 100]`.
    pub rescale: bool,
}

impl Default for CategoryScoring {
    fn default() -> Self {
        Self {
            scheme: WeightingScheme::default(),
            rescale: true,
        }
    }
}

impl CategoryScoring {
    pub fn with_scheme(mut self, scheme: WeightingScheme) -> Self {
        self.scheme = scheme;
        self
    }

    pub fn with_rescale(mut self, rescale: bool) -> Self {
        self.rescale = rescale;
        self
    }
}

/// Weights of the cost terms.
///
/// ```text
/// cost = -category_mean     * mean(category)
///        + category_variance * var(category)
///        - affinity_mean     * mean(affinity)
///        + affinity_variance * var(affinity)
///        + trait_balance     * trait_penalty
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostWeights {
    pub category_mean: f64,
    pub category_variance: f64,
    pub affinity_mean: f64,
    pub affinity_variance: f64,

    /// Weight of the personality balance penalty. `0.0` disables it.
    pub trait_balance: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            category_mean: 2.0,
            category_variance: 1.0,
            affinity_mean: 3.0,
            affinity_variance: 0.5,
            trait_balance: 0.0,
        }
    }
}

impl CostWeights {
    pub fn with_category(mut self, mean: f64, variance: f64) -> Self {
        self.category_mean = mean;
        self.category_variance = variance;
        self
    }

    pub fn with_affinity(mut self, mean: f64, variance: f64) -> Self {
        self.affinity_mean = mean;
        self.affinity_variance = variance;
        self
    }

    pub fn with_trait_balance(mut self, weight: f64) -> Self {
        self.trait_balance = weight;
        self
    }

    /// Validates the weights: all finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        let named = [
            ("category_mean", self.category_mean),
            ("category_variance", self.category_variance),
            ("affinity_mean", self.affinity_mean),
            ("affinity_variance", self.affinity_variance),
            ("trait_balance", self.trait_balance),
        ];
        for (name, w) in named {
            if !w.is_finite() || w < 0.0 {
                return Err(TeamingError::InvalidConfig(format!(
                    "cost weight {name} must be finite and non-negative, got {w}"
                )));
            }
        }
        Ok(())
    }
}

/// Components of the personality balance penalty.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraitBalanceConfig {
    /// Weight of the cross-team variance of mean neuroticism.
    pub neuroticism_variance: f64,

    /// Weight of the mean within-team extraversion standard deviation.
    pub extraversion_spread: f64,

    /// Weight of the share of teams without a highly conscientious member.
    pub conscientiousness_gap: f64,

    /// Conscientiousness above this counts as "high".
    pub high_conscientiousness: f64,
}

impl Default for TraitBalanceConfig {
    fn default() -> Self {
        Self {
            neuroticism_variance: 1.0,
            extraversion_spread: 1.0,
            conscientiousness_gap: 3.0,
            high_conscientiousness: 0.5,
        }
    }
}

impl TraitBalanceConfig {
    pub fn with_high_conscientiousness(mut self, threshold: f64) -> Self {
        self.high_conscientiousness = threshold;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.high_conscientiousness) {
            return Err(TeamingError::InvalidConfig(format!(
                "high_conscientiousness must be in [0, 1], got {}",
                self.high_conscientiousness
            )));
        }
        for w in [
            self.neuroticism_variance,
            self.extraversion_spread,
            self.conscientiousness_gap,
        ] {
            if !w.is_finite() || w < 0.0 {
                return Err(TeamingError::InvalidConfig(format!(
                    "trait balance weights must be finite and non-negative, got {w}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let w = CostWeights::default();
        assert_eq!(w.category_mean, 2.0);
        assert_eq!(w.category_variance, 1.0);
        assert_eq!(w.affinity_mean, 3.0);
        assert_eq!(w.affinity_variance, 0.5);
        assert_eq!(w.trait_balance, 0.0);
        assert!(w.validate().is_ok());
    }

    #[test]
    fn test_negative_weight_rejected() {
        let w = CostWeights::default().with_affinity(-1.0, 0.5);
        assert!(w.validate().is_err());
    }

    #[test]
    fn test_nan_weight_rejected() {
        let w = CostWeights::default().with_trait_balance(f64::NAN);
        assert!(w.validate().is_err());
    }

    #[test]
    fn test_trait_threshold_range() {
        assert!(TraitBalanceConfig::default().validate().is_ok());
        let bad = TraitBalanceConfig::default().with_high_conscientiousness(1.5);
        assert!(bad.validate().is_err());
    }
}
