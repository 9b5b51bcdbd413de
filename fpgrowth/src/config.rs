//! Mining configuration.

use serde::{Deserialize, Serialize};

use crate::error::{MiningError, Result};

const FRACTION_EPSILON: f64 = 1e-9;

/// Minimum support, either as an absolute transaction count or as a
/// fraction of the number of transactions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinSupport {
    Count(u64),
    Fraction(f64),
}

impl MinSupport {
    /// Resolves to an absolute count for a dataset of `num_transactions`.
    ///
    /// Fractions round up, so `Fraction(0.5)` over 5 transactions needs 3.
    /// Rounding noise in the product is ignored: `Fraction(0.07)` over 100
    /// transactions needs 7, not 8.
    pub fn resolve(&self, num_transactions: usize) -> Result<u64> {
        self.validate()?;
        match *self {
            MinSupport::Count(count) => Ok(count),
            MinSupport::Fraction(fraction) => {
                let min_count = fraction * num_transactions as f64 - FRACTION_EPSILON;
                Ok(min_count.ceil().max(0.0) as u64)
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        match *self {
            MinSupport::Fraction(fraction)
                if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) =>
            {
                Err(MiningError::InvalidSupport(fraction))
            }
            _ => Ok(()),
        }
    }
}

impl Default for MinSupport {
    fn default() -> Self {
        MinSupport::Count(1)
    }
}

/// What to do with an item that appears more than once in one transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Treat the transaction as a set: the item counts once.
    #[default]
    Collapse,
    /// Fail with [`MiningError::DuplicateItem`].
    Reject,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    pub min_support: MinSupport,
    pub duplicates: DuplicatePolicy,
    /// Mine header items concurrently on the rayon pool.
    pub parallel: bool,
}

impl MiningConfig {
    pub fn new(min_support: MinSupport) -> Self {
        Self {
            min_support,
            ..Self::default()
        }
    }

    pub fn with_duplicates(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Parses a TOML document such as
    ///
    /// ```toml
    /// parallel = true
    /// duplicates = "reject"
    ///
    /// [min_support]
    /// fraction = 0.2
    /// ```
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: MiningConfig = toml::from_str(source)?;
        config.min_support.validate()?;
        Ok(config)
    }
}
