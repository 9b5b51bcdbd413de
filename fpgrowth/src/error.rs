//! Errors raised while preparing a mining run.
//!
//! Tree construction and growth are total; failures only come from the
//! configuration layer and from the opt-in duplicate rejection policy.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MiningError {
    #[error("invalid minimum support fraction: {0} (expected a finite value in [0, 1])")]
    InvalidSupport(f64),

    #[error("duplicate item {item} in transaction {transaction}")]
    DuplicateItem { transaction: usize, item: String },

    #[error("invalid mining configuration: {0}")]
    Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, MiningError>;
