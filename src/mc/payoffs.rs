//! Option Payoff Functions
//!
//! # Mathematical Definitions
//!
//! - **Call**: max(S_T - K, 0) - right to buy at strike K
//! - **Put**: max(K - S_T, 0) - right to sell at strike K
//!
//! Payoffs are plain values: cloning one yields an independent copy, so
//! collections of payoffs can be duplicated without aliasing.

use crate::error::{validation::*, McResult};

/// Enumeration of supported option payoff types
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Payoff {
    /// European call option: max(S_T - K, 0)
    Call { strike: f64 },

    /// European put option: max(K - S_T, 0)
    Put { strike: f64 },
}

impl Payoff {
    /// Checked call constructor; strike must be finite and non-negative
    pub fn call(strike: f64) -> McResult<Self> {
        validate_non_negative("strike", strike)?;
        Ok(Payoff::Call { strike })
    }

    /// Checked put constructor; strike must be finite and non-negative
    pub fn put(strike: f64) -> McResult<Self> {
        validate_non_negative("strike", strike)?;
        Ok(Payoff::Put { strike })
    }

    /// Payoff value at the given spot
    ///
    /// Never negative: both variants floor at zero.
    pub fn payoff(&self, spot: f64) -> f64 {
        match *self {
            Payoff::Call { strike } => (spot - strike).max(0.0),
            Payoff::Put { strike } => (strike - spot).max(0.0),
        }
    }

    pub fn strike(&self) -> f64 {
        match *self {
            Payoff::Call { strike } | Payoff::Put { strike } => strike,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Payoff::Call { .. } => "call",
            Payoff::Put { .. } => "put",
        }
    }
}
