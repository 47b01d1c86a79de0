// src/mc/option.rs
use crate::error::{validation::*, McResult};
use crate::mc::payoffs::Payoff;

/// A European option: an owned payoff and the time remaining to expiration
///
/// Cloning deep-copies the payoff. `time_to_expiration == 0` is a valid
/// terminal state in which the payoff is evaluated immediately at spot.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionContract {
    payoff: Payoff,
    time_to_expiration: f64,
}

impl OptionContract {
    pub fn new(payoff: Payoff, time_to_expiration: f64) -> McResult<Self> {
        validate_non_negative("time_to_expiration", time_to_expiration)?;
        validate_non_negative("strike", payoff.strike())?;
        Ok(OptionContract {
            payoff,
            time_to_expiration,
        })
    }

    pub fn option_payoff(&self, spot: f64) -> f64 {
        self.payoff.payoff(spot)
    }

    /// Time to expiration in years
    pub fn time_to_expiration(&self) -> f64 {
        self.time_to_expiration
    }

    pub fn payoff(&self) -> &Payoff {
        &self.payoff
    }
}
