//! Equity Price Path Generation
//!
//! # Math Framework
//!
//! Paths follow the exact discretization of risk-neutral GBM:
//! ```text
//! S_0 = spot
//! S_i = S_{i-1} * exp((r - q - σ²/2)Δt + σ√Δt * Z_i),   i = 1..=N
//! ```
//! with Δt = T / N and Z_i ~ N(0,1) drawn from a generator seeded only by the
//! scenario seed. A generator is a frozen value: the same `(parameters, seed)`
//! pair always yields a bit-identical path, on any thread.

use crate::error::{validation::*, McResult};
use crate::models::gbm::Gbm;
use crate::rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    pub spot: f64,
    pub num_time_steps: usize,
    pub time_to_expiration: f64,
    pub volatility: f64,
    pub risk_free_rate: f64,
    pub dividend_rate: f64,
}

impl SimulationParameters {
    pub fn validate(&self) -> McResult<()> {
        validate_positive("spot", self.spot)?;
        validate_steps(self.num_time_steps)?;
        validate_non_negative("time_to_expiration", self.time_to_expiration)?;
        validate_positive("volatility", self.volatility)?;
        validate_finite("risk_free_rate", self.risk_free_rate)?;
        validate_finite("dividend_rate", self.dividend_rate)?;
        Ok(())
    }

    /// Step length Δt = T / N
    pub fn dt(&self) -> f64 {
        self.time_to_expiration / self.num_time_steps as f64
    }
}

/// One simulated price path: `num_time_steps + 1` prices starting at spot
#[derive(Debug, Clone, PartialEq)]
pub struct PricePath(Vec<f64>);

impl PricePath {
    pub fn initial(&self) -> f64 {
        self.0[0]
    }

    pub fn terminal(&self) -> f64 {
        self.0[self.0.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PathGenerator {
    params: SimulationParameters,
    model: Gbm,
    dt: f64,
}

impl PathGenerator {
    pub fn new(params: SimulationParameters) -> McResult<Self> {
        params.validate()?;
        Ok(PathGenerator {
            params,
            model: Gbm::new(params.risk_free_rate, params.dividend_rate, params.volatility),
            dt: params.dt(),
        })
    }

    /// Simulate one path from a scenario seed
    pub fn generate(&self, seed: u64) -> PricePath {
        let mut rng = rng::path_rng(seed);
        let mut prices = Vec::with_capacity(self.params.num_time_steps + 1);
        prices.push(self.params.spot);

        let mut current_s = self.params.spot;
        for _ in 0..self.params.num_time_steps {
            let z = rng::get_normal_draw(&mut rng);
            current_s = self.model.exact_step(current_s, self.dt, z);
            prices.push(current_s);
        }

        PricePath(prices)
    }
}
