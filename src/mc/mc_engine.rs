// src/mc/mc_engine.rs
use crate::error::{validation::*, McError, McResult};
use crate::mc::barrier::BarrierSpec;
use crate::mc::option::OptionContract;
use crate::mc::path_generator::{PathGenerator, PricePath, SimulationParameters};
use crate::rng::SeedSequence;
use rayon::prelude::*;
use tracing::{debug, trace};

/// Scenarios whose seeds are drawn and dispatched together by the price-only
/// entry points
const SCENARIO_BATCH: usize = 1 << 14;

/// Left-to-right sum; the fixed order keeps serial and parallel prices bit-identical
fn accumulate(acc: f64, payoffs: impl Iterator<Item = f64>) -> f64 {
    payoffs.fold(acc, |sum, p| sum + p)
}

fn checked_mean(sum: f64, n: usize) -> McResult<f64> {
    let price = sum / n as f64;
    if !price.is_finite() {
        return Err(McError::NumericalInstability {
            method: "Monte Carlo".to_string(),
            reason: format!("Price estimate is not finite: {}", price),
        });
    }
    Ok(price)
}

/// Model and monitoring parameters shared by every valuation of an engine
#[derive(Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub num_time_steps: usize,
    pub volatility: f64,
    pub risk_free_rate: f64,
    pub dividend_rate: f64,
    pub barrier: BarrierSpec,
}

impl EngineConfig {
    /// Validate the engine configuration
    pub fn validate(&self) -> McResult<()> {
        validate_steps(self.num_time_steps)?;
        validate_positive("volatility", self.volatility)?;
        validate_finite("risk_free_rate", self.risk_free_rate)?;
        validate_finite("dividend_rate", self.dividend_rate)?;
        self.barrier.validate()?;
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            num_time_steps: 12,
            volatility: 0.25,
            risk_free_rate: 0.05,
            dividend_rate: 0.0,
            barrier: BarrierSpec::None,
        }
    }
}

/// Outcome of a valuation: the price plus the per-scenario discounted payoffs
/// it was averaged from
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationResult {
    price: f64,
    discounted_payoffs: Vec<f64>,
    knocked_out: usize,
}

impl ValuationResult {
    /// A value fixed without simulation (inception knock-out, expiry)
    fn terminal(price: f64) -> Self {
        ValuationResult {
            price,
            discounted_payoffs: Vec::new(),
            knocked_out: 0,
        }
    }

    /// Aggregate scenario outcomes in scenario order; `None` marks a knock-out
    fn from_outcomes(outcomes: Vec<Option<f64>>) -> McResult<Self> {
        let n = outcomes.len();
        let knocked_out = outcomes.iter().filter(|o| o.is_none()).count();
        let discounted_payoffs: Vec<f64> =
            outcomes.into_iter().map(|o| o.unwrap_or(0.0)).collect();
        let price = checked_mean(accumulate(0.0, discounted_payoffs.iter().copied()), n)?;

        Ok(ValuationResult {
            price,
            discounted_payoffs,
            knocked_out,
        })
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn discounted_payoffs(&self) -> &[f64] {
        &self.discounted_payoffs
    }

    /// Number of simulated scenarios (0 when no simulation was needed)
    pub fn num_scenarios(&self) -> usize {
        self.discounted_payoffs.len()
    }

    /// Number of scenarios knocked out by the barrier
    pub fn knocked_out(&self) -> usize {
        self.knocked_out
    }

    /// Unbiased sample variance of the discounted payoffs
    pub fn sample_variance(&self) -> f64 {
        let n = self.discounted_payoffs.len();
        if n < 2 {
            return 0.0;
        }
        let sum_sq: f64 = self
            .discounted_payoffs
            .iter()
            .map(|x| (x - self.price) * (x - self.price))
            .sum();
        sum_sq / (n as f64 - 1.0)
    }

    /// Standard error of the price estimate
    pub fn standard_error(&self) -> f64 {
        let n = self.discounted_payoffs.len();
        if n == 0 {
            return 0.0;
        }
        (self.sample_variance() / n as f64).sqrt()
    }

    /// Symmetric interval `price ± z * standard_error`
    pub fn confidence_interval(&self, z: f64) -> (f64, f64) {
        let half_width = z * self.standard_error();
        (self.price - half_width, self.price + half_width)
    }
}

/// Monte Carlo valuation engine for European options with an optional
/// knock-out barrier
///
/// # Algorithm
///
/// For each of `num_scenarios` scenarios:
/// 1. Take the next seed from a root stream seeded with `seed`
/// 2. Simulate a GBM path of `num_time_steps` steps from that seed
/// 3. If the path touches the barrier, the scenario pays 0
/// 4. Otherwise it pays `e^(-rT) * payoff(S_T)`
///
/// The price is the arithmetic mean of the scenario payoffs. Only the
/// risk-free rate discounts; the dividend yield enters through the drift.
///
/// # Reproducibility
///
/// Scenario seeds are drawn in scenario order on the calling thread, before
/// the scenarios that use them are dispatched. [`ValuationEngine::calc_price_par`] therefore simulates exactly the
/// same paths as [`ValuationEngine::calc_price`] and sums them in the same
/// order, so both return bit-identical prices.
#[derive(Debug, Clone)]
pub struct ValuationEngine {
    contract: OptionContract,
    config: EngineConfig,
}

impl ValuationEngine {
    pub fn new(contract: OptionContract, config: EngineConfig) -> McResult<Self> {
        config.validate()?;
        debug!(
            payoff = contract.payoff().name(),
            strike = contract.payoff().strike(),
            time_to_expiration = contract.time_to_expiration(),
            steps = config.num_time_steps,
            volatility = config.volatility,
            barrier = config.barrier.name(),
            "valuation engine created"
        );
        Ok(ValuationEngine { contract, config })
    }

    pub fn contract(&self) -> &OptionContract {
        &self.contract
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Serial Monte Carlo price
    pub fn calc_price(&self, spot: f64, num_scenarios: usize, seed: u64) -> McResult<f64> {
        self.price_in_batches(spot, num_scenarios, seed, false)
    }

    /// Parallel Monte Carlo price; bit-identical to [`Self::calc_price`]
    pub fn calc_price_par(&self, spot: f64, num_scenarios: usize, seed: u64) -> McResult<f64> {
        self.price_in_batches(spot, num_scenarios, seed, true)
    }

    /// Price without keeping per-scenario payoffs
    ///
    /// Seeds are drawn from the root stream one batch at a time, still in
    /// scenario order and before the batch is dispatched. Each batch is folded
    /// into the running sum in scenario order, so memory is bounded by
    /// `SCENARIO_BATCH` and the result equals [`Self::simulate`]'s price.
    fn price_in_batches(
        &self,
        spot: f64,
        num_scenarios: usize,
        seed: u64,
        parallel: bool,
    ) -> McResult<f64> {
        if let Some(result) = self.terminal_value(spot)? {
            return Ok(result.price());
        }
        let generator = self.path_generator(spot, num_scenarios)?;
        let disc_factor = self.discount_factor();
        let payoff_of = |s: u64| {
            self.scenario_outcome(&generator.generate(s), disc_factor)
                .unwrap_or(0.0)
        };

        let mut seeds = SeedSequence::new(seed);
        let mut sum = 0.0;
        let mut remaining = num_scenarios;
        while remaining > 0 {
            let batch = seeds.take_seeds(remaining.min(SCENARIO_BATCH));
            remaining -= batch.len();
            sum = if parallel {
                let payoffs: Vec<f64> = batch.par_iter().map(|&s| payoff_of(s)).collect();
                accumulate(sum, payoffs.into_iter())
            } else {
                accumulate(sum, batch.iter().map(|&s| payoff_of(s)))
            };
        }

        let price = checked_mean(sum, num_scenarios)?;
        debug!(spot, num_scenarios, seed, parallel, price, "valuation done");
        Ok(price)
    }

    /// Serial valuation returning every discounted scenario payoff
    pub fn simulate(
        &self,
        spot: f64,
        num_scenarios: usize,
        seed: u64,
    ) -> McResult<ValuationResult> {
        if let Some(result) = self.terminal_value(spot)? {
            return Ok(result);
        }
        let generator = self.path_generator(spot, num_scenarios)?;
        let seeds = SeedSequence::new(seed).take_seeds(num_scenarios);
        let disc_factor = self.discount_factor();

        let outcomes: Vec<Option<f64>> = seeds
            .iter()
            .map(|&s| self.scenario_outcome(&generator.generate(s), disc_factor))
            .collect();

        let result = ValuationResult::from_outcomes(outcomes)?;
        debug!(spot, num_scenarios, seed, price = result.price(), "serial valuation done");
        Ok(result)
    }

    /// Parallel valuation returning every discounted scenario payoff
    ///
    /// Each scenario is an independent rayon task that owns its seed. The
    /// indexed collect joins the outcomes back in scenario order before they
    /// are aggregated. A panic inside any task is re-raised on the caller.
    pub fn simulate_par(
        &self,
        spot: f64,
        num_scenarios: usize,
        seed: u64,
    ) -> McResult<ValuationResult> {
        if let Some(result) = self.terminal_value(spot)? {
            return Ok(result);
        }
        let generator = self.path_generator(spot, num_scenarios)?;
        let seeds = SeedSequence::new(seed).take_seeds(num_scenarios);
        let disc_factor = self.discount_factor();

        let outcomes: Vec<Option<f64>> = seeds
            .par_iter()
            .map(|&s| self.scenario_outcome(&generator.generate(s), disc_factor))
            .collect();

        let result = ValuationResult::from_outcomes(outcomes)?;
        debug!(spot, num_scenarios, seed, price = result.price(), "parallel valuation done");
        Ok(result)
    }

    /// Cases settled without simulation: knocked out at inception, or expired
    ///
    /// Only finiteness of the spot is required here; positivity is checked
    /// once a path actually has to be simulated.
    fn terminal_value(&self, spot: f64) -> McResult<Option<ValuationResult>> {
        validate_finite("spot", spot)?;

        if self.config.barrier.breached_at_inception(spot) {
            trace!(spot, barrier = self.config.barrier.name(), "knocked out at inception");
            return Ok(Some(ValuationResult::terminal(0.0)));
        }

        if self.contract.time_to_expiration() == 0.0 {
            trace!(spot, "expired contract, paying intrinsic value");
            return Ok(Some(ValuationResult::terminal(
                self.contract.option_payoff(spot),
            )));
        }

        Ok(None)
    }

    /// Validate the scenario count and build the path generator
    fn path_generator(&self, spot: f64, num_scenarios: usize) -> McResult<PathGenerator> {
        validate_scenarios(num_scenarios)?;
        let generator = PathGenerator::new(SimulationParameters {
            spot,
            num_time_steps: self.config.num_time_steps,
            time_to_expiration: self.contract.time_to_expiration(),
            volatility: self.config.volatility,
            risk_free_rate: self.config.risk_free_rate,
            dividend_rate: self.config.dividend_rate,
        })?;
        Ok(generator)
    }

    fn discount_factor(&self) -> f64 {
        (-self.config.risk_free_rate * self.contract.time_to_expiration()).exp()
    }

    /// Discounted payoff of one path, or `None` if the barrier knocked it out
    fn scenario_outcome(&self, path: &PricePath, disc_factor: f64) -> Option<f64> {
        if self.config.barrier.breached_on_path(path.as_slice()) {
            None
        } else {
            Some(disc_factor * self.contract.option_payoff(path.terminal()))
        }
    }
}
