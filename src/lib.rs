//! # mc-barrier: Reproducible Monte Carlo Valuation of Barrier Options
//!
//! A Rust library for pricing European calls and puts, optionally with an
//! up-and-out or down-and-out knock-out barrier, by Monte Carlo simulation of
//! risk-neutral Geometric Brownian Motion.
//!
//! ## Key Features
//!
//! - **Reproducible**: A single root seed fixes every scenario path
//! - **Parallel**: Rayon fan-out that returns the bit-identical serial price
//! - **Barrier monitoring**: Knock-out checked at every simulated time step
//! - **Fail fast**: Invalid volatility, step counts or barrier levels are
//!   rejected at construction, never as NaN deep in the scenario loop
//!
//! ## Quick Start
//!
//! ```rust
//! use mc_barrier::mc::barrier::BarrierSpec;
//! use mc_barrier::mc::mc_engine::{EngineConfig, ValuationEngine};
//! use mc_barrier::mc::option::OptionContract;
//! use mc_barrier::mc::payoffs::Payoff;
//!
//! let contract = OptionContract::new(Payoff::Call { strike: 75.0 }, 0.5)
//!     .expect("Valid contract");
//! let engine = ValuationEngine::new(
//!     contract,
//!     EngineConfig {
//!         num_time_steps: 12,
//!         volatility: 0.25,
//!         risk_free_rate: 0.05,
//!         dividend_rate: 0.075,
//!         barrier: BarrierSpec::UpAndOut(110.0),
//!     },
//! )
//! .expect("Valid configuration");
//!
//! let serial = engine.calc_price(100.0, 2_000, 42).expect("Valid inputs");
//! let parallel = engine.calc_price_par(100.0, 2_000, 42).expect("Valid inputs");
//! assert_eq!(serial, parallel);
//! ```
//!
//! ## Mathematical Foundation
//!
//! The option value is the discounted risk-neutral expectation of its payoff,
//! estimated as the sample mean of `e^(-rT) * payoff(S_T)` over simulated
//! paths, with knocked-out paths contributing zero.

// Module declarations
pub mod analytics;
pub mod error;
pub mod math_utils;
pub mod mc;
pub mod models;
pub mod rng;

// Re-export commonly used types for convenience
pub use error::{McError, McResult};
pub use mc::barrier::BarrierSpec;
pub use mc::mc_engine::{EngineConfig, ValuationEngine, ValuationResult};
pub use mc::option::OptionContract;
pub use mc::path_generator::{PathGenerator, PricePath, SimulationParameters};
pub use mc::payoffs::Payoff;
