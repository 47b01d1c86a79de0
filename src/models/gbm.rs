// src/models/gbm.rs
//! Risk-neutral Geometric Brownian Motion with a continuous dividend yield
//!
//! ```text
//! dS_t = (r - q) S_t dt + σ S_t dW_t
//! ```
//!
//! Integrated exactly over a step of length Δt:
//! ```text
//! S_{t+Δt} = S_t * exp((r - q - σ²/2)Δt + σ√Δt * Z),   Z ~ N(0,1)
//! ```
//! The exact log-step keeps every simulated price strictly positive.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gbm {
    pub r: f64,
    pub q: f64,
    pub sigma: f64,
}

impl Gbm {
    pub fn new(r: f64, q: f64, sigma: f64) -> Self {
        Gbm { r, q, sigma }
    }

    /// Deterministic part of the log-increment over `dt`
    pub fn log_drift(&self, dt: f64) -> f64 {
        (self.r - self.q - 0.5 * self.sigma * self.sigma) * dt
    }

    pub fn exact_step(&self, s_t: f64, dt: f64, normal_draw: f64) -> f64 {
        s_t * (self.log_drift(dt) + self.sigma * dt.sqrt() * normal_draw).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_zero_draw_follows_drift() {
        let gbm = Gbm::new(0.05, 0.02, 0.2);
        let dt: f64 = 0.25;
        let expected = 100.0 * ((0.05 - 0.02 - 0.02) * dt).exp();
        assert_relative_eq!(gbm.exact_step(100.0, dt, 0.0), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_step_stays_positive_for_extreme_draw() {
        let gbm = Gbm::new(0.05, 0.0, 0.8);
        assert!(gbm.exact_step(100.0, 1.0, -10.0) > 0.0);
    }

    #[test]
    fn test_zero_dt_is_identity() {
        let gbm = Gbm::new(0.05, 0.075, 0.25);
        assert_eq!(gbm.exact_step(42.0, 0.0, 1.3), 42.0);
    }
}
