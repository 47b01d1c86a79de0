//! Knock-out Barrier Conditions
//!
//! A knock-out barrier makes the option worthless as soon as the underlying
//! touches the barrier level:
//! - **Up-and-out**: knocked out if any S_t ≥ H
//! - **Down-and-out**: knocked out if any S_t ≤ H
//!
//! Touching the level counts as a breach. The barrier is monitored at every
//! simulated point, including the initial spot and the terminal price.
//! A knocked-out scenario pays nothing (no rebate).

use crate::error::{McError, McResult};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BarrierSpec {
    #[default]
    None,
    UpAndOut(f64),
    DownAndOut(f64),
}

impl BarrierSpec {
    /// Barrier levels must be finite and strictly positive
    pub fn validate(&self) -> McResult<()> {
        match *self {
            BarrierSpec::None => Ok(()),
            BarrierSpec::UpAndOut(level) | BarrierSpec::DownAndOut(level) => {
                if level.is_finite() && level > 0.0 {
                    Ok(())
                } else {
                    Err(McError::InvalidBarrier {
                        kind: self.name().to_string(),
                        level,
                    })
                }
            }
        }
    }

    pub fn level(&self) -> Option<f64> {
        match *self {
            BarrierSpec::None => None,
            BarrierSpec::UpAndOut(level) | BarrierSpec::DownAndOut(level) => Some(level),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            BarrierSpec::None => "none",
            BarrierSpec::UpAndOut(_) => "up-and-out",
            BarrierSpec::DownAndOut(_) => "down-and-out",
        }
    }

    /// True if a single price sits on or beyond the barrier
    #[inline]
    pub fn is_breached_by(&self, price: f64) -> bool {
        match *self {
            BarrierSpec::None => false,
            BarrierSpec::UpAndOut(level) => price >= level,
            BarrierSpec::DownAndOut(level) => price <= level,
        }
    }

    /// True if the option is already knocked out at the valuation spot
    pub fn breached_at_inception(&self, spot: f64) -> bool {
        self.is_breached_by(spot)
    }

    /// True if any point of the path touches or crosses the barrier
    pub fn breached_on_path(&self, path: &[f64]) -> bool {
        match self {
            BarrierSpec::None => false,
            _ => path.iter().any(|&price| self.is_breached_by(price)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_never_breached() {
        let barrier = BarrierSpec::None;
        assert!(!barrier.breached_at_inception(1e12));
        assert!(!barrier.breached_on_path(&[0.0, 1e300, 1e-300]));
        assert!(barrier.validate().is_ok());
        assert_eq!(barrier.level(), None);
    }

    #[test]
    fn test_up_and_out_inception() {
        let barrier = BarrierSpec::UpAndOut(100.0);
        assert!(barrier.breached_at_inception(105.0));
        assert!(barrier.breached_at_inception(100.0));
        assert!(!barrier.breached_at_inception(99.99));
    }

    #[test]
    fn test_down_and_out_inception() {
        let barrier = BarrierSpec::DownAndOut(70.5);
        assert!(barrier.breached_at_inception(70.0));
        assert!(barrier.breached_at_inception(70.5));
        assert!(!barrier.breached_at_inception(100.0));
    }

    #[test]
    fn test_boundary_counts_at_every_index() {
        let up = BarrierSpec::UpAndOut(110.0);
        assert!(up.breached_on_path(&[110.0, 100.0, 95.0]));
        assert!(up.breached_on_path(&[100.0, 110.0, 95.0]));
        assert!(up.breached_on_path(&[100.0, 105.0, 110.0]));
        assert!(!up.breached_on_path(&[100.0, 109.999, 105.0]));

        let down = BarrierSpec::DownAndOut(90.0);
        assert!(down.breached_on_path(&[90.0, 100.0, 95.0]));
        assert!(down.breached_on_path(&[100.0, 95.0, 90.0]));
        assert!(!down.breached_on_path(&[100.0, 90.001, 95.0]));
    }

    #[test]
    fn test_validate_rejects_bad_levels() {
        assert!(BarrierSpec::UpAndOut(110.0).validate().is_ok());
        assert!(BarrierSpec::DownAndOut(0.0).validate().is_err());
        assert!(BarrierSpec::UpAndOut(-10.0).validate().is_err());
        assert!(BarrierSpec::UpAndOut(f64::NAN).validate().is_err());
        assert!(BarrierSpec::DownAndOut(f64::INFINITY).validate().is_err());
    }

    #[test]
    fn test_default_is_none() {
        assert_eq!(BarrierSpec::default(), BarrierSpec::None);
    }
}
