// src/analytics/bs_analytic.rs
//! Analytical Black-Scholes-Merton prices for European options
//!
//! # Mathematical Foundation
//!
//! With a continuous dividend yield q the underlying follows, under the
//! risk-neutral measure:
//! ```text
//! dS_t = (r - q) S_t dt + σ S_t dW_t
//! ```
//!
//! These closed forms serve as the reference the Monte Carlo engine is
//! checked against for the no-barrier case.

use crate::math_utils::norm_cdf;

/// d₁ and d₂ terms shared by call and put
///
/// ```text
/// d₁ = [ln(S/K) + (r - q + σ²/2)T] / (σ√T)
/// d₂ = d₁ - σ√T
/// ```
fn d1_d2(s: f64, k: f64, r: f64, q: f64, sigma: f64, t: f64) -> (f64, f64) {
    let sig_sqrt_t = sigma * t.sqrt();
    let d1 = ((s / k).ln() + (r - q + 0.5 * sigma * sigma) * t) / sig_sqrt_t;
    (d1, d1 - sig_sqrt_t)
}

/// Black-Scholes-Merton European call price
///
/// # Formula
/// ```text
/// C = S*e^(-qT)*Φ(d₁) - K*e^(-rT)*Φ(d₂)
/// ```
///
/// At expiry (`t <= 0`) the intrinsic value is returned.
pub fn bs_call_price(s: f64, k: f64, r: f64, q: f64, sigma: f64, t: f64) -> f64 {
    if t <= 0.0 {
        return (s - k).max(0.0);
    }
    let (d1, d2) = d1_d2(s, k, r, q, sigma, t);
    s * (-q * t).exp() * norm_cdf(d1) - k * (-r * t).exp() * norm_cdf(d2)
}

/// Black-Scholes-Merton European put price
///
/// # Formula
/// ```text
/// P = K*e^(-rT)*Φ(-d₂) - S*e^(-qT)*Φ(-d₁)
/// ```
pub fn bs_put_price(s: f64, k: f64, r: f64, q: f64, sigma: f64, t: f64) -> f64 {
    if t <= 0.0 {
        return (k - s).max(0.0);
    }
    let (d1, d2) = d1_d2(s, k, r, q, sigma, t);
    k * (-r * t).exp() * norm_cdf(-d2) - s * (-q * t).exp() * norm_cdf(-d1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_call_with_dividend_reference() {
        // ITM call: K=75, S=100, σ=0.25, r=5%, q=7.5%, T=0.5
        let price = bs_call_price(100.0, 75.0, 0.05, 0.075, 0.25, 0.5);
        assert_abs_diff_eq!(price, 23.551_799_206, epsilon = 1e-6);
    }

    #[test]
    fn test_no_dividend_reference() {
        // Textbook ATM call: S=K=100, r=5%, σ=20%, T=1
        let price = bs_call_price(100.0, 100.0, 0.05, 0.0, 0.2, 1.0);
        assert_abs_diff_eq!(price, 10.450_583_572_185_565, epsilon = 1e-6);
    }

    #[test]
    fn test_put_call_parity() {
        let (s, k, r, q, sigma, t) = (100.0, 105.0, 0.05, 0.08, 0.25, 1.0);
        let call = bs_call_price(s, k, r, q, sigma, t);
        let put = bs_put_price(s, k, r, q, sigma, t);
        let forward_diff = s * (-q * t).exp() - k * (-r * t).exp();
        assert_abs_diff_eq!(call - put, forward_diff, epsilon = 1e-10);
    }

    #[test]
    fn test_expiry_gives_intrinsic() {
        assert_eq!(bs_call_price(60.0, 50.0, 0.05, 0.0, 0.2, 0.0), 10.0);
        assert_eq!(bs_put_price(60.0, 50.0, 0.05, 0.0, 0.2, 0.0), 0.0);
    }
}
