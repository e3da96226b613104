// Closed-form Black-Scholes pricing for European options on a non-dividend
// paying underlying. All inputs are in model units: time in years, volatility
// and rate as decimal fractions. Nothing here converts units or validates the
// domain; T <= 0 or sigma <= 0 flows through as IEEE-754 inf/NaN.

use std::f64::consts::FRAC_1_SQRT_2;

/// Standard normal cumulative distribution function.
///
/// Evaluated through the error function identity
/// `Φ(x) = 0.5 * (1 + erf(x / sqrt(2)))` using `libm::erf`, which is accurate
/// to double precision and saturates cleanly to 0 and 1 in the tails.
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x * FRAC_1_SQRT_2))
}

/// Price of a European call option under Black-Scholes assumptions.
///
/// ```text
/// d1 = (ln(S/K) + (r + σ²/2) T) / (σ √T)
/// d2 = d1 - σ √T
/// C  = Φ(d1) S - Φ(d2) K e^{-rT}
/// ```
#[allow(non_snake_case)]
pub fn bs_call_price(S: f64, K: f64, T: f64, sigma: f64, r: f64) -> f64 {
    let vol_sqrt_t = sigma * T.sqrt();
    let d1 = ((S / K).ln() + (r + sigma.powi(2) / 2.0) * T) / vol_sqrt_t;
    let d2 = d1 - vol_sqrt_t;
    norm_cdf(d1) * S - norm_cdf(d2) * K * (-r * T).exp()
}

/// Price of a European put option, obtained from the call via put-call parity.
///
/// `P = C + K e^{-rT} - S`
#[allow(non_snake_case)]
pub fn bs_put_price(S: f64, K: f64, T: f64, sigma: f64, r: f64) -> f64 {
    bs_call_price(S, K, T, sigma, r) + K * (-r * T).exp() - S
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm_cdf_midpoint() {
        assert!((norm_cdf(0.0) - 0.5).abs() <= f64::EPSILON);
    }

    #[test]
    fn test_norm_cdf_known_quantiles() {
        // Φ(1.959963984540054) = 0.975
        assert!((norm_cdf(1.959963984540054) - 0.975).abs() < 1e-12);
        assert!((norm_cdf(-1.0) - 0.158_655_253_931_457_05).abs() < 1e-12);
    }

    #[test]
    fn test_norm_cdf_tails_saturate() {
        assert_eq!(norm_cdf(40.0), 1.0);
        assert_eq!(norm_cdf(-40.0), 0.0);
        assert!(!norm_cdf(f64::MAX).is_nan());
        assert!(!norm_cdf(f64::MIN).is_nan());
    }

    #[test]
    fn test_call_textbook_value() {
        let call = bs_call_price(100.0, 100.0, 1.0, 0.2, 0.05);
        assert!((call - 10.4506).abs() < 1e-3, "call = {}", call);
    }

    #[test]
    fn test_put_is_parity_of_call() {
        let (s, k, t, sigma, r) = (42.0, 40.0, 0.5, 0.2, 0.1);
        let put = bs_put_price(s, k, t, sigma, r);
        let expected = bs_call_price(s, k, t, sigma, r) + k * (-r * t).exp() - s;
        assert_eq!(put.to_bits(), expected.to_bits());
    }

    #[test]
    fn test_zero_time_is_not_clamped() {
        let call = bs_call_price(100.0, 100.0, 0.0, 0.2, 0.05);
        assert!(!call.is_finite());
    }
}
