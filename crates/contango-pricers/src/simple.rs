//! Simple closed-form pricing functions.

use contango_curves::YieldCurve;
use serde::{Deserialize, Serialize};

use crate::black::norm_cdf;
use crate::error::{PricerError, PricerResult};

/// Option payoff direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Payoff {
    /// Pays when the underlying finishes above the strike (cap side for
    /// rate options).
    Call,
    /// Pays when the underlying finishes below the strike (floor side).
    Put,
}

impl Payoff {
    /// The sign `phi` carried through the Black-Scholes formulas: +1 for
    /// calls, -1 for puts.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Call => 1.0,
            Self::Put => -1.0,
        }
    }
}

impl TryFrom<i32> for Payoff {
    type Error = PricerError;

    /// Maps the external payoff tag: +1 call, -1 put.
    fn try_from(tag: i32) -> Result<Self, Self::Error> {
        match tag {
            1 => Ok(Self::Call),
            -1 => Ok(Self::Put),
            _ => Err(PricerError::invalid_input(format!(
                "payoff tag must be 1 or -1, got {tag}"
            ))),
        }
    }
}

/// Present values of the two legs of a credit default swap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CdsLegs {
    /// PV of the protection (default) leg.
    pub default_pv: f64,
    /// PV of the premium leg.
    pub premium_pv: f64,
}

/// Forward price of an asset paying a continuous dividend yield.
///
/// `F = S * exp((r - q) * T)`.
///
/// # Errors
///
/// [`PricerError::InvalidInput`] when any argument is negative.
pub fn fwd_price(spot: f64, time_to_exp: f64, int_rate: f64, div_yield: f64) -> PricerResult<f64> {
    if spot < 0.0 {
        return Err(PricerError::invalid_input("spot must be non-negative"));
    }
    if time_to_exp < 0.0 {
        return Err(PricerError::invalid_input(
            "time to expiration must be non-negative",
        ));
    }
    if int_rate < 0.0 {
        return Err(PricerError::invalid_input(
            "interest rate must be non-negative",
        ));
    }
    if div_yield < 0.0 {
        return Err(PricerError::invalid_input(
            "dividend yield must be non-negative",
        ));
    }
    Ok(spot * ((int_rate - div_yield) * time_to_exp).exp())
}

/// Checks the arguments shared by the two vanilla Black-Scholes pricers.
fn check_bs_inputs(spot: f64, strike: f64, time_to_exp: f64, volatility: f64) -> PricerResult<()> {
    if spot <= 0.0 {
        return Err(PricerError::invalid_input("spot must be positive"));
    }
    if strike <= 0.0 {
        return Err(PricerError::invalid_input("strike must be positive"));
    }
    if time_to_exp <= 0.0 {
        return Err(PricerError::invalid_input(
            "time to expiration must be positive",
        ));
    }
    if volatility <= 0.0 {
        return Err(PricerError::invalid_input("volatility must be positive"));
    }
    Ok(())
}

/// Price of a European cash-or-nothing digital option under Black-Scholes.
///
/// Pays one unit of currency when the option finishes in the money:
/// `exp(-r T) * N(phi * d2)`.
pub fn digital_option_bs(
    payoff: Payoff,
    spot: f64,
    strike: f64,
    time_to_exp: f64,
    int_rate: f64,
    div_yield: f64,
    volatility: f64,
) -> PricerResult<f64> {
    check_bs_inputs(spot, strike, time_to_exp, volatility)?;

    let phi = payoff.sign();
    let fwd = fwd_price(spot, time_to_exp, int_rate, div_yield)?;
    let sig_t = volatility * time_to_exp.sqrt();
    let d2 = (fwd / strike).ln() / sig_t - 0.5 * sig_t;

    Ok((-int_rate * time_to_exp).exp() * norm_cdf(phi * d2))
}

/// Price of a European option under Black-Scholes.
///
/// `phi * exp(-r T) * (F N(phi d1) - K N(phi d2))` with the usual
/// `d1 = ln(F/K)/(sigma sqrt(T)) + sigma sqrt(T)/2`, `d2 = d1 - sigma sqrt(T)`.
pub fn european_option_bs(
    payoff: Payoff,
    spot: f64,
    strike: f64,
    time_to_exp: f64,
    int_rate: f64,
    div_yield: f64,
    volatility: f64,
) -> PricerResult<f64> {
    check_bs_inputs(spot, strike, time_to_exp, volatility)?;

    let phi = payoff.sign();
    let fwd = fwd_price(spot, time_to_exp, int_rate, div_yield)?;
    let sig_t = volatility * time_to_exp.sqrt();
    let d1 = (fwd / strike).ln() / sig_t + 0.5 * sig_t;
    let d2 = d1 - sig_t;

    let df = (-int_rate * time_to_exp).exp();
    Ok(phi * df * (fwd * norm_cdf(phi * d1) - strike * norm_cdf(phi * d2)))
}

/// Price of a caplet or floorlet under Black's model, discounted and
/// projected off the supplied yield curve.
///
/// The curve's continuously-compounded forward rate over
/// `[time_to_reset, time_to_reset + tenor]` is converted to simple
/// compounding before entering Black's formula; the payoff is discounted
/// from the payment time at the end of the tenor.
pub fn cap_floorlet_bs(
    payoff: Payoff,
    curve: &YieldCurve,
    strike_rate: f64,
    time_to_reset: f64,
    tenor: f64,
    fwd_rate_vol: f64,
) -> PricerResult<f64> {
    if strike_rate <= 0.0 {
        return Err(PricerError::invalid_input("strike rate must be positive"));
    }
    if time_to_reset <= 0.0 {
        return Err(PricerError::invalid_input(
            "time to reset must be positive",
        ));
    }
    if tenor <= 0.0 {
        return Err(PricerError::invalid_input("tenor must be positive"));
    }
    if fwd_rate_vol <= 0.0 {
        return Err(PricerError::invalid_input(
            "forward rate vol must be positive",
        ));
    }

    let payment_time = time_to_reset + tenor;
    let df = curve.discount(payment_time)?;
    let fwd_cc = curve.fwd_rate(time_to_reset, payment_time)?;
    let fwd_simple = ((fwd_cc * tenor).exp() - 1.0) / tenor;

    let phi = payoff.sign();
    let sig_t = fwd_rate_vol * time_to_reset.sqrt();
    let d1 = ((fwd_simple / strike_rate).ln() + 0.5 * fwd_rate_vol * fwd_rate_vol * time_to_reset)
        / sig_t;
    let d2 = d1 - sig_t;

    Ok(phi * df * tenor * (fwd_simple * norm_cdf(phi * d1) - strike_rate * norm_cdf(phi * d2)))
}

/// PV of the default and premium legs of a credit default swap under a flat
/// hazard rate.
///
/// Premium payments fall on the grid `i / pay_freq` clipped at maturity;
/// survival to each payment is `exp(-cred_sprd * t)`. The default leg
/// accrues `(1 - recov)` on the probability of default in each period,
/// discounted at the period end; the premium leg accrues
/// `cds_rate * survival * period length`, discounted the same way.
pub fn cds_pv(
    curve: &YieldCurve,
    cred_sprd: f64,
    cds_rate: f64,
    recov: f64,
    time_to_mat: f64,
    pay_freq: f64,
) -> PricerResult<CdsLegs> {
    if cred_sprd < 0.0 {
        return Err(PricerError::invalid_input(
            "credit spread must be non-negative",
        ));
    }
    if cds_rate < 0.0 {
        return Err(PricerError::invalid_input("CDS rate must be non-negative"));
    }
    if !(0.0..=1.0).contains(&recov) {
        return Err(PricerError::invalid_input(
            "recovery rate must be between 0 and 1",
        ));
    }
    if time_to_mat <= 0.0 {
        return Err(PricerError::invalid_input(
            "time to maturity must be positive",
        ));
    }
    if pay_freq <= 0.0 {
        return Err(PricerError::invalid_input(
            "payment frequency must be positive",
        ));
    }

    let num_payments = (time_to_mat * pay_freq).ceil() as usize;
    let payment_times: Vec<f64> = (1..=num_payments)
        .map(|i| (i as f64 / pay_freq).min(time_to_mat))
        .collect();

    let mut survival = Vec::with_capacity(payment_times.len() + 1);
    survival.push(1.0);
    for &t in &payment_times {
        survival.push((-cred_sprd * t).exp());
    }

    let mut default_pv = 0.0;
    let mut premium_pv = 0.0;
    let mut prev_time = 0.0;
    for (i, &t) in payment_times.iter().enumerate() {
        let df = curve.discount(t)?;
        let default_prob = survival[i] - survival[i + 1];
        default_pv += (1.0 - recov) * default_prob * df;
        premium_pv += cds_rate * survival[i + 1] * df * (t - prev_time);
        prev_time = t;
    }

    Ok(CdsLegs {
        default_pv,
        premium_pv,
    })
}
