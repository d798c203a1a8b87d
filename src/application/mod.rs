//! Application layer: the amortization engine and the service that exposes it.
//!
//! `amortization` holds the pure calculation functions. `MortgageCalculator`
//! wraps them together with a rate source so callers can default a missing
//! interest rate.

pub mod amortization;
pub mod calculator;
