use crate::application::amortization;
use crate::config::DEFAULT_INTEREST_RATE;
use crate::domain::loan::{LoanInputs, LoanRequest};
use crate::domain::ports::RateSourceBox;
use crate::domain::repayment::RepaymentResult;

/// Entry point used by the CLI and the HTTP layer.
///
/// `MortgageCalculator` pairs the amortization engine with a rate source that
/// supplies the default interest rate. It holds no mutable state, so a single
/// instance can be shared across concurrent requests.
pub struct MortgageCalculator {
    rate_source: RateSourceBox,
}

impl MortgageCalculator {
    /// Creates a new `MortgageCalculator`.
    ///
    /// # Arguments
    ///
    /// * `rate_source` - Where the default annual interest rate comes from.
    pub fn new(rate_source: RateSourceBox) -> Self {
        Self { rate_source }
    }

    pub fn calculate(&self, loan: &LoanInputs) -> RepaymentResult {
        let result = amortization::calculate(loan);
        tracing::debug!(
            property_price = loan.property_price,
            deposit = loan.deposit,
            rate = loan.annual_interest_rate_percent,
            term = loan.term_years,
            monthly_payment = result.monthly_payment,
            "calculated repayment"
        );
        result
    }

    /// The published rate from the source, or [`DEFAULT_INTEREST_RATE`] when
    /// the source fails or has nothing usable. Never errors.
    pub async fn default_interest_rate(&self) -> f64 {
        match self.rate_source.current_rate().await {
            Ok(Some(rate)) if rate.is_finite() => rate,
            Ok(Some(rate)) => {
                tracing::warn!(rate, "rate source returned a non-finite rate, using fallback");
                DEFAULT_INTEREST_RATE
            }
            Ok(None) => {
                tracing::warn!("rate source has no rate, using fallback");
                DEFAULT_INTEREST_RATE
            }
            Err(e) => {
                tracing::warn!(error = %e, "rate source unavailable, using fallback");
                DEFAULT_INTEREST_RATE
            }
        }
    }

    /// Fills in a missing interest rate with the default rate.
    ///
    /// The rate source is only consulted when the request has no rate.
    pub async fn resolve(&self, request: LoanRequest) -> LoanInputs {
        match request.interest_rate {
            Some(rate) => request.with_rate(rate),
            None => request.with_rate(self.default_interest_rate().await),
        }
    }
}
