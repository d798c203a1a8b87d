use serde::Deserialize;

/// The four scalar inputs of a repayment calculation.
///
/// No relationship between the fields is enforced: a deposit larger than the
/// property price, a zero or negative term, or a non-finite rate are all
/// accepted and flow through the arithmetic unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoanInputs {
    pub property_price: f64,
    pub deposit: f64,
    /// Annual rate in percent, e.g. `5.0` for 5%.
    pub annual_interest_rate_percent: f64,
    pub term_years: f64,
}

impl LoanInputs {
    pub fn new(
        property_price: f64,
        deposit: f64,
        annual_interest_rate_percent: f64,
        term_years: f64,
    ) -> Self {
        Self {
            property_price,
            deposit,
            annual_interest_rate_percent,
            term_years,
        }
    }

    /// Amount actually borrowed. Recomputed on every call.
    pub fn adjusted_loan_amount(&self) -> f64 {
        self.property_price - self.deposit
    }

    pub fn monthly_rate(&self) -> f64 {
        self.annual_interest_rate_percent / 100.0 / 12.0
    }

    pub fn number_of_payments(&self) -> f64 {
        self.term_years * 12.0
    }

    /// Whole years covered by the remaining-debt schedule.
    ///
    /// The term is truncated toward zero, so `2.5` covers years `1..=2`.
    /// Terms under one year, negative terms and non-finite terms cover no
    /// years at all. Finite terms beyond `u32::MAX` years saturate at
    /// `u32::MAX`; callers taking untrusted input bound the result first
    /// (see [`crate::config::MAX_SCHEDULE_YEARS`]).
    pub fn schedule_years(&self) -> u32 {
        if self.term_years.is_finite() && self.term_years >= 1.0 {
            self.term_years.trunc().min(f64::from(u32::MAX)) as u32
        } else {
            0
        }
    }

    /// Same loan with the annual rate shifted by `margin_percent` points.
    pub fn with_rate_margin(&self, margin_percent: f64) -> Self {
        Self {
            annual_interest_rate_percent: self.annual_interest_rate_percent + margin_percent,
            ..*self
        }
    }
}

/// Loan inputs whose interest rate may still need to be defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LoanRequest {
    pub property_price: f64,
    pub deposit: f64,
    pub interest_rate: Option<f64>,
    pub term_years: f64,
}

impl LoanRequest {
    pub fn with_rate(self, annual_interest_rate_percent: f64) -> LoanInputs {
        LoanInputs::new(
            self.property_price,
            self.deposit,
            self.interest_rate.unwrap_or(annual_interest_rate_percent),
            self.term_years,
        )
    }
}
