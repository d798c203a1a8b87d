//! Fixed-rate, fixed-payment amortization arithmetic.
//!
//! Every function here is pure `f64` arithmetic. Degenerate inputs are not
//! rejected: a zero term at zero rate divides by zero, a deposit above the
//! property price yields negative figures, and non-finite values propagate.
//! Rounding and formatting belong to the presentation layer.

use crate::domain::loan::LoanInputs;
use crate::domain::repayment::{RemainingDebtSchedule, RepaymentResult};

/// Percentage points added to the annual rate for the affordability check.
pub const STRESS_MARGIN_PERCENT: f64 = 3.0;

/// Level monthly payment that fully repays the loan over the term.
pub fn calculate_monthly_payment(
    property_price: f64,
    deposit: f64,
    annual_rate_percent: f64,
    term_years: f64,
) -> f64 {
    let loan = LoanInputs::new(property_price, deposit, annual_rate_percent, term_years);
    monthly_payment(&loan)
}

pub fn calculate_total_repayment(
    property_price: f64,
    deposit: f64,
    annual_rate_percent: f64,
    term_years: f64,
) -> f64 {
    let loan = LoanInputs::new(property_price, deposit, annual_rate_percent, term_years);
    total_repayment(&loan)
}

pub fn calculate_capital(property_price: f64, deposit: f64) -> f64 {
    property_price - deposit
}

pub fn calculate_total_interest_paid(
    property_price: f64,
    deposit: f64,
    annual_rate_percent: f64,
    term_years: f64,
) -> f64 {
    let loan = LoanInputs::new(property_price, deposit, annual_rate_percent, term_years);
    total_interest_paid(&loan)
}

/// Monthly payment with the rate stressed by [`STRESS_MARGIN_PERCENT`].
pub fn calculate_affordable_monthly_payment(
    property_price: f64,
    deposit: f64,
    annual_rate_percent: f64,
    term_years: f64,
) -> f64 {
    let loan = LoanInputs::new(property_price, deposit, annual_rate_percent, term_years);
    affordable_monthly_payment(&loan)
}

pub fn calculate_remaining_debt_schedule(
    property_price: f64,
    deposit: f64,
    annual_rate_percent: f64,
    term_years: f64,
) -> RemainingDebtSchedule {
    let loan = LoanInputs::new(property_price, deposit, annual_rate_percent, term_years);
    remaining_debt_schedule(&loan)
}

/// Runs every calculation for one set of inputs.
pub fn calculate(loan: &LoanInputs) -> RepaymentResult {
    RepaymentResult {
        monthly_payment: monthly_payment(loan),
        total_repayment: total_repayment(loan),
        capital: calculate_capital(loan.property_price, loan.deposit),
        interest_paid: total_interest_paid(loan),
        affordable_monthly_payment: affordable_monthly_payment(loan),
        remaining_debt: remaining_debt_schedule(loan),
    }
}

fn monthly_payment(loan: &LoanInputs) -> f64 {
    let principal = loan.adjusted_loan_amount();
    let rate = loan.monthly_rate();
    let payments = loan.number_of_payments();

    // The zero-rate branch runs before the term guard, so a zero rate with a
    // sub-year term still divides (possibly by zero).
    if rate == 0.0 {
        return principal / payments;
    }
    if loan.term_years < 1.0 {
        return 0.0;
    }

    let growth = (1.0 + rate).powf(payments);
    principal * rate * growth / (growth - 1.0)
}

fn total_repayment(loan: &LoanInputs) -> f64 {
    monthly_payment(loan) * loan.term_years * 12.0
}

fn total_interest_paid(loan: &LoanInputs) -> f64 {
    // Own guard, independent of monthly_payment's zero-rate division.
    if loan.term_years < 1.0 {
        return 0.0;
    }
    total_repayment(loan) - loan.adjusted_loan_amount()
}

fn affordable_monthly_payment(loan: &LoanInputs) -> f64 {
    monthly_payment(&loan.with_rate_margin(STRESS_MARGIN_PERCENT))
}

fn remaining_debt_schedule(loan: &LoanInputs) -> RemainingDebtSchedule {
    let principal = loan.adjusted_loan_amount();
    let rate = loan.monthly_rate();
    let payment = monthly_payment(loan);
    let final_year = loan.schedule_years();

    let mut schedule = RemainingDebtSchedule::new();
    schedule.insert(0, principal);

    for year in 1..=final_year {
        let payments_made = f64::from(year) * 12.0;
        let balance = if year == final_year {
            0.0
        } else if rate == 0.0 {
            principal - payment * payments_made
        } else {
            let growth = (1.0 + rate).powf(payments_made);
            principal * growth - (payment / rate) * (growth - 1.0)
        };
        schedule.insert(year, balance);
    }

    schedule
}
