use crate::domain::repayment::RepaymentResult;
use crate::interfaces::currency::{format_pounds_and_pence, format_whole_pounds};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A repayment result rendered as currency strings, in the shape returned
/// by the HTTP API and printed by `mortcalc calculate`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedRepayment {
    pub monthly_payment: String,
    pub total_repayment: String,
    pub capital: String,
    pub interest_paid: String,
    pub affordable_monthly_payment: String,
    /// Year → balance in whole pounds, in ascending year order.
    pub remaining_debt: BTreeMap<u32, String>,
}

impl From<&RepaymentResult> for FormattedRepayment {
    fn from(result: &RepaymentResult) -> Self {
        Self {
            monthly_payment: format_pounds_and_pence(result.monthly_payment),
            total_repayment: format_pounds_and_pence(result.total_repayment),
            capital: format_pounds_and_pence(result.capital),
            interest_paid: format_pounds_and_pence(result.interest_paid),
            affordable_monthly_payment: format_pounds_and_pence(result.affordable_monthly_payment),
            remaining_debt: result
                .remaining_debt
                .iter()
                .map(|(year, balance)| (year, format_whole_pounds(balance)))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::amortization::calculate;
    use crate::domain::loan::LoanInputs;

    #[test]
    fn test_formats_reference_scenario() {
        let result = calculate(&LoanInputs::new(100_000.0, 20_000.0, 5.0, 30.0));
        let formatted = FormattedRepayment::from(&result);

        assert_eq!(formatted.monthly_payment, "£429.46");
        assert_eq!(formatted.total_repayment, "£154,604.63");
        assert_eq!(formatted.capital, "£80,000.00");
        assert_eq!(formatted.interest_paid, "£74,604.63");
        assert_eq!(formatted.affordable_monthly_payment, "£587.01");
        assert_eq!(formatted.remaining_debt.len(), 31);
        assert_eq!(formatted.remaining_debt[&0], "£80,000");
        assert_eq!(formatted.remaining_debt[&1], "£78,820");
        assert_eq!(formatted.remaining_debt[&29], "£5,017");
        assert_eq!(formatted.remaining_debt[&30], "£0");
    }

    #[test]
    fn test_serializes_camel_case_with_ordered_years() {
        let result = calculate(&LoanInputs::new(100_000.0, 20_000.0, 5.0, 12.0));
        let json = serde_json::to_string(&FormattedRepayment::from(&result)).unwrap();

        assert!(json.starts_with(r#"{"monthlyPayment":"#));
        assert!(json.contains(r#""affordableMonthlyPayment":"#));
        let year_2 = json.find(r#""2":"#).unwrap();
        let year_10 = json.find(r#""10":"#).unwrap();
        assert!(year_2 < year_10);
    }

    #[test]
    fn test_degenerate_inputs_render_non_finite() {
        let result = calculate(&LoanInputs::new(100_000.0, 20_000.0, 0.0, 0.0));
        let formatted = FormattedRepayment::from(&result);

        assert_eq!(formatted.monthly_payment, "£∞");
        assert_eq!(formatted.total_repayment, "£NaN");
        assert_eq!(formatted.interest_paid, "£0.00");
        assert_eq!(formatted.remaining_debt.len(), 1);
    }
}
