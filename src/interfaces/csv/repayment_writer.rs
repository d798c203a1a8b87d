use crate::domain::loan::LoanInputs;
use crate::domain::repayment::RepaymentResult;
use crate::error::Result;
use crate::interfaces::currency::round_money;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct RepaymentRow {
    property_price: f64,
    deposit: f64,
    interest_rate: f64,
    term_years: f64,
    monthly_payment: String,
    total_repayment: String,
    capital: String,
    interest_paid: String,
    affordable_monthly_payment: String,
}

/// Writes one CSV row of figures, rounded to pence, per calculated loan.
pub struct RepaymentWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> RepaymentWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write(&mut self, loan: &LoanInputs, result: &RepaymentResult) -> Result<()> {
        self.writer.serialize(RepaymentRow {
            property_price: loan.property_price,
            deposit: loan.deposit,
            interest_rate: loan.annual_interest_rate_percent,
            term_years: loan.term_years,
            monthly_payment: pence(result.monthly_payment),
            total_repayment: pence(result.total_repayment),
            capital: pence(result.capital),
            interest_paid: pence(result.interest_paid),
            affordable_monthly_payment: pence(result.affordable_monthly_payment),
        })?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

fn pence(value: f64) -> String {
    match round_money(value, 2) {
        Some(amount) => amount.to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::amortization::calculate;

    fn write_rows(loans: &[LoanInputs]) -> String {
        let mut buffer = Vec::new();
        {
            let mut writer = RepaymentWriter::new(&mut buffer);
            for loan in loans {
                writer.write(loan, &calculate(loan)).unwrap();
            }
            writer.flush().unwrap();
        }
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_writes_header_and_rounded_figures() {
        let output = write_rows(&[LoanInputs::new(100_000.0, 20_000.0, 5.0, 30.0)]);
        let mut lines = output.lines();

        assert_eq!(
            lines.next(),
            Some(
                "property_price,deposit,interest_rate,term_years,monthly_payment,total_repayment,capital,interest_paid,affordable_monthly_payment"
            )
        );
        assert_eq!(
            lines.next(),
            Some("100000.0,20000.0,5.0,30.0,429.46,154604.63,80000.00,74604.63,587.01")
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_writes_non_finite_figures() {
        let output = write_rows(&[LoanInputs::new(100_000.0, 20_000.0, 0.0, 0.0)]);
        let row = output.lines().nth(1).unwrap();
        assert_eq!(row, "100000.0,20000.0,0.0,0.0,inf,NaN,80000.00,0.00,0.00");
    }
}
