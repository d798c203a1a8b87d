#![allow(dead_code)]

use mortcalc::domain::loan::LoanInputs;
use rand::Rng;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub fn generate_loans_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["property_price", "deposit", "interest_rate", "term_years"])?;

    for i in 1..=rows {
        let price = 100_000 + (i % 500) * 1_000;
        let term = 5 + i % 31;
        wtr.write_record([
            price.to_string(),
            "20000".to_string(),
            format!("{:.2}", (i % 800) as f64 / 100.0),
            term.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// A realistic loan: positive principal, non-negative rate, whole-year term.
pub fn random_loan<R: Rng>(rng: &mut R) -> LoanInputs {
    let property_price = rng.gen_range(50_000.0..2_000_000.0);
    let deposit = property_price * rng.gen_range(0.0..0.9);
    let rate = if rng.gen_bool(0.1) {
        0.0
    } else {
        rng.gen_range(0.01..15.0)
    };
    let term = rng.gen_range(1..=40) as f64;
    LoanInputs::new(property_price, deposit, rate, term)
}
