use crate::domain::loan::LoanRequest;
use crate::error::{MortgageError, Result};
use std::io::Read;

/// Reads loan scenarios from a CSV source.
///
/// Expected columns are `property_price, deposit, interest_rate, term_years`.
/// An empty `interest_rate` leaves the rate to be defaulted later.
pub struct LoanReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> LoanReader<R> {
    /// Creates a new `LoanReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes one `LoanRequest` per row. A malformed row yields
    /// an error item and does not stop the iteration.
    pub fn loans(self) -> impl Iterator<Item = Result<LoanRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(MortgageError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reader_valid_stream() {
        let data = "property_price, deposit, interest_rate, term_years\n100000, 20000, 5, 30\n300000, 60000, , 15";
        let reader = LoanReader::new(data.as_bytes());
        let results: Vec<Result<LoanRequest>> = reader.loans().collect();

        assert_eq!(results.len(), 2);
        let first = results[0].as_ref().unwrap();
        assert_eq!(first.property_price, 100_000.0);
        assert_eq!(first.interest_rate, Some(5.0));

        let second = results[1].as_ref().unwrap();
        assert_eq!(second.interest_rate, None);
        assert_eq!(second.term_years, 15.0);
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "property_price, deposit, interest_rate, term_years\nlots, 20000, 5, 30\n100000, 20000, 5, 30";
        let reader = LoanReader::new(data.as_bytes());
        let results: Vec<Result<LoanRequest>> = reader.loans().collect();

        assert!(results[0].is_err());
        assert!(results[1].is_ok());
    }
}
