use crate::error::{MortgageError, Result};

/// Extracts a named rate column from a delimited text feed.
///
/// The feed has a header row; the delimiter is `;` or `,`, whichever occurs
/// more often on the header line. The first data row with a non-empty value
/// in the series column wins.
pub struct RateFeedParser {
    series: String,
}

impl RateFeedParser {
    pub fn new(series: impl Into<String>) -> Self {
        Self {
            series: series.into(),
        }
    }

    /// Returns `Ok(None)` when the series column is absent or empty, and an
    /// error when the feed cannot be read or the value is not a number.
    pub fn parse(&self, text: &str) -> Result<Option<f64>> {
        let text = text.trim_start_matches('\u{feff}');
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(detect_delimiter(text))
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(text.as_bytes());

        let Some(column) = reader
            .headers()?
            .iter()
            .position(|header| header == self.series)
        else {
            return Ok(None);
        };

        for record in reader.records() {
            let record = record?;
            if let Some(value) = record.get(column).filter(|value| !value.is_empty()) {
                return value.parse::<f64>().map(Some).map_err(|_| {
                    MortgageError::FeedFormatError(format!(
                        "{} value {value:?} is not a number",
                        self.series
                    ))
                });
            }
        }

        Ok(None)
    }
}

fn detect_delimiter(text: &str) -> u8 {
    let header = text.lines().find(|line| !line.trim().is_empty()).unwrap_or("");
    let semicolons = header.matches(';').count();
    let commas = header.matches(',').count();
    if semicolons > commas { b';' } else { b',' }
}
