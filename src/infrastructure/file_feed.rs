use crate::domain::ports::RateSource;
use crate::error::Result;
use crate::interfaces::csv::rate_feed::RateFeedParser;
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads the rate feed from a local file on every request.
pub struct FileRateFeed {
    path: PathBuf,
    parser: RateFeedParser,
}

impl FileRateFeed {
    pub fn new(path: impl Into<PathBuf>, series: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            parser: RateFeedParser::new(series),
        }
    }
}

#[async_trait]
impl RateSource for FileRateFeed {
    async fn current_rate(&self) -> Result<Option<f64>> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        self.parser.parse(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MortgageError;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_rate_from_file() {
        let mut feed = tempfile::NamedTempFile::new().unwrap();
        writeln!(feed, "DATE;IUMABEDR").unwrap();
        writeln!(feed, "01 Feb 2024;5.25").unwrap();

        let source = FileRateFeed::new(feed.path(), "IUMABEDR");
        assert_eq!(source.current_rate().await.unwrap(), Some(5.25));
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileRateFeed::new(dir.path().join("absent.csv"), "IUMABEDR");
        assert!(matches!(
            source.current_rate().await,
            Err(MortgageError::IoError(_))
        ));
    }
}
