use crate::config::FEED_TIMEOUT;
use crate::domain::ports::RateSource;
use crate::error::Result;
use crate::interfaces::csv::rate_feed::RateFeedParser;
use async_trait::async_trait;

/// Fetches the rate feed over HTTP(S) on every request.
///
/// A non-success status is treated as "no rate" rather than an error, the
/// same as a feed without the series column.
pub struct HttpRateFeed {
    client: reqwest::Client,
    url: String,
    parser: RateFeedParser,
}

impl HttpRateFeed {
    pub fn new(url: impl Into<String>, series: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(FEED_TIMEOUT).build()?;
        Ok(Self {
            client,
            url: url.into(),
            parser: RateFeedParser::new(series),
        })
    }
}

#[async_trait]
impl RateSource for HttpRateFeed {
    async fn current_rate(&self) -> Result<Option<f64>> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, url = %self.url, "rate feed request was not successful");
            return Ok(None);
        }

        let text = response.text().await?;
        self.parser.parse(&text)
    }
}
