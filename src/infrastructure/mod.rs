//! `RateSource` implementations.

pub mod file_feed;
pub mod fixed;
pub mod http_feed;

use crate::config::RateFeedConfig;
use crate::domain::ports::RateSourceBox;
use crate::error::Result;
use file_feed::FileRateFeed;
use fixed::FixedRateSource;
use http_feed::HttpRateFeed;

/// Builds the rate source described by `config`.
pub fn rate_source(config: &RateFeedConfig) -> Result<RateSourceBox> {
    let source: RateSourceBox = match config {
        RateFeedConfig::Disabled => Box::new(FixedRateSource::none()),
        RateFeedConfig::Url { url, series } => Box::new(HttpRateFeed::new(url, series)?),
        RateFeedConfig::File { path, series } => Box::new(FileRateFeed::new(path, series)),
    };
    Ok(source)
}
