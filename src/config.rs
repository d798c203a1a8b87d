//! Defaults shared by the binary, the HTTP layer and the rate feed adapters.

use std::time::Duration;

/// Annual rate used whenever no published rate can be obtained.
pub const DEFAULT_INTEREST_RATE: f64 = 4.25;

/// Bank of England IADB export of the official Bank Rate series.
pub const DEFAULT_RATE_FEED_URL: &str = "https://www.bankofengland.co.uk/boeapps/iadb/fromshowcolumns.asp?csv.x=yes&Datefrom=18/Jan/2024&Dateto=18/Feb/2024&SeriesCodes=IUMABEDR&CSVF=TN&UsingCodes=Y&VPD=Y&VFD=N";

/// Column holding the rate in the feed.
pub const DEFAULT_RATE_SERIES: &str = "IUMABEDR";

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Longest term, in whole years, the HTTP API will build a schedule for.
/// Longer terms are rejected with `400` before any calculation runs.
pub const MAX_SCHEDULE_YEARS: u32 = 1_000;

/// Upper bound on a single rate feed request.
pub const FEED_TIMEOUT: Duration = Duration::from_secs(5);

/// Where the default interest rate comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum RateFeedConfig {
    /// Always use [`DEFAULT_INTEREST_RATE`].
    Disabled,
    /// Fetch a feed over HTTP(S).
    Url { url: String, series: String },
    /// Read a feed from a local file.
    File {
        path: std::path::PathBuf,
        series: String,
    },
}

impl RateFeedConfig {
    /// Interprets `location` as a URL when it has an http(s) scheme and as a
    /// file path otherwise.
    pub fn from_location(location: &str, series: &str) -> Self {
        let series = series.to_string();
        if location.starts_with("http://") || location.starts_with("https://") {
            Self::Url {
                url: location.to_string(),
                series,
            }
        } else {
            Self::File {
                path: location.into(),
                series,
            }
        }
    }
}

impl Default for RateFeedConfig {
    fn default() -> Self {
        Self::from_location(DEFAULT_RATE_FEED_URL, DEFAULT_RATE_SERIES)
    }
}
