use crate::domain::ports::RateSource;
use crate::error::Result;
use async_trait::async_trait;

/// A rate source that always answers with the same value, or with nothing.
///
/// Used when the rate feed is disabled and in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixedRateSource {
    rate: Option<f64>,
}

impl FixedRateSource {
    pub fn new(rate: f64) -> Self {
        Self { rate: Some(rate) }
    }

    /// A source with no rate, so callers always fall back.
    pub fn none() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RateSource for FixedRateSource {
    async fn current_rate(&self) -> Result<Option<f64>> {
        Ok(self.rate)
    }
}
