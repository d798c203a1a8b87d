use crate::error::Result;
use async_trait::async_trait;

/// A source of the published annual interest rate used as a default.
///
/// `Ok(None)` means the source answered but had no usable rate; callers fall
/// back to a fixed default in both that case and the error case.
#[async_trait]
pub trait RateSource: Send + Sync {
    async fn current_rate(&self) -> Result<Option<f64>>;
}

pub type RateSourceBox = Box<dyn RateSource>;
