use thiserror::Error;

/// Errors raised while turning raw measurements into report records.
///
/// Bad input is surfaced to the caller as-is. Nothing here substitutes a
/// default severity for a measurement it could not classify.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReportError {
    #[error("invalid measurement for {metric}: {value}")]
    InvalidMeasurement { metric: String, value: f64 },
    #[error("invalid {category} score {score} (expected 0-100)")]
    InvalidScore { category: String, score: u8 },
}

impl ReportError {
    pub fn invalid_measurement(metric: impl Into<String>, value: f64) -> Self {
        Self::InvalidMeasurement {
            metric: metric.into(),
            value,
        }
    }
}
