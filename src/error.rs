use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while validating inputs or rendering a chart.
#[derive(Debug, Error)]
pub enum Error {
    #[error("social security base minimum {min} is greater than the maximum {max}")]
    SocSecBaseInverted { min: Decimal, max: Decimal },
    #[error("social security base bounds must not be negative (min {min}, max {max})")]
    SocSecBaseNegative { min: Decimal, max: Decimal },
    #[error("invalid gross income range {min}..{max}: {reason}")]
    GrossRange {
        min: Decimal,
        max: Decimal,
        reason: &'static str,
    },
    #[error("no social security bounds known for year {0} (known years: 2018-2023)")]
    UnknownYear(i32),
    #[error("failed to load the embedded chart font")]
    Font,
    #[error("failed to render chart: {0}")]
    Render(String),
    #[error("failed to encode chart image")]
    Encode(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
