pub mod build;
pub mod chart;
pub mod schema;
pub mod table;
pub mod years;

use crate::chart::{render_png, ChartSpec};
use crate::curve::{sweep, GrossRange, DEFAULT_GROSS_MAX, DEFAULT_GROSS_MIN, DEFAULT_POINTS};
use crate::tax::{BurdenCalculator, TaxYear};
use crate::utils::write_atomic;
use anyhow::Context;
use clap::Args;
use rust_decimal::Decimal;
use std::path::Path;

/// Gross income sweep shared by the commands that evaluate a curve.
#[derive(Args, Debug, Clone)]
pub struct GrossArgs {
    /// Lowest monthly gross income to chart, in BGN
    #[arg(long, default_value_t = DEFAULT_GROSS_MIN)]
    gross_min: Decimal,

    /// Highest monthly gross income to chart, in BGN
    #[arg(long, default_value_t = DEFAULT_GROSS_MAX)]
    gross_max: Decimal,

    /// Number of incomes sampled between the two
    #[arg(long, default_value_t = DEFAULT_POINTS)]
    points: usize,
}

impl GrossArgs {
    pub fn range(&self) -> anyhow::Result<GrossRange> {
        Ok(GrossRange::new(self.gross_min, self.gross_max, self.points)?)
    }
}

/// Compute the burden curve and write it as a PNG chart to `output`.
pub fn render_chart(
    year: TaxYear,
    calc: &BurdenCalculator,
    range: &GrossRange,
    output: &Path,
) -> anyhow::Result<()> {
    let curve = sweep(range, calc);
    let spec = ChartSpec::new(year, calc.category(), range.max());
    let png = render_png(&curve, &spec)
        .with_context(|| format!("Failed to render chart for {} ({})", year, calc.category()))?;
    write_atomic(output, &png)
        .with_context(|| format!("Failed to write chart to {}", output.display()))?;
    log::info!("Chart written to {}", output.display());
    Ok(())
}
