//! Chart command - render the burden chart for one year and category

use crate::cmd::{render_chart, GrossArgs};
use crate::tax::{BurdenCalculator, Category, SocSecBase, TaxYear};
use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ChartCommand {
    /// Tax year, shown in the chart title
    #[arg(long)]
    year: i32,

    /// Social security base minimum, in BGN (650 in 2021)
    #[arg(long)]
    socsec_base_min: Decimal,

    /// Social security base maximum, in BGN (3000 in 2021)
    #[arg(long)]
    socsec_base_max: Decimal,

    /// Having EU citizenship or a permanent residence permit
    #[arg(long)]
    citizen: bool,

    #[command(flatten)]
    gross: GrossArgs,

    /// Output PNG file
    #[arg(short, long)]
    output: PathBuf,
}

impl ChartCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let year = TaxYear(self.year);
        let base = SocSecBase::new(self.socsec_base_min, self.socsec_base_max)?;
        let category = Category::from_citizen(self.citizen);
        let range = self.gross.range()?;

        log::debug!(
            "Charting {} ({}): socsec base {}..{}, gross {}..{} in {} points",
            year,
            category,
            base.min(),
            base.max(),
            range.min(),
            range.max(),
            range.points()
        );

        let calc = BurdenCalculator::new(base, category);
        render_chart(year, &calc, &range, &self.output)
    }
}
