//! Table command - print the burden curve instead of charting it

use crate::cmd::GrossArgs;
use crate::curve::{sweep, CurvePoint};
use crate::tax::{BurdenCalculator, Category, SocSecBase, TaxYear};
use crate::utils::write_csv;
use clap::{Args, ValueEnum};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;
use std::io;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct TableCommand {
    /// Tax year. Selects the social security bounds unless they are given.
    #[arg(short, long)]
    year: i32,

    /// Social security base minimum, in BGN
    #[arg(long, requires = "socsec_base_max")]
    socsec_base_min: Option<Decimal>,

    /// Social security base maximum, in BGN
    #[arg(long, requires = "socsec_base_min")]
    socsec_base_max: Option<Decimal>,

    /// Having EU citizenship or a permanent residence permit
    #[arg(long)]
    citizen: bool,

    #[command(flatten)]
    gross: GrossArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = TableFormat::Text)]
    format: TableFormat,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum TableFormat {
    #[default]
    Text,
    Csv,
    Json,
}

#[derive(Debug, Serialize)]
struct TableOutput<'a> {
    year: TaxYear,
    category: Category,
    socsec_base: SocSecBase,
    points: &'a [CurvePoint],
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "Gross (BGN)")]
    gross: String,
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Individual")]
    individual: String,
}

impl TableCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let year = TaxYear(self.year);
        let base = self.socsec_base(year)?;
        let category = Category::from_citizen(self.citizen);
        let range = self.gross.range()?;
        let curve = sweep(&range, &BurdenCalculator::new(base, category));

        match self.format {
            TableFormat::Text => {
                self.print_text(year, category, &base, &curve);
                Ok(())
            }
            TableFormat::Csv => write_csv(&curve, io::stdout()),
            TableFormat::Json => {
                let output = TableOutput {
                    year,
                    category,
                    socsec_base: base,
                    points: &curve,
                };
                println!("{}", serde_json::to_string_pretty(&output)?);
                Ok(())
            }
        }
    }

    fn socsec_base(&self, year: TaxYear) -> anyhow::Result<SocSecBase> {
        match (self.socsec_base_min, self.socsec_base_max) {
            (Some(min), Some(max)) => Ok(SocSecBase::new(min, max)?),
            _ => Ok(year.require_socsec_base()?),
        }
    }

    fn print_text(&self, year: TaxYear, category: Category, base: &SocSecBase, curve: &[CurvePoint]) {
        println!();
        println!(
            "TAX BURDEN {} ({}) - socsec base {} to {} BGN",
            year,
            category,
            base.min(),
            base.max()
        );
        println!();

        let rows: Vec<Row> = curve
            .iter()
            .map(|p| Row {
                gross: format_bgn(p.gross),
                company: format_pct(p.company),
                individual: format_pct(p.individual),
            })
            .collect();

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
    }
}

// Decimal's Display precision truncates, so round first.
fn format_bgn(amount: Decimal) -> String {
    format!("{:.2}", amount.round_dp(2))
}

fn format_pct(fraction: Decimal) -> String {
    format!("{:.1}%", (fraction * dec!(100)).round_dp(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentages() {
        assert_eq!(format_pct(dec!(0.21292)), "21.3%");
        assert_eq!(format_pct(dec!(0.5)), "50.0%");
        assert_eq!(format_pct(dec!(-0.0123)), "-1.2%");
        assert_eq!(format_pct(dec!(0.19999)), "20.0%");
    }

    #[test]
    fn amounts_are_rounded() {
        assert_eq!(format_bgn(dec!(623.1155778894472361809045226)), "623.12");
        assert_eq!(format_bgn(dec!(1000)), "1000.00");
    }
}
