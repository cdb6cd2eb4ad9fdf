//! Years command - list the social security bounds known for each year

use crate::tax::KNOWN_YEARS;
use clap::Args;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

#[derive(Args, Debug)]
pub struct YearsCommand {
    /// Output as JSON instead of formatted table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize, Tabled)]
struct YearRow {
    #[tabled(rename = "Year")]
    year: i32,
    #[tabled(rename = "Socsec base min")]
    socsec_base_min: String,
    #[tabled(rename = "Socsec base max")]
    socsec_base_max: String,
}

impl YearsCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let rows: Vec<YearRow> = KNOWN_YEARS
            .iter()
            .filter_map(|year| {
                let base = year.socsec_base()?;
                Some(YearRow {
                    year: year.0,
                    socsec_base_min: base.min().to_string(),
                    socsec_base_max: base.max().to_string(),
                })
            })
            .collect();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&rows)?);
        } else {
            println!("{}", Table::new(rows).with(Style::rounded()));
        }
        Ok(())
    }
}
