//! Build and clean commands - render every year/category chart into a directory

use crate::cmd::{render_chart, GrossArgs};
use crate::error::Error;
use crate::tax::{BurdenCalculator, Category, TaxYear, KNOWN_YEARS};
use anyhow::Context;
use clap::Args;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Args, Debug)]
pub struct BuildCommand {
    /// Directory the charts are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Remove the output directory before building
    #[arg(long)]
    clean: bool,

    /// Only build these years (repeatable). Defaults to all known years.
    #[arg(short, long)]
    year: Vec<i32>,

    #[command(flatten)]
    gross: GrossArgs,
}

#[derive(Args, Debug)]
pub struct CleanCommand {
    /// Directory to remove
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,
}

/// One chart to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub year: TaxYear,
    pub category: Category,
}

impl Target {
    pub fn file_name(&self) -> String {
        format!("{}_{}.png", self.year, self.category)
    }
}

/// Every year paired with every category, years first.
pub fn targets(years: &[TaxYear]) -> Vec<Target> {
    years
        .iter()
        .flat_map(|&year| {
            Category::ALL
                .into_iter()
                .map(move |category| Target { year, category })
        })
        .collect()
}

impl BuildCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let years = self.selected_years()?;
        let range = self.gross.range()?;

        if self.clean {
            clean_dir(&self.output_dir)?;
        }
        fs::create_dir_all(&self.output_dir).with_context(|| {
            format!("Failed to create output directory {}", self.output_dir.display())
        })?;

        let targets = targets(&years);
        for target in &targets {
            let base = target.year.require_socsec_base()?;
            let calc = BurdenCalculator::new(base, target.category);
            let path = self.output_dir.join(target.file_name());
            log::info!(
                "Building {} (socsec base {}..{})",
                path.display(),
                base.min(),
                base.max()
            );
            render_chart(target.year, &calc, &range, &path)?;
        }

        println!(
            "Built {} charts in {}",
            targets.len(),
            self.output_dir.display()
        );
        Ok(())
    }

    fn selected_years(&self) -> Result<Vec<TaxYear>, Error> {
        if self.year.is_empty() {
            return Ok(KNOWN_YEARS.to_vec());
        }
        let mut years = Vec::with_capacity(self.year.len());
        for &year in &self.year {
            let year = TaxYear(year);
            year.require_socsec_base()?;
            if !years.contains(&year) {
                years.push(year);
            }
        }
        Ok(years)
    }
}

impl CleanCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        clean_dir(&self.output_dir)
    }
}

/// Remove `dir` and everything in it. A missing directory is fine.
pub fn clean_dir(dir: &Path) -> anyhow::Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => {
            log::info!("Removed {}", dir.display());
            Ok(())
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            log::debug!("{} does not exist, nothing to clean", dir.display());
            Ok(())
        }
        Err(err) => Err(err).with_context(|| format!("Failed to remove {}", dir.display())),
    }
}
