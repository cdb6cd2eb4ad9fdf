//! Sampling of the burden curves over a range of monthly gross incomes.

use crate::error::{Error, Result};
use crate::tax::BurdenCalculator;
use bgtax_derive::Columns;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::Serialize;

pub const DEFAULT_GROSS_MIN: Decimal = dec!(500);
pub const DEFAULT_GROSS_MAX: Decimal = dec!(25000);
pub const DEFAULT_POINTS: usize = 200;

/// Lowest gross income accepted as the start of a range. Burdens are
/// relative to gross, so smaller incomes overflow the division.
pub const MIN_GROSS: Decimal = dec!(1);

/// Describes one exported column of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub name: &'static str,
    pub unit: &'static str,
    pub description: &'static str,
}

/// Evenly spaced monthly gross incomes, both ends included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrossRange {
    min: Decimal,
    max: Decimal,
    points: usize,
}

impl GrossRange {
    pub fn new(min: Decimal, max: Decimal, points: usize) -> Result<Self> {
        let reason = if min < MIN_GROSS {
            Some("minimum must be at least 1 BGN")
        } else if min >= max {
            Some("minimum must be below maximum")
        } else if points < 2 {
            Some("at least two points are needed")
        } else {
            None
        };
        match reason {
            Some(reason) => Err(Error::GrossRange { min, max, reason }),
            None => Ok(GrossRange { min, max, points }),
        }
    }

    pub fn min(&self) -> Decimal {
        self.min
    }

    pub fn max(&self) -> Decimal {
        self.max
    }

    pub fn points(&self) -> usize {
        self.points
    }

    pub fn samples(&self) -> impl Iterator<Item = Decimal> + '_ {
        let last = self.points - 1;
        let step = (self.max - self.min) / Decimal::from(last);
        (0..self.points).map(move |i| {
            if i == last {
                self.max
            } else {
                self.min + step * Decimal::from(i)
            }
        })
    }
}

impl Default for GrossRange {
    fn default() -> Self {
        GrossRange {
            min: DEFAULT_GROSS_MIN,
            max: DEFAULT_GROSS_MAX,
            points: DEFAULT_POINTS,
        }
    }
}

/// Burden of both ways of working at one gross income.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema, Columns)]
pub struct CurvePoint {
    /// Monthly gross income
    #[column(unit = "BGN")]
    #[serde(with = "rust_decimal::serde::float")]
    #[schemars(with = "f64")]
    pub gross: Decimal,
    /// Share of gross income lost when paid out as dividends from a company
    #[column(unit = "fraction")]
    #[serde(rename = "company_burden", with = "rust_decimal::serde::float")]
    #[schemars(with = "f64")]
    pub company: Decimal,
    /// Share of gross income lost when working as a self-insured individual
    #[column(unit = "fraction")]
    #[serde(rename = "individual_burden", with = "rust_decimal::serde::float")]
    #[schemars(with = "f64")]
    pub individual: Decimal,
}

pub fn sweep(range: &GrossRange, calc: &BurdenCalculator) -> Vec<CurvePoint> {
    range
        .samples()
        .map(|gross| CurvePoint {
            gross,
            company: calc.company_burden(gross),
            individual: calc.individual_burden(gross),
        })
        .collect()
}
