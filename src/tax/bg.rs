use crate::error::{Error, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// State Social Insurance (14.8%) plus Additional Mandatory Pension
/// Insurance (5%). Payable by everyone.
pub const SOCIAL_SECURITY_RATE_MAIN: Decimal = dec!(0.198);

/// National Health Insurance Fund. Only payable by EU citizens and holders of
/// a permanent residence permit.
pub const SOCIAL_SECURITY_RATE_HEALTH: Decimal = dec!(0.08);

/// Income tax, the same for companies and individuals.
pub const INCOME_TAX_RATE: Decimal = dec!(0.10);

/// Tax on dividends paid out of a company.
pub const DIVIDEND_TAX_RATE: Decimal = dec!(0.05);

/// Share of an individual's gross income recognized as expenses, regardless
/// of the actual expenses.
pub const RECOGNIZED_EXPENSES_INDIVIDUAL: Decimal = dec!(0.25);

/// Monthly accountant fee (150) plus one bank account (5).
pub const FIXED_EXPENSES_INDIVIDUAL: Decimal = dec!(155);

/// Monthly accountant fee (150) plus company bank accounts (15).
pub const FIXED_EXPENSES_COMPANY: Decimal = dec!(165);

/// Years with known social security bounds, in order.
pub const KNOWN_YEARS: [TaxYear; 6] = [
    TaxYear(2018),
    TaxYear(2019),
    TaxYear(2020),
    TaxYear(2021),
    TaxYear(2022),
    TaxYear(2023),
];

/// Monthly income bounds on which social security contributions are paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocSecBase {
    #[serde(with = "rust_decimal::serde::float")]
    min: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    max: Decimal,
}

impl SocSecBase {
    /// Fails when `min > max` or either bound is negative.
    pub fn new(min: Decimal, max: Decimal) -> Result<Self> {
        if min.is_sign_negative() || max.is_sign_negative() {
            return Err(Error::SocSecBaseNegative { min, max });
        }
        if min > max {
            return Err(Error::SocSecBaseInverted { min, max });
        }
        Ok(SocSecBase { min, max })
    }

    pub fn min(&self) -> Decimal {
        self.min
    }

    pub fn max(&self) -> Decimal {
        self.max
    }

    /// Social security base for a monthly gross income.
    pub fn clamp(&self, gross: Decimal) -> Decimal {
        gross.clamp(self.min, self.max)
    }
}

/// Calendar tax year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TaxYear(pub i32);

impl TaxYear {
    /// Social security bounds in effect for self-insured persons in this year.
    pub fn socsec_base(&self) -> Option<SocSecBase> {
        let (min, max) = match self.0 {
            2018 => (dec!(510), dec!(2600)),
            2019 => (dec!(560), dec!(3000)),
            2020 => (dec!(610), dec!(3000)),
            2021 => (dec!(650), dec!(3000)),
            2022 => (dec!(710), dec!(3400)),
            2023 => (dec!(780), dec!(3400)),
            _ => return None,
        };
        Some(SocSecBase { min, max })
    }

    pub fn require_socsec_base(&self) -> Result<SocSecBase> {
        self.socsec_base().ok_or(Error::UnknownYear(self.0))
    }
}

impl std::fmt::Display for TaxYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn known_years_have_bounds() {
        for year in KNOWN_YEARS {
            let base = year.socsec_base().unwrap();
            assert!(base.min() < base.max(), "{year}");
        }
    }

    #[test]
    fn bounds_2021() {
        let base = TaxYear(2021).socsec_base().unwrap();
        assert_eq!(base.min(), dec!(650));
        assert_eq!(base.max(), dec!(3000));
    }

    #[test]
    fn bounds_2023() {
        let base = TaxYear(2023).socsec_base().unwrap();
        assert_eq!(base.min(), dec!(780));
        assert_eq!(base.max(), dec!(3400));
    }

    #[test]
    fn unknown_year() {
        assert_eq!(TaxYear(2017).socsec_base(), None);
        assert!(matches!(
            TaxYear(2024).require_socsec_base(),
            Err(Error::UnknownYear(2024))
        ));
    }

    #[test]
    fn inverted_base_rejected() {
        let err = SocSecBase::new(dec!(3000), dec!(650)).unwrap_err();
        assert!(matches!(err, Error::SocSecBaseInverted { .. }));
    }

    #[test]
    fn negative_base_rejected() {
        let err = SocSecBase::new(dec!(-1), dec!(650)).unwrap_err();
        assert!(matches!(err, Error::SocSecBaseNegative { .. }));
    }

    #[test]
    fn equal_bounds_allowed() {
        let base = SocSecBase::new(dec!(1000), dec!(1000)).unwrap();
        assert_eq!(base.clamp(dec!(500)), dec!(1000));
        assert_eq!(base.clamp(dec!(5000)), dec!(1000));
    }

    #[test]
    fn clamp_within_bounds() {
        let base = SocSecBase::new(dec!(650), dec!(3000)).unwrap();
        assert_eq!(base.clamp(dec!(400)), dec!(650));
        assert_eq!(base.clamp(dec!(2000)), dec!(2000));
        assert_eq!(base.clamp(dec!(10000)), dec!(3000));
    }
}
