//! Monthly net income and tax burden of a freelancer, either working through
//! a company and paying themselves dividends, or as a self-insured individual.

use crate::tax::bg::{
    SocSecBase, DIVIDEND_TAX_RATE, FIXED_EXPENSES_COMPANY, FIXED_EXPENSES_INDIVIDUAL,
    INCOME_TAX_RATE, RECOGNIZED_EXPENSES_INDIVIDUAL, SOCIAL_SECURITY_RATE_HEALTH,
    SOCIAL_SECURITY_RATE_MAIN,
};
use rust_decimal::Decimal;
use serde::Serialize;

/// Taxpayer category. Citizens also pay health insurance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Foreigner,
    /// EU citizenship or a permanent residence permit
    Citizen,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Foreigner, Category::Citizen];

    pub fn from_citizen(citizen: bool) -> Self {
        if citizen {
            Category::Citizen
        } else {
            Category::Foreigner
        }
    }

    pub fn is_citizen(&self) -> bool {
        matches!(self, Category::Citizen)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Foreigner => "foreigner",
            Category::Citizen => "citizen",
        }
    }

    /// Total social security rate for this category.
    pub fn soc_sec_rate(&self) -> Decimal {
        match self {
            Category::Foreigner => SOCIAL_SECURITY_RATE_MAIN,
            Category::Citizen => SOCIAL_SECURITY_RATE_MAIN + SOCIAL_SECURITY_RATE_HEALTH,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Burden calculator for one social security base range and category.
#[derive(Debug, Clone, Copy)]
pub struct BurdenCalculator {
    base: SocSecBase,
    category: Category,
}

impl BurdenCalculator {
    pub fn new(base: SocSecBase, category: Category) -> Self {
        BurdenCalculator { base, category }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Net monthly income taken out of a company as dividends.
    ///
    /// All income stays with the company, so the owner's own social security
    /// is paid on the minimum base.
    pub fn net_company(&self, gross: Decimal) -> Decimal {
        let soc_sec = self.base.min() * self.category.soc_sec_rate();
        let income_tax_base = (gross - FIXED_EXPENSES_COMPANY - soc_sec).max(Decimal::ZERO);
        let income_tax = income_tax_base * INCOME_TAX_RATE;
        let net_company = gross - soc_sec - income_tax - FIXED_EXPENSES_COMPANY;
        net_company * (Decimal::ONE - DIVIDEND_TAX_RATE)
    }

    /// Net monthly income of a self-insured individual.
    pub fn net_individual(&self, gross: Decimal) -> Decimal {
        let soc_sec = self.base.clamp(gross) * self.category.soc_sec_rate();
        let income_tax_base =
            (gross * (Decimal::ONE - RECOGNIZED_EXPENSES_INDIVIDUAL) - soc_sec).max(Decimal::ZERO);
        let income_tax = income_tax_base * INCOME_TAX_RATE;
        gross - soc_sec - income_tax - FIXED_EXPENSES_INDIVIDUAL
    }

    pub fn company_burden(&self, gross: Decimal) -> Decimal {
        burden(self.net_company(gross), gross)
    }

    pub fn individual_burden(&self, gross: Decimal) -> Decimal {
        burden(self.net_individual(gross), gross)
    }
}

/// Share of `gross` not ending up as `net`. `gross` must be positive.
pub fn burden(net: Decimal, gross: Decimal) -> Decimal {
    Decimal::ONE - net / gross
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tax::bg::TaxYear;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn calc(category: Category) -> BurdenCalculator {
        BurdenCalculator::new(TaxYear(2021).socsec_base().unwrap(), category)
    }

    #[test]
    fn soc_sec_rates() {
        assert_eq!(Category::Foreigner.soc_sec_rate(), dec!(0.198));
        assert_eq!(Category::Citizen.soc_sec_rate(), dec!(0.278));
    }

    #[test]
    fn category_from_flag() {
        assert_eq!(Category::from_citizen(true), Category::Citizen);
        assert_eq!(Category::from_citizen(false), Category::Foreigner);
        assert_eq!(Category::Citizen.to_string(), "citizen");
    }

    #[test]
    fn company_foreigner() {
        let calc = calc(Category::Foreigner);
        assert_eq!(calc.net_company(dec!(5000)), dec!(4023.8865));
        assert_eq!(calc.company_burden(dec!(5000)), dec!(0.1952227));
    }

    #[test]
    fn company_citizen() {
        let calc = calc(Category::Citizen);
        assert_eq!(calc.net_company(dec!(5000)), dec!(3979.4265));
    }

    #[test]
    fn company_income_tax_never_negative() {
        let calc = calc(Category::Foreigner);
        // 200 - 165 - 128.7 is negative, so no income tax is due
        assert_eq!(calc.net_company(dec!(200)), dec!(-89.015));
    }

    #[test]
    fn individual_above_max_base() {
        let calc = calc(Category::Foreigner);
        assert_eq!(calc.net_individual(dec!(5000)), dec!(3935.4));
        assert_eq!(calc.individual_burden(dec!(5000)), dec!(0.21292));
    }

    #[test]
    fn individual_within_base() {
        let calc = calc(Category::Citizen);
        assert_eq!(calc.net_individual(dec!(2000)), dec!(1194.6));
    }

    #[test]
    fn individual_below_min_base() {
        let calc = calc(Category::Foreigner);
        // contributions are paid on the 650 minimum, not the 500 earned
        assert_eq!(calc.net_individual(dec!(500)), dec!(191.67));
    }

    #[test]
    fn citizens_pay_more() {
        let foreigner = calc(Category::Foreigner);
        let citizen = calc(Category::Citizen);
        for gross in [dec!(500), dec!(1000), dec!(3000), dec!(10000), dec!(25000)] {
            assert!(citizen.company_burden(gross) > foreigner.company_burden(gross));
            assert!(citizen.individual_burden(gross) > foreigner.individual_burden(gross));
        }
    }

    #[test]
    fn individual_burden_capped_by_max_base() {
        let calc = calc(Category::Foreigner);
        // past the max base contributions are flat, so the burden keeps falling
        assert!(calc.individual_burden(dec!(20000)) < calc.individual_burden(dec!(5000)));
    }
}
