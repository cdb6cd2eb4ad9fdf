pub mod bg;
pub mod burden;

pub use bg::{SocSecBase, TaxYear, KNOWN_YEARS};
pub use burden::{BurdenCalculator, Category};
