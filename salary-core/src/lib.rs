pub mod calculations;
pub mod models;

pub use calculations::{SalaryTaxCalculator, SalaryTaxConfig, SalaryTaxConfigError, calculate_tax};
pub use models::*;
