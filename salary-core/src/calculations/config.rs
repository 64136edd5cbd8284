//! Rate table for the salary tax calculation.
//!
//! Every rate, threshold and slab the calculator uses lives in
//! [`SalaryTaxConfig`]. The values are fixed for the new tax regime; the
//! struct exists so the calculator reads named values instead of literals
//! and so a rate table can be checked for internal consistency.
//!
//! # Slabs
//!
//! | Slab | Taxable income | Rate |
//! |------|----------------|------|
//! | -    | up to 4,00,000 | 0%   |
//! | 1    | 4,00,000 – 8,00,000 | 5% |
//! | 2    | 8,00,000 – 12,00,000 | 10% |
//! | 3    | 12,00,000 – 16,00,000 | 15% |
//! | 4    | 16,00,000 – 20,00,000 | 20% |
//! | 5    | 20,00,000 – 24,00,000 | 25% |
//! | 6    | above 24,00,000 | 30% |

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::TaxSlab;

/// Errors found when validating a [`SalaryTaxConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SalaryTaxConfigError {
    /// A percentage rate must be between 0 and 1.
    #[error("{name} must be between 0 and 1, got {rate}")]
    InvalidRate { name: &'static str, rate: Decimal },

    /// A fixed amount must be non-negative.
    #[error("{name} must be non-negative, got {amount}")]
    NegativeAmount { name: &'static str, amount: Decimal },

    /// The basic pay floor is a percentage of gross salary.
    #[error("minimum basic pay percentage must be between 0 and 100, got {0}")]
    InvalidMinBasicPayPercentage(Decimal),

    /// Monthly figures divide by this, so it must be positive.
    #[error("months per year must be positive, got {0}")]
    InvalidMonthsPerYear(Decimal),

    /// At least one slab is required.
    #[error("no tax slabs configured")]
    NoSlabs,

    /// A slab's rate must be between 0 and 1.
    #[error("slab {index} rate must be between 0 and 1, got {rate}")]
    InvalidSlabRate { index: usize, rate: Decimal },

    /// A slab's upper bound must lie above its lower bound.
    #[error("slab {index} upper bound must be above its lower bound")]
    EmptySlab { index: usize },

    /// Each slab must start where the previous one ends.
    #[error("slab {index} starts at {found}, expected {expected}")]
    SlabGap {
        index: usize,
        expected: Decimal,
        found: Decimal,
    },

    /// Only the last slab may be open-ended.
    #[error("slab {index} is open-ended but is not the last slab")]
    UnboundedSlab { index: usize },

    /// The last slab must be open-ended so every income is covered.
    #[error("the last slab must be open-ended")]
    LastSlabBounded,
}

/// Rates, thresholds and slabs used by the salary tax calculator.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::SalaryTaxConfig;
///
/// let config = SalaryTaxConfig::default();
///
/// assert_eq!(config.standard_deduction, dec!(75000));
/// assert_eq!(config.annual_professional_tax(), dec!(2400));
/// assert_eq!(config.slabs.len(), 6);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryTaxConfig {
    /// Flat amount subtracted from gross salary to get taxable income.
    pub standard_deduction: Decimal,

    /// Floor applied to the basic pay percentage (50).
    pub min_basic_pay_percentage: Decimal,

    /// Provident fund contribution as a fraction of basic pay.
    ///
    /// Applies to both the employee and the employer track (12%).
    pub pf_rate: Decimal,

    /// Gratuity accrual as a fraction of basic pay (4.81%).
    pub gratuity_rate: Decimal,

    /// Health and education cess as a fraction of income tax (4%).
    pub cess_rate: Decimal,

    /// Professional tax charged each month (200).
    pub monthly_professional_tax: Decimal,

    /// Used for professional tax and for per-month figures (12).
    pub months_per_year: Decimal,

    /// Progressive slabs in ascending order. The last one is open-ended.
    pub slabs: Vec<TaxSlab>,
}

impl Default for SalaryTaxConfig {
    fn default() -> Self {
        Self {
            standard_deduction: dec!(75000),
            min_basic_pay_percentage: dec!(50),
            pf_rate: dec!(0.12),
            gratuity_rate: dec!(0.0481),
            cess_rate: dec!(0.04),
            monthly_professional_tax: dec!(200),
            months_per_year: dec!(12),
            slabs: new_regime_slabs(),
        }
    }
}

/// The six slabs of the new tax regime. Income below 4,00,000 is untaxed.
fn new_regime_slabs() -> Vec<TaxSlab> {
    vec![
        TaxSlab::new(dec!(400000), Some(dec!(800000)), dec!(0.05)),
        TaxSlab::new(dec!(800000), Some(dec!(1200000)), dec!(0.10)),
        TaxSlab::new(dec!(1200000), Some(dec!(1600000)), dec!(0.15)),
        TaxSlab::new(dec!(1600000), Some(dec!(2000000)), dec!(0.20)),
        TaxSlab::new(dec!(2000000), Some(dec!(2400000)), dec!(0.25)),
        TaxSlab::new(dec!(2400000), None, dec!(0.30)),
    ]
}

impl SalaryTaxConfig {
    /// Professional tax for a full year.
    pub fn annual_professional_tax(&self) -> Decimal {
        self.monthly_professional_tax * self.months_per_year
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`SalaryTaxConfigError`] if:
    /// - any rate is outside `[0, 1]`
    /// - the standard deduction or professional tax is negative
    /// - the basic pay floor is outside `[0, 100]`
    /// - `months_per_year` is not positive
    /// - the slabs are empty, overlapping, gapped, or not open-ended at the top
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use salary_core::{SalaryTaxConfig, SalaryTaxConfigError};
    ///
    /// let config = SalaryTaxConfig {
    ///     cess_rate: dec!(4),
    ///     ..SalaryTaxConfig::default()
    /// };
    ///
    /// assert_eq!(
    ///     config.validate(),
    ///     Err(SalaryTaxConfigError::InvalidRate { name: "cess rate", rate: dec!(4) })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), SalaryTaxConfigError> {
        check_rate("pf rate", self.pf_rate)?;
        check_rate("gratuity rate", self.gratuity_rate)?;
        check_rate("cess rate", self.cess_rate)?;
        check_non_negative("standard deduction", self.standard_deduction)?;
        check_non_negative("monthly professional tax", self.monthly_professional_tax)?;

        if self.min_basic_pay_percentage < Decimal::ZERO
            || self.min_basic_pay_percentage > Decimal::ONE_HUNDRED
        {
            return Err(SalaryTaxConfigError::InvalidMinBasicPayPercentage(
                self.min_basic_pay_percentage,
            ));
        }
        if self.months_per_year <= Decimal::ZERO {
            return Err(SalaryTaxConfigError::InvalidMonthsPerYear(
                self.months_per_year,
            ));
        }

        self.validate_slabs()
    }

    fn validate_slabs(&self) -> Result<(), SalaryTaxConfigError> {
        let last = self
            .slabs
            .len()
            .checked_sub(1)
            .ok_or(SalaryTaxConfigError::NoSlabs)?;

        let mut previous_upper: Option<Decimal> = None;
        for (index, slab) in self.slabs.iter().enumerate() {
            if slab.rate < Decimal::ZERO || slab.rate > Decimal::ONE {
                return Err(SalaryTaxConfigError::InvalidSlabRate {
                    index,
                    rate: slab.rate,
                });
            }
            match previous_upper {
                Some(expected) if slab.lower != expected => {
                    warn!(index, %expected, found = %slab.lower, "tax slabs are not contiguous");
                    return Err(SalaryTaxConfigError::SlabGap {
                        index,
                        expected,
                        found: slab.lower,
                    });
                }
                _ => {}
            }
            match slab.upper {
                Some(upper) if upper <= slab.lower => {
                    return Err(SalaryTaxConfigError::EmptySlab { index });
                }
                Some(_) if index == last => {
                    return Err(SalaryTaxConfigError::LastSlabBounded);
                }
                None if index != last => {
                    return Err(SalaryTaxConfigError::UnboundedSlab { index });
                }
                _ => {}
            }
            previous_upper = slab.upper;
        }
        Ok(())
    }
}

fn check_rate(
    name: &'static str,
    rate: Decimal,
) -> Result<(), SalaryTaxConfigError> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(SalaryTaxConfigError::InvalidRate { name, rate });
    }
    Ok(())
}

fn check_non_negative(
    name: &'static str,
    amount: Decimal,
) -> Result<(), SalaryTaxConfigError> {
    if amount < Decimal::ZERO {
        return Err(SalaryTaxConfigError::NegativeAmount { name, amount });
    }
    Ok(())
}
