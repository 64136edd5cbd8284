use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest gross salary accepted by [`TaxInputs::validate`].
///
/// Keeps every intermediate product well inside `Decimal`'s range.
pub const MAX_GROSS_SALARY: Decimal = dec!(1000000000000000);

/// Errors reported by the optional input validation layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxInputsError {
    /// Gross salary must not be negative.
    #[error("gross salary must be non-negative, got {0}")]
    NegativeGrossSalary(Decimal),

    /// Gross salary is too large to calculate safely.
    #[error("gross salary {0} exceeds the supported maximum")]
    GrossSalaryTooLarge(Decimal),

    /// Basic pay percentage must be between 0 and 100.
    #[error("basic pay percentage must be between 0 and 100, got {0}")]
    InvalidBasicPayPercentage(Decimal),
}

/// Inputs to a single salary tax calculation.
///
/// Both toggles default to `false`.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::TaxInputs;
///
/// let inputs = TaxInputs::new(dec!(1200000), dec!(50))
///     .with_employer_pf(true)
///     .with_gratuity(false);
///
/// assert!(inputs.employer_pf_included);
/// assert!(!inputs.consider_gratuity);
/// assert!(inputs.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxInputs {
    /// Gross annual salary.
    pub gross_salary: Decimal,

    /// Basic pay as a percentage of gross salary.
    /// Values below the configured floor (50) are raised to the floor.
    pub basic_pay_percentage: Decimal,

    /// Whether the employer's PF contribution is counted in total deductions.
    #[serde(default)]
    pub employer_pf_included: bool,

    /// Whether a gratuity accrual is deducted from net salary.
    #[serde(default)]
    pub consider_gratuity: bool,
}

impl TaxInputs {
    pub fn new(
        gross_salary: Decimal,
        basic_pay_percentage: Decimal,
    ) -> Self {
        Self {
            gross_salary,
            basic_pay_percentage,
            employer_pf_included: false,
            consider_gratuity: false,
        }
    }

    pub fn with_employer_pf(
        mut self,
        included: bool,
    ) -> Self {
        self.employer_pf_included = included;
        self
    }

    pub fn with_gratuity(
        mut self,
        consider: bool,
    ) -> Self {
        self.consider_gratuity = consider;
        self
    }

    /// Rejects inputs that would produce meaningless or overflowing results.
    ///
    /// The calculator itself accepts any input; callers that take values
    /// from users run this first.
    ///
    /// # Errors
    ///
    /// Returns [`TaxInputsError`] if:
    /// - `gross_salary` is negative or above [`MAX_GROSS_SALARY`]
    /// - `basic_pay_percentage` is outside `[0, 100]`
    pub fn validate(&self) -> Result<(), TaxInputsError> {
        if self.gross_salary < Decimal::ZERO {
            return Err(TaxInputsError::NegativeGrossSalary(self.gross_salary));
        }
        if self.gross_salary > MAX_GROSS_SALARY {
            return Err(TaxInputsError::GrossSalaryTooLarge(self.gross_salary));
        }
        if self.basic_pay_percentage < Decimal::ZERO
            || self.basic_pay_percentage > Decimal::ONE_HUNDRED
        {
            return Err(TaxInputsError::InvalidBasicPayPercentage(
                self.basic_pay_percentage,
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_defaults_both_toggles_to_false() {
        let inputs = TaxInputs::new(dec!(1200000), dec!(50));

        assert!(!inputs.employer_pf_included);
        assert!(!inputs.consider_gratuity);
    }

    #[test]
    fn validate_accepts_zero_salary() {
        assert_eq!(TaxInputs::new(dec!(0), dec!(50)).validate(), Ok(()));
    }

    #[test]
    fn validate_accepts_percentage_below_floor() {
        // Clamped by the calculator, not rejected
        assert_eq!(TaxInputs::new(dec!(600000), dec!(30)).validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_negative_salary() {
        let result = TaxInputs::new(dec!(-1), dec!(50)).validate();

        assert_eq!(result, Err(TaxInputsError::NegativeGrossSalary(dec!(-1))));
    }

    #[test]
    fn validate_rejects_salary_above_maximum() {
        let too_large = MAX_GROSS_SALARY + Decimal::ONE;
        let result = TaxInputs::new(too_large, dec!(50)).validate();

        assert_eq!(result, Err(TaxInputsError::GrossSalaryTooLarge(too_large)));
    }

    #[test]
    fn validate_rejects_percentage_above_hundred() {
        let result = TaxInputs::new(dec!(1200000), dec!(100.5)).validate();

        assert_eq!(
            result,
            Err(TaxInputsError::InvalidBasicPayPercentage(dec!(100.5)))
        );
    }

    #[test]
    fn validate_rejects_negative_percentage() {
        let result = TaxInputs::new(dec!(1200000), dec!(-10)).validate();

        assert_eq!(
            result,
            Err(TaxInputsError::InvalidBasicPayPercentage(dec!(-10)))
        );
    }

    #[test]
    fn deserializes_with_missing_toggles() {
        let json = r#"{"grossSalary":"1200000","basicPayPercentage":"50"}"#;
        let inputs: TaxInputs = serde_json::from_str(json).unwrap();

        assert_eq!(inputs, TaxInputs::new(dec!(1200000), dec!(50)));
    }
}
