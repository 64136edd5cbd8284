//! Salary tax breakdown under the Indian new tax regime.
//!
//! This module turns a gross annual salary and two toggles into a
//! [`TaxResult`]. The calculation is pure: identical inputs always give
//! identical results and nothing is rounded.
//!
//! Every step saturates at [`Decimal::MAX`] / [`Decimal::MIN`] instead of
//! overflowing, so any input produces a result. Inputs that pass
//! [`TaxInputs::validate`] stay far inside that range and are exact.
//!
//! # Calculation Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Effective basic percentage: max(50, requested percentage) |
//! | 2    | Basic pay: gross salary × effective percentage / 100 |
//! | 3    | Employee PF and employer PF: basic pay × 12% each |
//! | 4    | Gratuity: basic pay × 4.81% when considered, else 0 |
//! | 5    | PF deduction: employee PF, plus employer PF when included |
//! | 6    | Net salary: gross salary − gratuity − PF deduction |
//! | 7    | Taxable income: max(0, gross salary − 75,000) |
//! | 8    | Income tax: sum of slab taxes on taxable income |
//! | 9    | Cess: income tax × 4% |
//! | 10   | Professional tax: 200 × 12 |
//! | 11   | Total tax: income tax + cess + professional tax |
//! | 12   | Total deductions: gratuity + PF deduction |
//! | 13   | In-hand salary: net salary − total tax |
//! | 14   | In-hand salary per month: in-hand salary / 12 |
//!
//! Taxable income is taken from gross salary alone; PF and gratuity change
//! what reaches the employee, not what is taxed.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use salary_core::{SalaryTaxCalculator, TaxInputs};
//!
//! let calculator = SalaryTaxCalculator::default();
//! let result = calculator.calculate(&TaxInputs::new(dec!(1200000), dec!(50)));
//!
//! assert_eq!(result.taxable_income, dec!(1125000));
//! assert_eq!(result.income_tax, dec!(52500));
//! assert_eq!(result.total_tax, dec!(57000));
//! assert_eq!(result.in_hand_salary_per_month, dec!(89250));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::max;
use crate::calculations::config::{SalaryTaxConfig, SalaryTaxConfigError};
use crate::{SlabTax, TaxInputs, TaxResult};

/// Calculates a salary tax breakdown from positional arguments.
///
/// Shorthand for [`SalaryTaxCalculator::calculate`] with the default rate
/// table. Pass `false` for either toggle to get the default behaviour.
/// Never panics; see [`SalaryTaxCalculator::calculate`] for how extreme
/// inputs are handled.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculate_tax;
///
/// let result = calculate_tax(dec!(1200000), dec!(50), true, false);
///
/// assert_eq!(result.net_salary, dec!(1056000));
/// assert_eq!(result.in_hand_salary, dec!(999000));
/// ```
pub fn calculate_tax(
    gross_salary: Decimal,
    basic_pay_percentage: Decimal,
    employer_pf_included: bool,
    consider_gratuity: bool,
) -> TaxResult {
    let inputs = TaxInputs::new(gross_salary, basic_pay_percentage)
        .with_employer_pf(employer_pf_included)
        .with_gratuity(consider_gratuity);
    SalaryTaxCalculator::default().calculate(&inputs)
}

/// Calculator for the salary tax breakdown.
///
/// Holds the rate table and exposes the full calculation plus the slab
/// tax on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryTaxCalculator {
    config: SalaryTaxConfig,
}

impl Default for SalaryTaxCalculator {
    fn default() -> Self {
        Self::new(SalaryTaxConfig::default())
    }
}

impl SalaryTaxCalculator {
    /// Creates a calculator with the given rate table, unchecked.
    pub fn new(config: SalaryTaxConfig) -> Self {
        Self { config }
    }

    /// Creates a calculator after validating the rate table.
    ///
    /// # Errors
    ///
    /// Returns [`SalaryTaxConfigError`] if the configuration is invalid.
    pub fn try_new(config: SalaryTaxConfig) -> Result<Self, SalaryTaxConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &SalaryTaxConfig {
        &self.config
    }

    /// Calculates the complete salary tax breakdown.
    ///
    /// Inputs are not validated here; negative values flow through the
    /// arithmetic unchanged. Use [`TaxInputs::validate`] first when the
    /// values come from a user.
    ///
    /// Amounts that would leave `Decimal`'s range saturate at
    /// [`Decimal::MAX`] or [`Decimal::MIN`] rather than panicking.
    pub fn calculate(
        &self,
        inputs: &TaxInputs,
    ) -> TaxResult {
        let gross_salary = inputs.gross_salary;

        let basic_percentage = self.effective_basic_percentage(inputs.basic_pay_percentage);
        let basic_pay = self.basic_pay(gross_salary, basic_percentage);

        // Both tracks are the same amount; the toggle only decides what is deducted
        let employee_pf = self.provident_fund(basic_pay);
        let employer_pf = self.provident_fund(basic_pay);

        let gratuity_amount = self.gratuity(basic_pay, inputs.consider_gratuity);
        let pf_deduction =
            self.pf_deduction(employee_pf, employer_pf, inputs.employer_pf_included);
        let net_salary = self.net_salary(gross_salary, gratuity_amount, pf_deduction);

        let taxable_income = self.taxable_income(gross_salary);
        let income_tax = self.income_tax(taxable_income);
        let cess = self.cess(income_tax);
        let professional_tax = self.config.annual_professional_tax();
        let total_tax = self.total_tax(income_tax, cess, professional_tax);

        let total_deductions = gratuity_amount.saturating_add(pf_deduction);
        let in_hand_salary = net_salary.saturating_sub(total_tax);
        let in_hand_salary_per_month = self.per_month(in_hand_salary);

        debug!(
            gross_salary = %gross_salary,
            basic_percentage = %basic_percentage,
            taxable_income = %taxable_income,
            total_tax = %total_tax,
            in_hand_salary = %in_hand_salary,
            "calculated salary breakdown"
        );

        TaxResult {
            gross_salary,
            basic_pay,
            standard_deduction: self.config.standard_deduction,
            taxable_income,
            income_tax,
            cess,
            total_tax,
            net_salary,
            employee_pf,
            employer_pf,
            gratuity_amount,
            professional_tax,
            total_deductions,
            in_hand_salary,
            in_hand_salary_per_month,
        }
    }

    /// Tax on `taxable_income` from the slabs alone, before cess.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use salary_core::SalaryTaxCalculator;
    ///
    /// let calculator = SalaryTaxCalculator::default();
    ///
    /// assert_eq!(calculator.income_tax(dec!(400000)), dec!(0));
    /// assert_eq!(calculator.income_tax(dec!(800000)), dec!(20000));
    /// assert_eq!(calculator.income_tax(dec!(1200000)), dec!(60000));
    /// ```
    pub fn income_tax(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        self.config
            .slabs
            .iter()
            .map(|slab| slab.tax_on(taxable_income))
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Per-slab view of [`income_tax`](Self::income_tax).
    ///
    /// Returns one entry for every configured slab, including slabs the
    /// income does not reach (with zero amounts). The `tax` fields sum to
    /// `income_tax(taxable_income)`.
    pub fn slab_breakdown(
        &self,
        taxable_income: Decimal,
    ) -> Vec<SlabTax> {
        self.config
            .slabs
            .iter()
            .map(|slab| SlabTax {
                slab: slab.clone(),
                taxable_amount: slab.taxable_portion(taxable_income),
                tax: slab.tax_on(taxable_income),
            })
            .collect()
    }

    /// Applies the basic pay floor.
    fn effective_basic_percentage(
        &self,
        requested: Decimal,
    ) -> Decimal {
        max(self.config.min_basic_pay_percentage, requested)
    }

    fn basic_pay(
        &self,
        gross_salary: Decimal,
        basic_percentage: Decimal,
    ) -> Decimal {
        // Scale the percentage first so 100% of Decimal::MAX still fits
        gross_salary.saturating_mul(basic_percentage / Decimal::ONE_HUNDRED)
    }

    fn provident_fund(
        &self,
        basic_pay: Decimal,
    ) -> Decimal {
        basic_pay.saturating_mul(self.config.pf_rate)
    }

    fn gratuity(
        &self,
        basic_pay: Decimal,
        consider_gratuity: bool,
    ) -> Decimal {
        if consider_gratuity {
            basic_pay.saturating_mul(self.config.gratuity_rate)
        } else {
            Decimal::ZERO
        }
    }

    /// Employee PF, plus employer PF when it is part of the deductions.
    fn pf_deduction(
        &self,
        employee_pf: Decimal,
        employer_pf: Decimal,
        employer_pf_included: bool,
    ) -> Decimal {
        if employer_pf_included {
            employee_pf.saturating_add(employer_pf)
        } else {
            employee_pf
        }
    }

    fn net_salary(
        &self,
        gross_salary: Decimal,
        gratuity_amount: Decimal,
        pf_deduction: Decimal,
    ) -> Decimal {
        gross_salary
            .saturating_sub(gratuity_amount)
            .saturating_sub(pf_deduction)
    }

    fn taxable_income(
        &self,
        gross_salary: Decimal,
    ) -> Decimal {
        max(
            gross_salary.saturating_sub(self.config.standard_deduction),
            Decimal::ZERO,
        )
    }

    fn cess(
        &self,
        income_tax: Decimal,
    ) -> Decimal {
        income_tax.saturating_mul(self.config.cess_rate)
    }

    fn total_tax(
        &self,
        income_tax: Decimal,
        cess: Decimal,
        professional_tax: Decimal,
    ) -> Decimal {
        income_tax
            .saturating_add(cess)
            .saturating_add(professional_tax)
    }

    fn per_month(
        &self,
        annual: Decimal,
    ) -> Decimal {
        annual / self.config.months_per_year
    }
}
