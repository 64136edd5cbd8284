use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Full salary tax breakdown produced by one calculation.
///
/// All amounts are annual and unrounded unless the field name says
/// otherwise. Every field is always populated, whatever the toggles were;
/// serialized names are stable camelCase (`grossSalary`, `employeePF`,
/// `inHandSalaryPerMonth`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxResult {
    pub gross_salary: Decimal,

    /// Gross salary × effective basic pay percentage.
    pub basic_pay: Decimal,

    /// Flat deduction from gross salary before slab tax is applied.
    pub standard_deduction: Decimal,

    /// Gross salary minus the standard deduction, never below zero.
    /// PF and gratuity do not reduce it.
    pub taxable_income: Decimal,

    /// Slab tax on taxable income.
    pub income_tax: Decimal,

    /// Health and education cess on income tax.
    pub cess: Decimal,

    /// Income tax + cess + professional tax.
    pub total_tax: Decimal,

    /// Gross salary minus gratuity and the PF deduction.
    pub net_salary: Decimal,

    #[serde(rename = "employeePF")]
    pub employee_pf: Decimal,

    /// Always equal to `employee_pf`; the employer toggle only decides
    /// whether it counts towards `total_deductions`.
    #[serde(rename = "employerPF")]
    pub employer_pf: Decimal,

    /// Zero unless gratuity was considered.
    pub gratuity_amount: Decimal,

    pub professional_tax: Decimal,

    /// Gratuity + PF deduction.
    pub total_deductions: Decimal,

    /// Net salary minus total tax.
    pub in_hand_salary: Decimal,

    pub in_hand_salary_per_month: Decimal,
}
