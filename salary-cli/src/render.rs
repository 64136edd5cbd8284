//! Turns a [`TaxResult`] into display rows and text tables.
//!
//! Nothing here computes tax. The renderer only picks which rows to show
//! from the two toggles and divides by twelve for the per-month column.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use salary_core::{SlabTax, TaxResult};
use serde::Serialize;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Columns},
};

use crate::format::{format_inr, format_rate};

const MONTHS_PER_YEAR: Decimal = dec!(12);

/// Marks highlighted rows in the text table.
const HIGHLIGHT_MARKER: &str = "▸ ";

/// Which optional rows the renderer shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub employer_pf_included: bool,
    pub gratuity_included: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowCategory {
    Income,
    Deduction,
    Tax,
    Summary,
}

/// One line of the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayRow {
    pub label: &'static str,
    pub annual: Decimal,
    pub highlight: bool,
    pub category: RowCategory,
}

impl DisplayRow {
    fn new(
        label: &'static str,
        annual: Decimal,
        category: RowCategory,
    ) -> Self {
        Self {
            label,
            annual,
            highlight: false,
            category,
        }
    }

    fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }

    pub fn monthly(&self) -> Decimal {
        self.annual / MONTHS_PER_YEAR
    }
}

/// Builds the ordered rows for a result.
///
/// Employer PF and gratuity rows appear only when their toggle is on; every
/// other row is always present.
pub fn build_rows(
    result: &TaxResult,
    options: RenderOptions,
) -> Vec<DisplayRow> {
    use RowCategory::*;

    let mut rows = vec![
        DisplayRow::new("Gross Salary", result.gross_salary, Income),
        DisplayRow::new("Basic Pay", result.basic_pay, Income),
        DisplayRow::new("Employee PF Deduction", result.employee_pf, Deduction),
    ];
    if options.employer_pf_included {
        rows.push(DisplayRow::new(
            "Employer PF Deduction",
            result.employer_pf,
            Deduction,
        ));
    }
    if options.gratuity_included {
        rows.push(DisplayRow::new("Gratuity", result.gratuity_amount, Deduction));
    }
    rows.extend([
        DisplayRow::new("Total Deductions", result.total_deductions, Deduction).highlighted(),
        DisplayRow::new("Net Salary", result.net_salary, Summary),
        DisplayRow::new("Standard Deduction", result.standard_deduction, Tax),
        DisplayRow::new("Taxable Income", result.taxable_income, Tax),
        DisplayRow::new("Income Tax", result.income_tax, Tax),
        DisplayRow::new("Health & Education Cess", result.cess, Tax),
        DisplayRow::new("Professional Tax", result.professional_tax, Tax),
        DisplayRow::new("Total Tax", result.total_tax, Tax).highlighted(),
        DisplayRow::new("In-Hand Salary", result.in_hand_salary, Summary).highlighted(),
    ]);
    rows
}

/// One-line explanation of what the deductions include.
pub fn description(options: RenderOptions) -> &'static str {
    match (options.employer_pf_included, options.gratuity_included) {
        (false, false) => {
            "Employee PF deducted at 12% of basic pay. Employer PF and gratuity are not part of the deductions."
        }
        (true, false) => {
            "Employee and employer PF deducted at 12% of basic pay each. Gratuity is not part of the deductions."
        }
        (false, true) => {
            "Employee PF deducted at 12% of basic pay, with gratuity accrued at 4.81% of basic pay."
        }
        (true, true) => {
            "Employee and employer PF deducted at 12% of basic pay each, with gratuity accrued at 4.81% of basic pay."
        }
    }
}

#[derive(Debug, Clone, Tabled)]
struct BreakdownRow {
    #[tabled(rename = "Component")]
    component: String,
    #[tabled(rename = "Per Year")]
    per_year: String,
    #[tabled(rename = "Per Month")]
    per_month: String,
}

impl From<&DisplayRow> for BreakdownRow {
    fn from(row: &DisplayRow) -> Self {
        let marker = if row.highlight { HIGHLIGHT_MARKER } else { "" };
        Self {
            component: format!("{marker}{}", row.label),
            per_year: format_inr(row.annual),
            per_month: format_inr(row.monthly()),
        }
    }
}

#[derive(Debug, Clone, Tabled)]
struct SlabRow {
    #[tabled(rename = "Slab")]
    slab: String,
    #[tabled(rename = "Rate")]
    rate: String,
    #[tabled(rename = "Taxable Amount")]
    taxable_amount: String,
    #[tabled(rename = "Tax")]
    tax: String,
}

impl From<&SlabTax> for SlabRow {
    fn from(entry: &SlabTax) -> Self {
        let slab = match entry.slab.upper {
            Some(upper) => format!(
                "{} – {}",
                format_inr(entry.slab.lower),
                format_inr(upper)
            ),
            None => format!("Above {}", format_inr(entry.slab.lower)),
        };
        Self {
            slab,
            rate: format_rate(entry.slab.rate),
            taxable_amount: format_inr(entry.taxable_amount),
            tax: format_inr(entry.tax),
        }
    }
}

/// Renders the breakdown rows as a text table.
pub fn render_table(rows: &[DisplayRow]) -> String {
    let rows: Vec<BreakdownRow> = rows.iter().map(BreakdownRow::from).collect();
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

/// Renders the per-slab income tax as a text table.
pub fn render_slab_table(breakdown: &[SlabTax]) -> String {
    let rows: Vec<SlabRow> = breakdown.iter().map(SlabRow::from).collect();
    Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use salary_core::calculate_tax;

    use super::*;

    fn labels(rows: &[DisplayRow]) -> Vec<&'static str> {
        rows.iter().map(|row| row.label).collect()
    }

    #[test]
    fn build_rows_without_optional_rows() {
        let result = calculate_tax(dec!(1200000), dec!(50), false, false);

        let rows = build_rows(&result, RenderOptions::default());

        assert_eq!(
            labels(&rows),
            vec![
                "Gross Salary",
                "Basic Pay",
                "Employee PF Deduction",
                "Total Deductions",
                "Net Salary",
                "Standard Deduction",
                "Taxable Income",
                "Income Tax",
                "Health & Education Cess",
                "Professional Tax",
                "Total Tax",
                "In-Hand Salary",
            ]
        );
    }

    #[test]
    fn build_rows_adds_employer_pf_and_gratuity_after_employee_pf() {
        let result = calculate_tax(dec!(1200000), dec!(50), true, true);
        let options = RenderOptions {
            employer_pf_included: true,
            gratuity_included: true,
        };

        let rows = build_rows(&result, options);

        assert_eq!(rows.len(), 14);
        assert_eq!(rows[3].label, "Employer PF Deduction");
        assert_eq!(rows[3].annual, dec!(72000));
        assert_eq!(rows[4].label, "Gratuity");
        assert_eq!(rows[4].annual, dec!(28860));
    }

    #[test]
    fn build_rows_highlights_totals() {
        let result = calculate_tax(dec!(1200000), dec!(50), false, false);

        let highlighted: Vec<_> = build_rows(&result, RenderOptions::default())
            .into_iter()
            .filter(|row| row.highlight)
            .map(|row| row.label)
            .collect();

        assert_eq!(
            highlighted,
            vec!["Total Deductions", "Total Tax", "In-Hand Salary"]
        );
    }

    #[test]
    fn build_rows_tags_categories() {
        let result = calculate_tax(dec!(1200000), dec!(50), false, false);
        let rows = build_rows(&result, RenderOptions::default());

        assert_eq!(rows[0].category, RowCategory::Income);
        assert_eq!(rows[2].category, RowCategory::Deduction);
        assert_eq!(rows[7].category, RowCategory::Tax);
        assert_eq!(rows[11].category, RowCategory::Summary);
    }

    #[test]
    fn monthly_divides_by_twelve() {
        let row = DisplayRow::new("In-Hand Salary", dec!(1071000), RowCategory::Summary);

        assert_eq!(row.monthly(), dec!(89250));
    }

    #[test]
    fn description_differs_for_every_toggle_combination() {
        let mut seen = Vec::new();
        for employer_pf_included in [false, true] {
            for gratuity_included in [false, true] {
                let text = description(RenderOptions {
                    employer_pf_included,
                    gratuity_included,
                });
                assert!(!seen.contains(&text));
                seen.push(text);
            }
        }
    }

    #[test]
    fn render_table_formats_amounts_and_marks_highlights() {
        let result = calculate_tax(dec!(1200000), dec!(50), false, false);

        let table = render_table(&build_rows(&result, RenderOptions::default()));

        assert!(table.contains("Per Month"));
        assert!(table.contains("₹12,00,000"));
        assert!(table.contains("₹1,00,000"));
        assert!(table.contains("▸ In-Hand Salary"));
        assert!(table.contains("₹10,71,000"));
        assert!(table.contains("₹89,250"));
    }

    #[test]
    fn render_slab_table_labels_open_ended_slab() {
        let calculator = salary_core::SalaryTaxCalculator::default();

        let table = render_slab_table(&calculator.slab_breakdown(dec!(1125000)));

        assert!(table.contains("₹4,00,000 – ₹8,00,000"));
        assert!(table.contains("Above ₹24,00,000"));
        assert!(table.contains("₹32,500"));
    }
}
