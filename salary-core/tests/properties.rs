//! Property tests over the whole input space the front end accepts.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use salary_core::{SalaryTaxCalculator, TaxInputs};

fn salary() -> impl Strategy<Value = Decimal> {
    (0u64..100_000_000u64).prop_map(Decimal::from)
}

fn percentage() -> impl Strategy<Value = Decimal> {
    (0u32..=1000u32).prop_map(|tenths| Decimal::new(i64::from(tenths), 1))
}

fn any_inputs() -> impl Strategy<Value = TaxInputs> {
    (salary(), percentage(), any::<bool>(), any::<bool>()).prop_map(
        |(gross, pct, employer_pf, gratuity)| {
            TaxInputs::new(gross, pct)
                .with_employer_pf(employer_pf)
                .with_gratuity(gratuity)
        },
    )
}

proptest! {
    #[test]
    fn taxable_income_is_gross_less_standard_deduction(inputs in any_inputs()) {
        let result = SalaryTaxCalculator::default().calculate(&inputs);

        let expected = (inputs.gross_salary - dec!(75000)).max(Decimal::ZERO);
        prop_assert_eq!(result.taxable_income, expected);
    }

    #[test]
    fn taxable_income_is_monotonic(a in salary(), b in salary()) {
        let calculator = SalaryTaxCalculator::default();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        let low = calculator.calculate(&TaxInputs::new(low, dec!(50)));
        let high = calculator.calculate(&TaxInputs::new(high, dec!(50)));

        prop_assert!(low.taxable_income <= high.taxable_income);
    }

    #[test]
    fn basic_pay_respects_floor(inputs in any_inputs()) {
        let result = SalaryTaxCalculator::default().calculate(&inputs);

        prop_assert!(result.basic_pay >= inputs.gross_salary * dec!(0.5));
        prop_assert!(result.basic_pay <= inputs.gross_salary);
    }

    #[test]
    fn pf_tracks_are_equal(inputs in any_inputs()) {
        let result = SalaryTaxCalculator::default().calculate(&inputs);

        prop_assert_eq!(result.employee_pf, result.employer_pf);
    }

    #[test]
    fn income_tax_is_non_decreasing(a in salary(), b in salary()) {
        let calculator = SalaryTaxCalculator::default();
        let (low, high) = if a <= b { (a, b) } else { (b, a) };

        prop_assert!(calculator.income_tax(low) <= calculator.income_tax(high));
    }

    #[test]
    fn tax_totals_are_consistent(inputs in any_inputs()) {
        let result = SalaryTaxCalculator::default().calculate(&inputs);

        prop_assert_eq!(result.cess, result.income_tax * dec!(0.04));
        prop_assert_eq!(result.professional_tax, dec!(2400));
        prop_assert_eq!(result.total_tax, result.income_tax + result.cess + dec!(2400));
    }

    #[test]
    fn salary_totals_are_consistent(inputs in any_inputs()) {
        let result = SalaryTaxCalculator::default().calculate(&inputs);

        prop_assert_eq!(
            result.net_salary,
            result.gross_salary - result.total_deductions
        );
        prop_assert_eq!(result.in_hand_salary, result.net_salary - result.total_tax);
        prop_assert_eq!(result.in_hand_salary_per_month, result.in_hand_salary / dec!(12));
    }

    #[test]
    fn slab_breakdown_sums_to_income_tax(income in salary()) {
        let calculator = SalaryTaxCalculator::default();

        let total: Decimal = calculator
            .slab_breakdown(income)
            .iter()
            .map(|slab| slab.tax)
            .sum();

        prop_assert_eq!(total, calculator.income_tax(income));
    }
}
