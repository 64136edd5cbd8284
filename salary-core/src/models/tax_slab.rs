use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{max, min};

/// A band of taxable income taxed at a single marginal rate.
///
/// `upper` is `None` for the open-ended top slab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    pub lower: Decimal,
    pub upper: Option<Decimal>,
    pub rate: Decimal,
}

impl TaxSlab {
    pub fn new(
        lower: Decimal,
        upper: Option<Decimal>,
        rate: Decimal,
    ) -> Self {
        Self { lower, upper, rate }
    }

    /// Portion of `taxable_income` that falls inside this slab.
    pub fn taxable_portion(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        let ceiling = self
            .upper
            .map_or(taxable_income, |upper| min(taxable_income, upper));
        max(ceiling.saturating_sub(self.lower), Decimal::ZERO)
    }

    /// Tax owed on the portion of `taxable_income` inside this slab.
    pub fn tax_on(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        self.rate.saturating_mul(self.taxable_portion(taxable_income))
    }
}

/// Tax contributed by one slab for a given taxable income.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlabTax {
    pub slab: TaxSlab,
    pub taxable_amount: Decimal,
    pub tax: Decimal,
}
