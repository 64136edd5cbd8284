mod tax_inputs;
mod tax_result;
mod tax_slab;

pub use tax_inputs::{MAX_GROSS_SALARY, TaxInputs, TaxInputsError};
pub use tax_result::TaxResult;
pub use tax_slab::{SlabTax, TaxSlab};
