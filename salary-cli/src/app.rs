//! Report assembly shared by the binary and the integration tests.

use anyhow::{Context, Result};
use salary_core::{SalaryTaxCalculator, SalaryTaxConfig, SlabTax, TaxInputs, TaxResult};
use serde::Serialize;
use tracing::{debug, info};

use crate::render::{self, RenderOptions};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Everything needed to produce one report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub inputs: TaxInputs,
    pub format: OutputFormat,
    pub show_slabs: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    inputs: &'a TaxInputs,
    result: &'a TaxResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    slabs: Option<Vec<SlabTax>>,
}

/// Builds the calculator from the built-in rate table.
pub fn build_calculator() -> Result<SalaryTaxCalculator> {
    SalaryTaxCalculator::try_new(SalaryTaxConfig::default())
        .context("built-in tax rate table is invalid")
}

/// Validates the inputs, runs the calculation and renders the output text.
pub fn build_report(request: &ReportRequest) -> Result<String> {
    request
        .inputs
        .validate()
        .context("invalid salary inputs")?;

    let calculator = build_calculator()?;
    let result = calculator.calculate(&request.inputs);
    info!(
        gross_salary = %result.gross_salary,
        in_hand_salary = %result.in_hand_salary,
        "salary breakdown ready"
    );

    let slabs = request
        .show_slabs
        .then(|| calculator.slab_breakdown(result.taxable_income));

    match request.format {
        OutputFormat::Json => {
            let report = JsonReport {
                inputs: &request.inputs,
                result: &result,
                slabs,
            };
            serde_json::to_string_pretty(&report).context("failed to serialize report")
        }
        OutputFormat::Table => {
            let options = RenderOptions {
                employer_pf_included: request.inputs.employer_pf_included,
                gratuity_included: request.inputs.consider_gratuity,
            };
            let rows = render::build_rows(&result, options);
            debug!(rows = rows.len(), "rendering breakdown table");

            let mut output = String::new();
            output.push_str(render::description(options));
            output.push('\n');
            output.push_str(&render::render_table(&rows));
            if let Some(slabs) = slabs {
                output.push_str("\n\nIncome tax by slab\n");
                output.push_str(&render::render_slab_table(&slabs));
            }
            Ok(output)
        }
    }
}
