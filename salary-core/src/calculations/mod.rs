//! Salary tax calculation modules.
//!
//! This module provides the rate table for the Indian new tax regime and the
//! calculator that turns a gross annual salary into a full tax breakdown.

pub mod common;
pub mod config;
pub mod salary;

pub use config::{SalaryTaxConfig, SalaryTaxConfigError};
pub use salary::{SalaryTaxCalculator, calculate_tax};
