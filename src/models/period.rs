//! Per-period results and the state carried between periods.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Running bases carried from one month's engine output into the next
/// month's engine input.
///
/// Exists only for the duration of one employee's multi-period run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CumulativeState {
    /// Income tax base accumulated so far this run.
    #[serde(default)]
    pub cumulative_income_tax_base: Decimal,
    /// Minimum wage income tax exemption base.
    #[serde(default)]
    pub cumulative_min_wage_income_tax_base: Decimal,
    /// First transferred SSI base.
    #[serde(rename = "transferredSSIBase1", default)]
    pub transferred_ssi_base1: Decimal,
    /// Second transferred SSI base.
    #[serde(rename = "transferredSSIBase2", default)]
    pub transferred_ssi_base2: Decimal,
}

/// The outcome of one calculated month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodResult {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
    /// Gross wage.
    pub gross_wage: Decimal,
    /// Net wage.
    pub net_wage: Decimal,
    /// Total employer cost.
    pub employer_cost: Decimal,
    /// Income tax.
    pub income_tax: Decimal,
    /// Stamp tax.
    pub stamp_tax: Decimal,
    /// Employee SSI premium.
    pub ssi_worker_premium: Decimal,
    /// Employer SSI premium.
    pub ssi_employer_premium: Decimal,
    /// State after this month, fed into the next one.
    pub cumulative_state: CumulativeState,
}
