//! Data contract of the external payroll calculation engine.
//!
//! The engine is called once per month with a [`WageCalculationModel`] and
//! answers with an [`EngineResponse`] holding exactly one payroll entry.
//! Field names follow the engine's JSON exactly, which is why several
//! fields carry explicit renames.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AmountType, CustomParams, PaymentCategory, SsiType};

/// Pay frequency understood by the engine. Only monthly is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WagePeriodType {
    /// Monthly wages.
    Monthly,
}

/// Unit of `period_count`. Only months are used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeriodLengthType {
    /// Calendar months.
    Month,
}

/// A normalized payment line of a single-period request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentLine {
    /// Stable reference id: `"1"` for base pay, `extra_<n>` for extras.
    #[serde(rename = "ref")]
    pub reference: String,
    /// Payment description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Payment category.
    pub payment_type: PaymentCategory,
    /// Amount; unset on the base line, where the engine uses the wage amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Decimal>,
    /// Gross or net interpretation of `amount`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculation_type: Option<AmountType>,
}

/// Engine-side calculation switches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationParams {
    /// Apply the minimum wage income tax exemption. Always on.
    pub calculate_min_wage_exemption: bool,
    /// Scenario overrides of the engine's fiscal defaults.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_global_params: Option<CustomParams>,
}

/// Single-period calculation request sent to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WageCalculationModel {
    /// First day of the calculated month.
    pub calc_date: NaiveDate,
    /// The base wage amount.
    pub wage_amount: Decimal,
    /// Social security category.
    pub ssi_type: SsiType,
    /// Gross or net interpretation of the wage.
    pub wage_calculation_type: AmountType,
    /// Pay frequency.
    pub wage_period_type: WagePeriodType,
    /// Unit of `period_count`.
    pub period_length_type: PeriodLengthType,
    /// Number of periods in this request; always 1.
    pub period_count: u32,
    /// Payment lines of this period.
    pub payments: Vec<PaymentLine>,
    /// Income tax base accumulated in earlier months.
    pub cumulative_income_tax_base: Decimal,
    /// Minimum wage exemption base accumulated in earlier months.
    pub cumulative_min_wage_income_tax_base: Decimal,
    /// SSI base carried over from one month earlier.
    #[serde(rename = "transferredSSIBase1")]
    pub transferred_ssi_base1: Decimal,
    /// SSI base carried over from two months earlier.
    #[serde(rename = "transferredSSIBase2")]
    pub transferred_ssi_base2: Decimal,
    /// Calculation switches and overrides.
    pub calculation_params: CalculationParams,
}

/// Fiscal figures of one calculated month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollBreakdown {
    /// Net pay.
    pub total_net: Decimal,
    /// Gross pay.
    pub total_gross: Decimal,
    /// Income tax withheld.
    pub total_income_tax: Decimal,
    /// Income tax base of this month.
    pub total_income_tax_base: Decimal,
    /// Minimum wage exemption base reported by the engine.
    #[serde(default)]
    pub total_min_wage_income_tax_exemption_base: Option<Decimal>,
    /// Stamp tax withheld.
    pub total_stamp_tax: Decimal,
    /// Employee SSI premium.
    #[serde(rename = "totalSSIWorkerPrem")]
    pub total_ssi_worker_prem: Decimal,
    /// Employer SSI premium.
    #[serde(rename = "totalSSIEmployerPrem")]
    pub total_ssi_employer_prem: Decimal,
    /// SSI base to carry into the next month.
    #[serde(rename = "transferredSSIBase1", default)]
    pub transferred_ssi_base1: Option<Decimal>,
    /// Second SSI base to carry into the next month.
    #[serde(rename = "transferredSSIBase2", default)]
    pub transferred_ssi_base2: Option<Decimal>,
}

/// One payroll entry of an engine response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payroll {
    /// Calendar year reported by the engine.
    pub year: i32,
    /// Calendar month reported by the engine.
    pub month: u32,
    /// Total employer cost.
    pub total_cost: Decimal,
    /// The calculated figures; absent when the engine could not calculate.
    #[serde(default)]
    pub payroll_result: Option<PayrollBreakdown>,
}

/// Engine response to a [`WageCalculationModel`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineResponse {
    /// Calculated payrolls, one per requested period.
    #[serde(default)]
    pub payrolls: Vec<Payroll>,
}

impl EngineResponse {
    /// Returns the calculated figures of the first payroll, if any.
    pub fn first_result(&self) -> Option<(&Payroll, &PayrollBreakdown)> {
        let payroll = self.payrolls.first()?;
        let breakdown = payroll.payroll_result.as_ref()?;
        Some((payroll, breakdown))
    }
}
