//! Aggregated results returned by the tools.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CustomParams, FiscalParameters, PeriodResult};

/// Totals of one employee across all calculated periods.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeTotals {
    /// Sum of employer cost.
    pub total_cost: Decimal,
    /// Sum of net wage.
    pub total_net: Decimal,
    /// Sum of gross wage.
    pub total_gross: Decimal,
}

/// One employee's complete multi-period result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResult {
    /// Employee display name.
    pub name: String,
    /// Summed figures of `periods`.
    #[serde(flatten)]
    pub totals: EmployeeTotals,
    /// Month-by-month results in calendar order.
    pub periods: Vec<PeriodResult>,
}

/// Totals across several employees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSummary {
    /// Number of employees included.
    pub total_employees: usize,
    /// Sum of employer cost over all employees and periods.
    pub total_yearly_cost: Decimal,
    /// Sum of net wage over all employees and periods.
    pub total_yearly_net: Decimal,
    /// Sum of gross wage over all employees and periods.
    pub total_yearly_gross: Decimal,
    /// `total_yearly_cost` divided by the period count.
    pub average_monthly_cost: Decimal,
}

/// Result of `calculate_bulk_payroll`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkResult {
    /// Per-employee results in input order.
    pub employees: Vec<EmployeeResult>,
    /// Totals across all employees.
    pub summary: BulkSummary,
}

/// Result of `simulate_budget`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    /// Name of the applied scenario, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario_name: Option<String>,
    /// Defaults of the simulated year.
    pub parameters: FiscalParameters,
    /// Overrides sent to the engine.
    pub custom_params: CustomParams,
    /// Per-employee results in input order.
    pub employees: Vec<EmployeeResult>,
    /// Totals across all employees.
    pub summary: BulkSummary,
}

/// One scenario's line in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioComparison {
    /// Scenario label.
    pub name: String,
    /// Total employer cost of the scenario.
    pub total_cost: Decimal,
    /// Total net wage of the scenario.
    pub total_net: Decimal,
    /// Total gross wage of the scenario.
    pub total_gross: Decimal,
    /// Average employer cost per period.
    pub average_monthly_cost: Decimal,
    /// `total_cost` minus the baseline cost.
    pub cost_difference: Decimal,
    /// `cost_difference` as a percentage of the baseline cost.
    pub percent_change: Decimal,
}

/// Result of `compare_scenarios`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Total cost of the first scenario.
    pub baseline_cost: Decimal,
    /// One line per scenario in input order.
    pub comparison: Vec<ScenarioComparison>,
    /// Name of the lowest-cost scenario.
    pub cheapest_scenario: String,
    /// Name of the highest-cost scenario.
    pub most_expensive_scenario: String,
}
