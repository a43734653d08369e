//! Scenario comparison.
//!
//! Runs a full budget simulation per scenario against the same employees and
//! ranks the outcomes by total employer cost. The first scenario is always
//! the baseline.

use rust_decimal::Decimal;
use tracing::info;

use crate::engine::PayrollEngine;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{ComparisonResult, Employee, ScenarioComparison, ScenarioConfig};

use super::simulation::simulate_budget;

/// Calculation month every compared scenario starts from.
const COMPARISON_START_MONTH: u32 = 1;

/// Compares scenarios by total employer cost.
///
/// Scenarios run independently and in the given order. `percent_change` is
/// zero when the baseline cost is zero. Cost ties rank by input order.
pub async fn compare_scenarios(
    engine: &dyn PayrollEngine,
    employees: &[Employee],
    year: i32,
    period_count: u32,
    scenarios: &[ScenarioConfig],
) -> PayrollResult<ComparisonResult> {
    if scenarios.is_empty() {
        return Err(PayrollError::validation(
            "scenarios",
            "at least one scenario is required",
        ));
    }

    let mut runs = Vec::with_capacity(scenarios.len());
    for (index, scenario) in scenarios.iter().enumerate() {
        let simulation = simulate_budget(
            engine,
            employees,
            year,
            COMPARISON_START_MONTH,
            period_count,
            Some(scenario),
        )
        .await?;
        let name = scenario
            .name
            .clone()
            .unwrap_or_else(|| format!("Scenario {}", index + 1));
        runs.push((name, simulation.summary));
    }

    let baseline_cost = runs[0].1.total_yearly_cost;
    let comparison: Vec<ScenarioComparison> = runs
        .into_iter()
        .map(|(name, summary)| {
            let cost_difference = summary.total_yearly_cost - baseline_cost;
            ScenarioComparison {
                name,
                total_cost: summary.total_yearly_cost,
                total_net: summary.total_yearly_net,
                total_gross: summary.total_yearly_gross,
                average_monthly_cost: summary.average_monthly_cost,
                cost_difference,
                percent_change: percent_change(cost_difference, baseline_cost),
            }
        })
        .collect();

    let mut ranked: Vec<&ScenarioComparison> = comparison.iter().collect();
    ranked.sort_by(|a, b| a.total_cost.cmp(&b.total_cost));
    let cheapest_scenario = ranked[0].name.clone();
    let most_expensive_scenario = ranked[ranked.len() - 1].name.clone();

    info!(
        scenarios = comparison.len(),
        baseline_cost = %baseline_cost,
        cheapest = %cheapest_scenario,
        most_expensive = %most_expensive_scenario,
        "Scenario comparison completed"
    );

    Ok(ComparisonResult {
        baseline_cost,
        comparison,
        cheapest_scenario,
        most_expensive_scenario,
    })
}

fn percent_change(difference: Decimal, baseline: Decimal) -> Decimal {
    if baseline.is_zero() {
        Decimal::ZERO
    } else {
        difference / baseline * Decimal::ONE_HUNDRED
    }
}
