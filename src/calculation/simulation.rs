//! Employee-level and multi-employee orchestration.
//!
//! Wires the parameter resolver, the period driver and the aggregator
//! together. Employees are run one after another in input order; the
//! output order always matches the input order.

use std::time::Instant;

use tracing::info;

use crate::engine::PayrollEngine;
use crate::error::PayrollResult;
use crate::models::{
    BulkResult, CumulativeState, CustomParams, Employee, EmployeeResult, ScenarioConfig,
    SimulationResult,
};

use super::aggregation::{aggregate_bulk, aggregate_employee};
use super::parameters::{apply_scenario, resolve_defaults};
use super::period_driver::{PeriodPlan, run_periods};

/// Calculates one employee over `period_count` months starting at `(year, month)`.
///
/// Either every period is returned or the whole employee fails.
pub async fn calculate_employee(
    engine: &dyn PayrollEngine,
    employee: &Employee,
    year: i32,
    month: u32,
    period_count: u32,
    custom_params: Option<&CustomParams>,
    initial_state: CumulativeState,
) -> PayrollResult<EmployeeResult> {
    let plan = PeriodPlan {
        wage: &employee.wage,
        start_year: year,
        start_month: month,
        period_count,
        extra_payments: &employee.extra_payments,
        pay_events: &employee.pay_events,
        custom_params,
        initial_state,
    };

    let periods = run_periods(engine, &plan).await?;

    Ok(EmployeeResult {
        name: employee.wage.name.clone(),
        totals: aggregate_employee(&periods),
        periods,
    })
}

/// Calculates every employee from a fresh state, in input order.
pub async fn calculate_employees(
    engine: &dyn PayrollEngine,
    employees: &[Employee],
    year: i32,
    month: u32,
    period_count: u32,
    custom_params: Option<&CustomParams>,
) -> PayrollResult<Vec<EmployeeResult>> {
    let mut results = Vec::with_capacity(employees.len());
    for employee in employees {
        let result = calculate_employee(
            engine,
            employee,
            year,
            month,
            period_count,
            custom_params,
            CumulativeState::default(),
        )
        .await?;
        results.push(result);
    }
    Ok(results)
}

/// Calculates several employees and sums them up.
pub async fn calculate_bulk(
    engine: &dyn PayrollEngine,
    employees: &[Employee],
    year: i32,
    month: u32,
    period_count: u32,
) -> PayrollResult<BulkResult> {
    let employees = calculate_employees(engine, employees, year, month, period_count, None).await?;
    let summary = aggregate_bulk(&employees, period_count)?;
    Ok(BulkResult { employees, summary })
}

/// Simulates a budget over consecutive months, optionally under a scenario.
///
/// The scenario's parameter changes are sent to the engine as overrides and
/// its salary raise is applied to every employee's wage before the run.
pub async fn simulate_budget(
    engine: &dyn PayrollEngine,
    employees: &[Employee],
    year: i32,
    start_month: u32,
    period_count: u32,
    scenario: Option<&ScenarioConfig>,
) -> PayrollResult<SimulationResult> {
    let started = Instant::now();
    let parameters = resolve_defaults(year);
    let custom_params = match scenario {
        Some(s) => apply_scenario(&parameters, s)?,
        None => CustomParams::default(),
    };

    let employees: Vec<Employee> = match scenario.and_then(|s| s.salary_raise_percent) {
        Some(percent) => employees
            .iter()
            .map(|e| e.with_raise(percent))
            .collect::<PayrollResult<_>>()?,
        None => employees.to_vec(),
    };

    let results = calculate_employees(
        engine,
        &employees,
        year,
        start_month,
        period_count,
        Some(&custom_params),
    )
    .await?;
    let summary = aggregate_bulk(&results, period_count)?;

    info!(
        scenario = scenario.and_then(|s| s.name.as_deref()).unwrap_or("-"),
        employees = results.len(),
        period_count,
        total_cost = %summary.total_yearly_cost,
        duration_ms = started.elapsed().as_millis() as u64,
        "Budget simulation completed"
    );

    Ok(SimulationResult {
        scenario_name: scenario.and_then(|s| s.name.clone()),
        parameters,
        custom_params,
        employees: results,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::RecordingEngine;
    use crate::error::PayrollError;
    use crate::models::{AmountType, ExtraPayment, PaymentCategory, SsiType, WageDefinition};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn employee(name: &str, wage: &str) -> Employee {
        Employee {
            wage: WageDefinition {
                name: name.to_string(),
                wage_amount: dec(wage),
                wage_calculation_type: AmountType::Gross,
                ssi_type: SsiType::S4A,
            },
            extra_payments: vec![],
            pay_events: vec![],
        }
    }

    #[tokio::test]
    async fn test_calculate_employee_totals_match_periods() {
        let engine = RecordingEngine::new();
        let result = calculate_employee(
            &engine,
            &employee("A", "40000"),
            2025,
            1,
            12,
            None,
            CumulativeState::default(),
        )
        .await
        .unwrap();

        assert_eq!(result.name, "A");
        assert_eq!(result.periods.len(), 12);
        let cost: Decimal = result.periods.iter().map(|p| p.employer_cost).sum();
        assert_eq!(result.totals.total_cost, cost);
        // Fake engine: cost = gross * 1.2
        assert_eq!(result.totals.total_cost, dec("576000"));
        assert_eq!(result.totals.total_gross, dec("480000"));
    }

    #[tokio::test]
    async fn test_recurring_extra_payment_sent_every_month() {
        let engine = RecordingEngine::new();
        let mut worker = employee("A", "40000");
        worker.extra_payments.push(ExtraPayment {
            name: "Yol".to_string(),
            amount: dec("1000"),
            amount_type: None,
            category: PaymentCategory::SocialAid,
        });

        calculate_employee(&engine, &worker, 2025, 1, 3, None, CumulativeState::default())
            .await
            .unwrap();
        assert!(engine.calls().iter().all(|c| c.payments.len() == 2));
    }

    #[tokio::test]
    async fn test_bulk_preserves_input_order_and_sums() {
        let engine = RecordingEngine::new();
        let employees = vec![employee("B", "30000"), employee("A", "50000")];
        let result = calculate_bulk(&engine, &employees, 2025, 6, 1).await.unwrap();

        let names: Vec<&str> = result.employees.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(result.summary.total_employees, 2);
        assert_eq!(result.summary.total_yearly_cost, dec("96000"));
        assert_eq!(result.summary.average_monthly_cost, dec("96000"));
        // Each employee starts from a fresh state.
        let calls = engine.calls();
        assert_eq!(calls[1].cumulative_income_tax_base, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_failed_employee_fails_bulk() {
        let engine = RecordingEngine::failing_at(3);
        let employees = vec![employee("A", "30000"), employee("B", "30000")];
        let result = calculate_bulk(&engine, &employees, 2025, 1, 2).await;
        assert!(matches!(
            result,
            Err(PayrollError::NoResult { year: 2025, month: 2 })
        ));
    }

    #[tokio::test]
    async fn test_simulation_applies_raise_and_overrides() {
        let engine = RecordingEngine::new();
        let scenario = ScenarioConfig {
            name: Some("Raise".to_string()),
            salary_raise_percent: Some(dec("10")),
            min_wage: Some(dec("30000")),
            ..Default::default()
        };

        let result = simulate_budget(
            &engine,
            &[employee("A", "50000")],
            2025,
            1,
            12,
            Some(&scenario),
        )
        .await
        .unwrap();

        let calls = engine.calls();
        assert_eq!(calls.len(), 12);
        assert!(calls.iter().all(|c| c.wage_amount == dec("55000")));
        assert_eq!(
            calls[0]
                .calculation_params
                .custom_global_params
                .as_ref()
                .and_then(|p| p.min_wage),
            Some(dec("30000"))
        );
        assert_eq!(result.scenario_name.as_deref(), Some("Raise"));
        assert_eq!(result.parameters.year, 2025);
        assert_eq!(result.summary.total_yearly_cost, dec("792000"));
        assert_eq!(result.summary.average_monthly_cost, dec("66000"));
    }

    #[tokio::test]
    async fn test_simulation_without_scenario_sends_no_overrides() {
        let engine = RecordingEngine::new();
        let result = simulate_budget(&engine, &[employee("A", "50000")], 2025, 1, 2, None)
            .await
            .unwrap();

        assert!(result.custom_params.is_empty());
        assert!(
            engine
                .calls()
                .iter()
                .all(|c| c.calculation_params.custom_global_params.is_none())
        );
    }

    #[tokio::test]
    async fn test_simulation_with_zero_periods_is_rejected() {
        let engine = RecordingEngine::new();
        let result = simulate_budget(&engine, &[employee("A", "50000")], 2025, 1, 0, None).await;
        assert!(matches!(result, Err(PayrollError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_raise_wiping_out_wage_never_reaches_engine() {
        let engine = RecordingEngine::new();
        let scenario = ScenarioConfig {
            salary_raise_percent: Some(dec("-150")),
            ..Default::default()
        };
        let result = simulate_budget(
            &engine,
            &[employee("A", "50000")],
            2025,
            1,
            12,
            Some(&scenario),
        )
        .await;

        assert!(matches!(result, Err(PayrollError::Validation { .. })));
        assert!(engine.calls().is_empty());
    }
}
