//! Performance benchmarks for the payroll orchestration.
//!
//! Measures the orchestration overhead with an in-process engine, so the
//! numbers exclude network time:
//! - 12-month single employee calculation
//! - 12-month budget simulation for growing workforces
//! - Three-scenario comparison
//! - Full tool call through the HTTP router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::hint::black_box;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{body::Body, http::Request};
use chrono::Datelike;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;
use tower::ServiceExt;

use bordro_tools::api::{create_router, AppState};
use bordro_tools::calculation::{calculate_employee, compare_scenarios, simulate_budget};
use bordro_tools::engine::PayrollEngine;
use bordro_tools::error::PayrollResult;
use bordro_tools::models::{
    AmountType, CumulativeState, Employee, EngineResponse, ExtraPayment, PaymentCategory, Payroll,
    PayrollBreakdown, ScenarioConfig, SsiType, WageCalculationModel, WageDefinition,
};
use bordro_tools::tools::ToolRegistry;

/// Answers instantly with flat-rate figures.
struct InstantEngine;

#[async_trait]
impl PayrollEngine for InstantEngine {
    async fn calculate(&self, model: &WageCalculationModel) -> PayrollResult<EngineResponse> {
        let gross = model.wage_amount
            + model
                .payments
                .iter()
                .filter_map(|p| p.amount)
                .sum::<Decimal>();
        let employer = gross * Decimal::new(205, 3);
        let tax_base = gross * Decimal::new(85, 2);

        Ok(EngineResponse {
            payrolls: vec![Payroll {
                year: model.calc_date.year(),
                month: model.calc_date.month(),
                total_cost: gross + employer,
                payroll_result: Some(PayrollBreakdown {
                    total_net: tax_base * Decimal::new(85, 2),
                    total_gross: gross,
                    total_income_tax: tax_base * Decimal::new(15, 2),
                    total_income_tax_base: tax_base,
                    total_min_wage_income_tax_exemption_base: None,
                    total_stamp_tax: gross * Decimal::new(759, 5),
                    total_ssi_worker_prem: gross * Decimal::new(15, 2),
                    total_ssi_employer_prem: employer,
                    transferred_ssi_base1: Some(Decimal::ZERO),
                    transferred_ssi_base2: Some(Decimal::ZERO),
                }),
            }],
        })
    }
}

/// Creates `count` employees with a recurring meal allowance.
fn create_employees(count: usize) -> Vec<Employee> {
    (0..count)
        .map(|i| Employee {
            wage: WageDefinition {
                name: format!("Employee {}", i + 1),
                wage_amount: Decimal::new(30_000 + (i as i64 % 20) * 2_500, 0),
                wage_calculation_type: if i % 3 == 0 {
                    AmountType::Net
                } else {
                    AmountType::Gross
                },
                ssi_type: SsiType::S4A,
            },
            extra_payments: vec![ExtraPayment {
                name: "Yemek".to_string(),
                amount: Decimal::new(3_000, 0),
                amount_type: Some(AmountType::Net),
                category: PaymentCategory::SocialAid,
            }],
            pay_events: vec![],
        })
        .collect()
}

fn create_scenarios() -> Vec<ScenarioConfig> {
    vec![
        ScenarioConfig {
            name: Some("Current".to_string()),
            ..Default::default()
        },
        ScenarioConfig {
            name: Some("Raise 25%".to_string()),
            salary_raise_percent: Some(Decimal::new(25, 0)),
            ..Default::default()
        },
        ScenarioConfig {
            name: Some("Raise and brackets".to_string()),
            salary_raise_percent: Some(Decimal::new(30, 0)),
            tax_limit_increase_percent: Some(Decimal::new(20, 0)),
            ssi_limit_increase_percent: Some(Decimal::new(15, 0)),
            ..Default::default()
        },
    ]
}

/// Benchmark: one employee over twelve months.
fn bench_single_employee_year(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let employee = create_employees(1).remove(0);

    c.bench_function("single_employee_12_periods", |b| {
        b.to_async(&rt).iter(|| async {
            let result = calculate_employee(
                &InstantEngine,
                black_box(&employee),
                2025,
                1,
                12,
                None,
                CumulativeState::default(),
            )
            .await
            .unwrap();
            black_box(result)
        });
    });
}

/// Benchmark: budget simulation scaling with workforce size.
fn bench_simulation_scaling(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let scenario = create_scenarios().remove(2);
    let mut group = c.benchmark_group("simulate_budget_12_periods");

    for employee_count in [1usize, 10, 100] {
        let employees = create_employees(employee_count);
        group.throughput(Throughput::Elements(employee_count as u64 * 12));
        group.bench_with_input(
            BenchmarkId::from_parameter(employee_count),
            &employees,
            |b, employees| {
                b.to_async(&rt).iter(|| async {
                    let result =
                        simulate_budget(&InstantEngine, employees, 2025, 1, 12, Some(&scenario))
                            .await
                            .unwrap();
                    black_box(result)
                });
            },
        );
    }

    group.finish();
}

/// Benchmark: three scenarios over twenty employees.
fn bench_scenario_comparison(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let employees = create_employees(20);
    let scenarios = create_scenarios();

    let mut group = c.benchmark_group("compare_scenarios");
    group.sample_size(20);
    group.bench_function("3_scenarios_20_employees", |b| {
        b.to_async(&rt).iter(|| async {
            let result = compare_scenarios(&InstantEngine, &employees, 2025, 12, &scenarios)
                .await
                .unwrap();
            black_box(result)
        });
    });
    group.finish();
}

/// Benchmark: a full `simulate_budget` tool call through the router.
fn bench_router_tool_call(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let registry = ToolRegistry::new(Arc::new(InstantEngine), Duration::from_secs(30));
    let router = create_router(AppState::new(registry));
    let employees = serde_json::to_value(create_employees(10)).unwrap();
    let body = serde_json::json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "tools/call",
        "params": {
            "name": "simulate_budget",
            "arguments": { "employees": employees, "year": 2025 }
        }
    })
    .to_string();

    c.bench_function("mcp_simulate_budget_10_employees", |b| {
        b.to_async(&rt).iter(|| async {
            let request = Request::builder()
                .method("POST")
                .uri("/mcp")
                .header("Content-Type", "application/json")
                .body(Body::from(body.clone()))
                .unwrap();
            let response = router.clone().oneshot(request).await.unwrap();
            black_box(response)
        });
    });
}

criterion_group!(
    benches,
    bench_single_employee_year,
    bench_simulation_scaling,
    bench_scenario_comparison,
    bench_router_tool_call
);
criterion_main!(benches);
