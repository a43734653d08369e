//! Tool registry: lists the tools and dispatches calls to the calculation layer.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_bulk, calculate_employee, compare_scenarios, resolve_defaults, simulate_budget,
};
use crate::engine::PayrollEngine;
use crate::error::{PayrollError, PayrollResult};

use super::args::{
    BulkPayrollArgs, CalculatePayrollArgs, CompareScenariosArgs, DefaultParamsArgs,
    SimulateBudgetArgs, parse_arguments,
};
use super::descriptors::{
    CALCULATE_BULK_PAYROLL_TOOL, CALCULATE_PAYROLL_TOOL, COMPARE_SCENARIOS_TOOL,
    GET_DEFAULT_PARAMS_TOOL, SIMULATE_BUDGET_TOOL, ToolDescriptor,
    calculate_bulk_payroll_descriptor, calculate_payroll_descriptor,
    compare_scenarios_descriptor, get_default_params_descriptor, simulate_budget_descriptor,
};
use super::result::ToolResult;

/// Central registry of the payroll tools.
///
/// Every call runs under the configured timeout. When it expires the call's
/// future is dropped, which cancels the in-flight engine request and skips
/// the remaining periods.
#[derive(Clone)]
pub struct ToolRegistry {
    engine: Arc<dyn PayrollEngine>,
    timeout: Duration,
}

impl ToolRegistry {
    /// Creates a registry backed by `engine`.
    pub fn new(engine: Arc<dyn PayrollEngine>, timeout: Duration) -> Self {
        Self { engine, timeout }
    }

    /// Returns the configured per-call timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Lists all tools.
    pub fn list_tools(&self) -> Vec<ToolDescriptor> {
        vec![
            calculate_payroll_descriptor(),
            calculate_bulk_payroll_descriptor(),
            simulate_budget_descriptor(),
            compare_scenarios_descriptor(),
            get_default_params_descriptor(),
        ]
    }

    /// Whether a tool with this name exists.
    pub fn has_tool(&self, name: &str) -> bool {
        matches!(
            name,
            CALCULATE_PAYROLL_TOOL
                | CALCULATE_BULK_PAYROLL_TOOL
                | SIMULATE_BUDGET_TOOL
                | COMPARE_SCENARIOS_TOOL
                | GET_DEFAULT_PARAMS_TOOL
        )
    }

    /// Calls a tool and wraps the outcome in the MCP result envelope.
    pub async fn call_tool(&self, name: &str, arguments: Option<Value>) -> ToolResult {
        match self.call(name, arguments).await {
            Ok(value) => ToolResult::success(&value),
            Err(error) => ToolResult::from_error(&error),
        }
    }

    /// Calls a tool and returns its result as JSON.
    pub async fn call(&self, name: &str, arguments: Option<Value>) -> PayrollResult<Value> {
        let correlation_id = Uuid::new_v4();
        let start_time = Instant::now();
        info!(correlation_id = %correlation_id, tool = %name, "Processing tool call");

        let outcome = match tokio::time::timeout(self.timeout, self.dispatch(name, arguments)).await
        {
            Ok(outcome) => outcome,
            Err(_) => Err(PayrollError::Timeout {
                seconds: self.timeout.as_secs(),
            }),
        };

        let duration = start_time.elapsed();
        match &outcome {
            Ok(_) => info!(
                correlation_id = %correlation_id,
                tool = %name,
                duration_ms = duration.as_millis() as u64,
                "Tool call completed successfully"
            ),
            Err(error) => warn!(
                correlation_id = %correlation_id,
                tool = %name,
                code = error.code(),
                error = %error,
                duration_ms = duration.as_millis() as u64,
                "Tool call failed"
            ),
        }
        outcome
    }

    async fn dispatch(&self, name: &str, arguments: Option<Value>) -> PayrollResult<Value> {
        let engine = self.engine.as_ref();
        match name {
            CALCULATE_PAYROLL_TOOL => {
                let args: CalculatePayrollArgs = parse_arguments(arguments)?;
                args.validate()?;
                let result = calculate_employee(
                    engine,
                    &args.employee,
                    args.year,
                    args.month,
                    args.period_count,
                    None,
                    args.cumulative_state.unwrap_or_default(),
                )
                .await?;
                to_json(&result)
            }
            CALCULATE_BULK_PAYROLL_TOOL => {
                let args: BulkPayrollArgs = parse_arguments(arguments)?;
                args.validate()?;
                let result = calculate_bulk(
                    engine,
                    &args.employees,
                    args.year,
                    args.month,
                    args.period_count,
                )
                .await?;
                to_json(&result)
            }
            SIMULATE_BUDGET_TOOL => {
                let args: SimulateBudgetArgs = parse_arguments(arguments)?;
                args.validate()?;
                let result = simulate_budget(
                    engine,
                    &args.employees,
                    args.year,
                    args.start_month,
                    args.period_count,
                    args.scenario.as_ref(),
                )
                .await?;
                to_json(&result)
            }
            COMPARE_SCENARIOS_TOOL => {
                let args: CompareScenariosArgs = parse_arguments(arguments)?;
                args.validate()?;
                let result = compare_scenarios(
                    engine,
                    &args.employees,
                    args.year,
                    args.period_count,
                    &args.scenarios,
                )
                .await?;
                to_json(&result)
            }
            GET_DEFAULT_PARAMS_TOOL => {
                let args: DefaultParamsArgs = parse_arguments(arguments)?;
                to_json(&resolve_defaults(args.year))
            }
            other => Err(PayrollError::UnknownTool {
                name: other.to_string(),
            }),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> PayrollResult<Value> {
    Ok(serde_json::to_value(value)?)
}
