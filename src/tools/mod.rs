//! Agent-facing tools.
//!
//! Five tools are exposed: `calculate_payroll`, `calculate_bulk_payroll`,
//! `simulate_budget`, `compare_scenarios` and `get_default_params`. Each
//! validates its arguments, runs the calculation layer and returns an MCP
//! text result.

mod args;
mod descriptors;
mod registry;
mod result;

pub use args::{
    BulkPayrollArgs, CalculatePayrollArgs, CompareScenariosArgs, DEFAULT_SIMULATION_PERIODS,
    DefaultParamsArgs, MAX_PERIOD_COUNT, SimulateBudgetArgs, parse_arguments,
};
pub use descriptors::{
    CALCULATE_BULK_PAYROLL_TOOL, CALCULATE_PAYROLL_TOOL, COMPARE_SCENARIOS_TOOL,
    GET_DEFAULT_PARAMS_TOOL, SIMULATE_BUDGET_TOOL, ToolDescriptor,
};
pub use registry::ToolRegistry;
pub use result::{ContentItem, ToolResult};
