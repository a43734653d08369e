//! Tool names, descriptions and JSON input schemas.

use serde::Serialize;
use serde_json::{Value, json};

/// Single employee, one or more months.
pub const CALCULATE_PAYROLL_TOOL: &str = "calculate_payroll";
/// Several employees, one or more months.
pub const CALCULATE_BULK_PAYROLL_TOOL: &str = "calculate_bulk_payroll";
/// Budget simulation under an optional scenario.
pub const SIMULATE_BUDGET_TOOL: &str = "simulate_budget";
/// Side-by-side scenario comparison.
pub const COMPARE_SCENARIOS_TOOL: &str = "compare_scenarios";
/// Default fiscal parameters lookup.
pub const GET_DEFAULT_PARAMS_TOOL: &str = "get_default_params";

/// Tool descriptor in MCP form.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    /// Tool name used in calls.
    pub name: String,
    /// What the tool does, for the agent.
    pub description: String,
    /// JSON schema of the arguments.
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

fn employee_schema() -> Value {
    let payment = json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "amount": { "type": "number" },
            "type": { "type": "string", "enum": ["Gross", "Net"] },
            "category": {
                "type": "string",
                "enum": ["RegularPayment", "Overtime", "SocialAid", "ExtraPay"]
            }
        },
        "required": ["name", "amount"]
    });

    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string", "description": "Employee display name" },
            "wageAmount": { "type": "number", "description": "Monthly wage" },
            "wageCalculationType": {
                "type": "string",
                "enum": ["Gross", "Net"],
                "description": "Whether wageAmount is gross or net"
            },
            "ssiType": { "type": "string", "enum": ["S4A", "S4B", "S4C"] },
            "extraPayments": {
                "type": "array",
                "description": "Payments added to every calculated month",
                "items": payment
            },
            "payEvents": {
                "type": "array",
                "description": "Payments added only to the given month",
                "items": {
                    "type": "object",
                    "properties": {
                        "year": { "type": "integer" },
                        "month": { "type": "integer", "minimum": 1, "maximum": 12 },
                        "name": { "type": "string" },
                        "amount": { "type": "number" },
                        "type": { "type": "string", "enum": ["Gross", "Net"] },
                        "category": {
                            "type": "string",
                            "enum": ["RegularPayment", "Overtime", "SocialAid", "ExtraPay"]
                        }
                    },
                    "required": ["year", "month", "name", "amount"]
                }
            }
        },
        "required": ["name", "wageAmount", "wageCalculationType"]
    })
}

fn scenario_schema() -> Value {
    let bracket = json!({
        "type": "object",
        "properties": {
            "limit": { "type": "number" },
            "rate": { "type": "number" }
        },
        "required": ["limit", "rate"]
    });

    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "salaryRaisePercent": { "type": "number" },
            "minWage": { "type": "number" },
            "minWageNet": { "type": "number" },
            "taxLimitIncreasePercent": { "type": "number" },
            "customTaxBrackets": { "type": "array", "items": bracket },
            "ssiLimitIncreasePercent": { "type": "number" }
        }
    })
}

fn period_count_schema(default: u32) -> Value {
    json!({ "type": "integer", "minimum": 1, "maximum": 36, "default": default })
}

/// Descriptor of `calculate_payroll`.
pub fn calculate_payroll_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: CALCULATE_PAYROLL_TOOL.to_string(),
        description: concat!(
            "Calculates one employee's payroll month by month, carrying cumulative ",
            "income tax and SSI bases between months. Returns per-month results and totals."
        )
        .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "employee": employee_schema(),
                "year": { "type": "integer" },
                "month": { "type": "integer", "minimum": 1, "maximum": 12 },
                "periodCount": period_count_schema(1),
                "cumulativeState": {
                    "type": "object",
                    "description": "Running bases from earlier months",
                    "properties": {
                        "cumulativeIncomeTaxBase": { "type": "number" },
                        "cumulativeMinWageIncomeTaxBase": { "type": "number" },
                        "transferredSSIBase1": { "type": "number" },
                        "transferredSSIBase2": { "type": "number" }
                    }
                }
            },
            "required": ["employee", "year", "month"]
        }),
    }
}

/// Descriptor of `calculate_bulk_payroll`.
pub fn calculate_bulk_payroll_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: CALCULATE_BULK_PAYROLL_TOOL.to_string(),
        description: concat!(
            "Calculates payroll for several employees over the same months and ",
            "returns each employee's result plus combined totals."
        )
        .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "employees": { "type": "array", "items": employee_schema(), "minItems": 1 },
                "year": { "type": "integer" },
                "month": { "type": "integer", "minimum": 1, "maximum": 12 },
                "periodCount": period_count_schema(1)
            },
            "required": ["employees", "year", "month"]
        }),
    }
}

/// Descriptor of `simulate_budget`.
pub fn simulate_budget_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: SIMULATE_BUDGET_TOOL.to_string(),
        description: concat!(
            "Simulates the employer cost of a workforce over consecutive months, ",
            "optionally applying a salary raise and fiscal parameter changes."
        )
        .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "employees": { "type": "array", "items": employee_schema(), "minItems": 1 },
                "year": { "type": "integer" },
                "startMonth": { "type": "integer", "minimum": 1, "maximum": 12, "default": 1 },
                "periodCount": period_count_schema(12),
                "scenario": scenario_schema()
            },
            "required": ["employees", "year"]
        }),
    }
}

/// Descriptor of `compare_scenarios`.
pub fn compare_scenarios_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: COMPARE_SCENARIOS_TOOL.to_string(),
        description: concat!(
            "Runs a budget simulation per scenario for the same employees and ranks ",
            "them by total cost. The first scenario is the baseline."
        )
        .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "employees": { "type": "array", "items": employee_schema(), "minItems": 1 },
                "year": { "type": "integer" },
                "periodCount": period_count_schema(12),
                "scenarios": { "type": "array", "items": scenario_schema(), "minItems": 1 }
            },
            "required": ["employees", "year", "scenarios"]
        }),
    }
}

/// Descriptor of `get_default_params`.
pub fn get_default_params_descriptor() -> ToolDescriptor {
    ToolDescriptor {
        name: GET_DEFAULT_PARAMS_TOOL.to_string(),
        description: concat!(
            "Returns the default fiscal parameters: minimum wage, SSI limits, ",
            "stamp tax ratio and income tax brackets."
        )
        .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "year": { "type": "integer", "default": 2025 }
            }
        }),
    }
}
