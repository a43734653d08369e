//! Argument types of the five tools.
//!
//! Arguments arrive as camelCase JSON. Each type validates itself before any
//! engine call is made.

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::calculation::DEFAULT_FISCAL_YEAR;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{CumulativeState, Employee, ScenarioConfig};

/// Longest run a single tool call may request.
pub const MAX_PERIOD_COUNT: u32 = 36;

/// Default run length of `simulate_budget` and `compare_scenarios`.
pub const DEFAULT_SIMULATION_PERIODS: u32 = 12;

/// Largest percentage a scenario may raise a wage or limit by.
pub const MAX_SCENARIO_PERCENT: Decimal = Decimal::from_parts(1_000, 0, 0, false, 0);

fn default_period_count() -> u32 {
    1
}

fn default_simulation_periods() -> u32 {
    DEFAULT_SIMULATION_PERIODS
}

fn default_start_month() -> u32 {
    1
}

fn default_year() -> i32 {
    DEFAULT_FISCAL_YEAR
}

/// Arguments of `calculate_payroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CalculatePayrollArgs {
    /// The employee to calculate.
    pub employee: Employee,
    /// Calendar year of the first period.
    pub year: i32,
    /// Calendar month of the first period.
    pub month: u32,
    /// Number of consecutive months.
    #[serde(default = "default_period_count")]
    pub period_count: u32,
    /// Running bases carried in from earlier, separately calculated months.
    #[serde(default)]
    pub cumulative_state: Option<CumulativeState>,
}

/// Arguments of `calculate_bulk_payroll`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BulkPayrollArgs {
    /// Employees to calculate, in output order.
    pub employees: Vec<Employee>,
    /// Calendar year of the first period.
    pub year: i32,
    /// Calendar month of the first period.
    pub month: u32,
    /// Number of consecutive months.
    #[serde(default = "default_period_count")]
    pub period_count: u32,
}

/// Arguments of `simulate_budget`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SimulateBudgetArgs {
    /// Employees to simulate, in output order.
    pub employees: Vec<Employee>,
    /// Simulated year.
    pub year: i32,
    /// Calendar month of the first period.
    #[serde(default = "default_start_month")]
    pub start_month: u32,
    /// Number of consecutive months.
    #[serde(default = "default_simulation_periods")]
    pub period_count: u32,
    /// Optional parameter and wage changes.
    #[serde(default)]
    pub scenario: Option<ScenarioConfig>,
}

/// Arguments of `compare_scenarios`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompareScenariosArgs {
    /// Employees shared by every scenario.
    pub employees: Vec<Employee>,
    /// Simulated year.
    pub year: i32,
    /// Number of consecutive months.
    #[serde(default = "default_simulation_periods")]
    pub period_count: u32,
    /// Scenarios to compare; the first is the baseline.
    pub scenarios: Vec<ScenarioConfig>,
}

/// Arguments of `get_default_params`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DefaultParamsArgs {
    /// Year to look up.
    #[serde(default = "default_year")]
    pub year: i32,
}

/// Decodes tool arguments; absent arguments count as an empty object.
pub fn parse_arguments<T: DeserializeOwned>(arguments: Option<Value>) -> PayrollResult<T> {
    let value = match arguments {
        None | Some(Value::Null) => Value::Object(Default::default()),
        Some(value) => value,
    };
    serde_json::from_value(value).map_err(|e| PayrollError::validation("arguments", e.to_string()))
}

impl CalculatePayrollArgs {
    /// Checks month, period count and the employee.
    pub fn validate(&self) -> PayrollResult<()> {
        validate_month("month", self.month)?;
        validate_period_count(self.period_count)?;
        validate_employee("employee", &self.employee)
    }
}

impl BulkPayrollArgs {
    /// Checks month, period count and every employee.
    pub fn validate(&self) -> PayrollResult<()> {
        validate_month("month", self.month)?;
        validate_period_count(self.period_count)?;
        validate_employees(&self.employees)
    }
}

impl SimulateBudgetArgs {
    /// Checks start month, period count, every employee and the scenario.
    pub fn validate(&self) -> PayrollResult<()> {
        validate_month("startMonth", self.start_month)?;
        validate_period_count(self.period_count)?;
        validate_employees(&self.employees)?;
        match &self.scenario {
            Some(scenario) => validate_scenario("scenario", scenario),
            None => Ok(()),
        }
    }
}

impl CompareScenariosArgs {
    /// Checks period count, every employee and every scenario.
    pub fn validate(&self) -> PayrollResult<()> {
        validate_period_count(self.period_count)?;
        validate_employees(&self.employees)?;
        if self.scenarios.is_empty() {
            return Err(PayrollError::validation(
                "scenarios",
                "at least one scenario is required",
            ));
        }
        self.scenarios
            .iter()
            .enumerate()
            .try_for_each(|(index, scenario)| {
                validate_scenario(&format!("scenarios[{}]", index), scenario)
            })
    }
}

fn validate_month(field: &str, month: u32) -> PayrollResult<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(PayrollError::validation(
            field,
            format!("must be between 1 and 12, got {}", month),
        ))
    }
}

fn validate_period_count(period_count: u32) -> PayrollResult<()> {
    if (1..=MAX_PERIOD_COUNT).contains(&period_count) {
        Ok(())
    } else {
        Err(PayrollError::validation(
            "periodCount",
            format!(
                "must be between 1 and {}, got {}",
                MAX_PERIOD_COUNT, period_count
            ),
        ))
    }
}

fn validate_employees(employees: &[Employee]) -> PayrollResult<()> {
    if employees.is_empty() {
        return Err(PayrollError::validation(
            "employees",
            "at least one employee is required",
        ));
    }
    employees
        .iter()
        .enumerate()
        .try_for_each(|(index, employee)| {
            validate_employee(&format!("employees[{}]", index), employee)
        })
}

fn validate_employee(field: &str, employee: &Employee) -> PayrollResult<()> {
    if employee.wage.wage_amount <= Decimal::ZERO {
        return Err(PayrollError::validation(
            format!("{}.wageAmount", field),
            "must be greater than zero",
        ));
    }
    if let Some(event) = employee
        .pay_events
        .iter()
        .find(|event| !(1..=12).contains(&event.month))
    {
        return Err(PayrollError::validation(
            format!("{}.payEvents", field),
            format!("month must be between 1 and 12, got {}", event.month),
        ));
    }
    Ok(())
}

/// Percentages must stay above -100 so wages and limits remain positive.
fn validate_scenario(field: &str, scenario: &ScenarioConfig) -> PayrollResult<()> {
    let percents = [
        ("salaryRaisePercent", scenario.salary_raise_percent),
        ("ssiLimitIncreasePercent", scenario.ssi_limit_increase_percent),
        ("taxLimitIncreasePercent", scenario.tax_limit_increase_percent),
    ];
    let out_of_range = |percent: &Decimal| {
        *percent <= -Decimal::ONE_HUNDRED || *percent > MAX_SCENARIO_PERCENT
    };
    for (name, percent) in percents {
        if let Some(percent) = percent.filter(out_of_range) {
            return Err(PayrollError::validation(
                format!("{}.{}", field, name),
                format!(
                    "must be greater than -100 and at most {}, got {}",
                    MAX_SCENARIO_PERCENT, percent
                ),
            ));
        }
    }

    let minimums = [
        ("minWage", scenario.min_wage),
        ("minWageNet", scenario.min_wage_net),
    ];
    for (name, amount) in minimums {
        if amount.is_some_and(|amount| amount <= Decimal::ZERO) {
            return Err(PayrollError::validation(
                format!("{}.{}", field, name),
                "must be greater than zero",
            ));
        }
    }

    if let Some(brackets) = &scenario.custom_tax_brackets {
        if brackets.is_empty() {
            return Err(PayrollError::validation(
                format!("{}.customTaxBrackets", field),
                "at least one bracket is required",
            ));
        }
        if brackets.iter().any(|bracket| bracket.limit <= Decimal::ZERO) {
            return Err(PayrollError::validation(
                format!("{}.customTaxBrackets", field),
                "bracket limits must be greater than zero",
            ));
        }
    }
    Ok(())
}
