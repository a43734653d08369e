//! Calculation logic for the payroll tools.
//!
//! This module contains the fiscal parameter resolver, payment line
//! construction, the stateful month-by-month period driver, aggregation of
//! period results, budget simulation and scenario comparison.

mod aggregation;
mod parameters;
mod payments;
mod period_driver;
mod scenarios;
mod simulation;

pub use aggregation::{aggregate_bulk, aggregate_employee};
pub use parameters::{
    DEFAULT_FISCAL_YEAR, UNBOUNDED_BRACKET_LIMIT, apply_scenario, percent_multiplier,
    resolve_defaults,
};
pub use payments::{BASE_PAYMENT_REF, build_payments, payments_for_period};
pub use period_driver::{
    PERIODS_PER_ENGINE_CALL, PeriodPlan, build_period_model, period_date, run_periods,
    start_of_month, step,
};
pub use scenarios::compare_scenarios;
pub use simulation::{calculate_bulk, calculate_employee, calculate_employees, simulate_budget};
