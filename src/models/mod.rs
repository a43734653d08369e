//! Core data models for the payroll tool service.
//!
//! This module contains the wage inputs, the engine's data contract, the
//! fiscal parameter tables and every result shape returned to callers.

mod engine_model;
mod fiscal;
mod period;
mod summary;
mod wage;

pub use engine_model::{
    CalculationParams, EngineResponse, PaymentLine, Payroll, PayrollBreakdown, PeriodLengthType,
    WageCalculationModel, WagePeriodType,
};
pub use fiscal::{CustomParams, FiscalParameters, ScenarioConfig, TaxBracket};
pub use period::{CumulativeState, PeriodResult};
pub use summary::{
    BulkResult, BulkSummary, ComparisonResult, EmployeeResult, EmployeeTotals, ScenarioComparison,
    SimulationResult,
};
pub use wage::{
    AmountType, Employee, ExtraPayment, PayEvent, PaymentCategory, SsiType, WageDefinition,
};
