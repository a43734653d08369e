//! The external payroll calculation engine.
//!
//! Tax and SSI law lives in the engine; this crate only shapes requests for
//! it and folds its answers back together. [`PayrollEngine`] is the seam:
//! production uses [`HttpPayrollEngine`], tests substitute a deterministic
//! in-process engine.

mod http;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

use crate::error::PayrollResult;
use crate::models::{EngineResponse, WageCalculationModel};

pub use http::{API_KEY_HEADER, CALCULATE_PATH, HttpPayrollEngine};

/// A calculator that turns one month's wage model into payroll figures.
#[async_trait]
pub trait PayrollEngine: Send + Sync {
    /// Calculates a single-period model.
    ///
    /// Implementations must answer each call independently; the caller is
    /// responsible for threading cumulative state between months.
    async fn calculate(&self, model: &WageCalculationModel) -> PayrollResult<EngineResponse>;
}
