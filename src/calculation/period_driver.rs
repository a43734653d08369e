//! Month-by-month engine driver.
//!
//! The engine's progressive tax brackets and SSI ceilings are cumulative
//! within a year, so a multi-month run is driven one month at a time: each
//! month's engine output supplies the cumulative bases of the next month's
//! input. [`step`] is the pure state transition, [`run_periods`] the loop
//! around it.
//!
//! A run either completes every period or fails as a whole. A response
//! without a payroll payload aborts the run with
//! [`PayrollError::NoResult`] and discards the months already calculated.

use chrono::{Datelike, Months, NaiveDate};
use tracing::debug;

use crate::engine::PayrollEngine;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    CalculationParams, CumulativeState, CustomParams, EngineResponse, ExtraPayment, PayEvent,
    PaymentLine, PeriodLengthType, PeriodResult, WageCalculationModel, WageDefinition,
    WagePeriodType,
};

use super::payments::{build_payments, payments_for_period};

/// Number of periods in every engine request.
pub const PERIODS_PER_ENGINE_CALL: u32 = 1;

/// Everything needed to drive one employee through consecutive months.
#[derive(Debug, Clone, Copy)]
pub struct PeriodPlan<'a> {
    /// The employee's wage.
    pub wage: &'a WageDefinition,
    /// Calendar year of the first period.
    pub start_year: i32,
    /// Calendar month (1-12) of the first period.
    pub start_month: u32,
    /// Number of consecutive months to calculate.
    pub period_count: u32,
    /// Payments added to every month.
    pub extra_payments: &'a [ExtraPayment],
    /// Payments added only to the month they name.
    pub pay_events: &'a [PayEvent],
    /// Engine parameter overrides, if any.
    pub custom_params: Option<&'a CustomParams>,
    /// Cumulative bases before the first month.
    pub initial_state: CumulativeState,
}

/// Returns the first day of `(year, month)`.
pub fn start_of_month(year: i32, month: u32) -> PayrollResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        PayrollError::validation("month", format!("{}-{} is not a calendar month", year, month))
    })
}

/// Returns the calculation date of period `index`: `start` plus `index` months.
///
/// # Example
///
/// ```
/// use bordro_tools::calculation::period_date;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 11, 1).unwrap();
/// let date = period_date(start, 3).unwrap();
/// assert_eq!(date, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
/// ```
pub fn period_date(start: NaiveDate, index: u32) -> PayrollResult<NaiveDate> {
    start
        .checked_add_months(Months::new(index))
        .ok_or_else(|| PayrollError::validation("periodCount", "period date out of range"))
}

/// Builds the single-period engine request of one month.
pub fn build_period_model(
    wage: &WageDefinition,
    calc_date: NaiveDate,
    payments: Vec<PaymentLine>,
    state: CumulativeState,
    custom_params: Option<&CustomParams>,
) -> WageCalculationModel {
    WageCalculationModel {
        calc_date,
        wage_amount: wage.wage_amount,
        ssi_type: wage.ssi_type,
        wage_calculation_type: wage.wage_calculation_type,
        wage_period_type: WagePeriodType::Monthly,
        period_length_type: PeriodLengthType::Month,
        period_count: PERIODS_PER_ENGINE_CALL,
        payments,
        cumulative_income_tax_base: state.cumulative_income_tax_base,
        cumulative_min_wage_income_tax_base: state.cumulative_min_wage_income_tax_base,
        transferred_ssi_base1: state.transferred_ssi_base1,
        transferred_ssi_base2: state.transferred_ssi_base2,
        calculation_params: CalculationParams {
            calculate_min_wage_exemption: true,
            custom_global_params: custom_params.filter(|p| !p.is_empty()).cloned(),
        },
    }
}

/// Folds one month's engine response into the carried state.
///
/// The income tax base accumulates; the exemption base and both SSI bases
/// are replaced by the engine's values, keeping the prior value when the
/// engine leaves one out.
pub fn step(
    state: CumulativeState,
    calc_date: NaiveDate,
    response: &EngineResponse,
) -> PayrollResult<(CumulativeState, PeriodResult)> {
    let (payroll, breakdown) = response.first_result().ok_or(PayrollError::NoResult {
        year: calc_date.year(),
        month: calc_date.month(),
    })?;

    let next = CumulativeState {
        cumulative_income_tax_base: state.cumulative_income_tax_base
            + breakdown.total_income_tax_base,
        cumulative_min_wage_income_tax_base: breakdown
            .total_min_wage_income_tax_exemption_base
            .unwrap_or(state.cumulative_min_wage_income_tax_base),
        transferred_ssi_base1: breakdown
            .transferred_ssi_base1
            .unwrap_or(state.transferred_ssi_base1),
        transferred_ssi_base2: breakdown
            .transferred_ssi_base2
            .unwrap_or(state.transferred_ssi_base2),
    };

    let result = PeriodResult {
        year: calc_date.year(),
        month: calc_date.month(),
        gross_wage: breakdown.total_gross,
        net_wage: breakdown.total_net,
        employer_cost: payroll.total_cost,
        income_tax: breakdown.total_income_tax,
        stamp_tax: breakdown.total_stamp_tax,
        ssi_worker_premium: breakdown.total_ssi_worker_prem,
        ssi_employer_premium: breakdown.total_ssi_employer_prem,
        cumulative_state: next,
    };

    Ok((next, result))
}

/// Runs `plan.period_count` consecutive months through the engine.
///
/// Exactly one engine call is made per month, strictly in order. The
/// returned sequence has one entry per period in calendar order.
pub async fn run_periods(
    engine: &dyn PayrollEngine,
    plan: &PeriodPlan<'_>,
) -> PayrollResult<Vec<PeriodResult>> {
    if plan.period_count == 0 {
        return Err(PayrollError::validation(
            "periodCount",
            "must be at least 1",
        ));
    }

    let start = start_of_month(plan.start_year, plan.start_month)?;
    let mut periods = Vec::with_capacity(plan.period_count as usize);
    let mut state = plan.initial_state;

    for index in 0..plan.period_count {
        let calc_date = period_date(start, index)?;
        let extras = payments_for_period(
            plan.extra_payments,
            plan.pay_events,
            calc_date.year(),
            calc_date.month(),
        );
        let model = build_period_model(
            plan.wage,
            calc_date,
            build_payments(&extras),
            state,
            plan.custom_params,
        );

        debug!(
            employee = %plan.wage.name,
            period = index,
            calc_date = %calc_date,
            payment_lines = model.payments.len(),
            "Calculating period"
        );

        let response = engine.calculate(&model).await?;
        let (next, result) = step(state, calc_date, &response)?;
        periods.push(result);
        state = next;
    }

    Ok(periods)
}
