//! Deterministic in-process engine for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Datelike;
use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    AmountType, EngineResponse, Payroll, PayrollBreakdown, WageCalculationModel,
};

use super::PayrollEngine;

/// Flat-rate engine that records every model it receives.
///
/// Gross is the wage plus every line amount (net amounts are grossed up by
/// 25%), employer cost is gross plus 20%, the income tax base is 85% of
/// gross. SSI bases and the exemption base grow by fixed steps so that
/// chaining can be observed.
#[derive(Default)]
pub(crate) struct RecordingEngine {
    calls: Mutex<Vec<WageCalculationModel>>,
    fail_at_call: Option<usize>,
    omit_transferred_bases: bool,
}

impl RecordingEngine {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Answers the call with this zero-based index without a payroll result.
    pub(crate) fn failing_at(call: usize) -> Self {
        Self {
            fail_at_call: Some(call),
            ..Self::default()
        }
    }

    /// Leaves the transferred SSI bases out of every response.
    pub(crate) fn omitting_transferred_bases() -> Self {
        Self {
            omit_transferred_bases: true,
            ..Self::default()
        }
    }

    pub(crate) fn calls(&self) -> Vec<WageCalculationModel> {
        self.calls.lock().unwrap().clone()
    }

    fn gross_of(amount: Decimal, amount_type: AmountType) -> Decimal {
        match amount_type {
            AmountType::Gross => amount,
            AmountType::Net => amount * Decimal::new(125, 2),
        }
    }
}

#[async_trait]
impl PayrollEngine for RecordingEngine {
    async fn calculate(&self, model: &WageCalculationModel) -> PayrollResult<EngineResponse> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(model.clone());
            calls.len() - 1
        };

        if model.period_count != 1 {
            return Err(PayrollError::Engine {
                status: 400,
                message: "expected exactly one period".to_string(),
            });
        }

        let year = model.calc_date.year();
        let month = model.calc_date.month();

        if self.fail_at_call == Some(index) {
            return Ok(EngineResponse {
                payrolls: vec![Payroll {
                    year,
                    month,
                    total_cost: Decimal::ZERO,
                    payroll_result: None,
                }],
            });
        }

        let extras: Decimal = model
            .payments
            .iter()
            .filter_map(|line| {
                line.amount.map(|amount| {
                    Self::gross_of(amount, line.calculation_type.unwrap_or(AmountType::Gross))
                })
            })
            .sum();
        let gross = Self::gross_of(model.wage_amount, model.wage_calculation_type) + extras;
        let ssi_worker = gross * Decimal::new(15, 2);
        let ssi_employer = gross * Decimal::new(20, 2);
        let tax_base = gross * Decimal::new(85, 2);
        let income_tax = tax_base * Decimal::new(15, 2);
        let stamp_tax = gross * Decimal::new(759, 5);

        let (base1, base2) = if self.omit_transferred_bases {
            (None, None)
        } else {
            (
                Some(model.transferred_ssi_base1 + Decimal::ONE_HUNDRED),
                Some(model.transferred_ssi_base2 + Decimal::TEN),
            )
        };

        Ok(EngineResponse {
            payrolls: vec![Payroll {
                year,
                month,
                total_cost: gross + ssi_employer,
                payroll_result: Some(PayrollBreakdown {
                    total_net: gross - ssi_worker - income_tax - stamp_tax,
                    total_gross: gross,
                    total_income_tax: income_tax,
                    total_income_tax_base: tax_base,
                    total_min_wage_income_tax_exemption_base: Some(
                        model.cumulative_min_wage_income_tax_base + Decimal::ONE_THOUSAND,
                    ),
                    total_stamp_tax: stamp_tax,
                    total_ssi_worker_prem: ssi_worker,
                    total_ssi_employer_prem: ssi_employer,
                    transferred_ssi_base1: base1,
                    transferred_ssi_base2: base2,
                }),
            }],
        })
    }
}
