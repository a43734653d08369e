//! Summation of period results.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{BulkSummary, EmployeeResult, EmployeeTotals, PeriodResult};

/// Sums employer cost, net and gross over an employee's periods.
pub fn aggregate_employee(periods: &[PeriodResult]) -> EmployeeTotals {
    periods
        .iter()
        .fold(EmployeeTotals::default(), |totals, period| EmployeeTotals {
            total_cost: totals.total_cost + period.employer_cost,
            total_net: totals.total_net + period.net_wage,
            total_gross: totals.total_gross + period.gross_wage,
        })
}

/// Sums employee totals and derives the average cost per period.
///
/// `period_count` of zero is rejected rather than divided by.
pub fn aggregate_bulk(
    employees: &[EmployeeResult],
    period_count: u32,
) -> PayrollResult<BulkSummary> {
    if period_count == 0 {
        return Err(PayrollError::validation(
            "periodCount",
            "must be at least 1",
        ));
    }

    let totals = employees
        .iter()
        .fold(EmployeeTotals::default(), |sum, employee| EmployeeTotals {
            total_cost: sum.total_cost + employee.totals.total_cost,
            total_net: sum.total_net + employee.totals.total_net,
            total_gross: sum.total_gross + employee.totals.total_gross,
        });

    Ok(BulkSummary {
        total_employees: employees.len(),
        total_yearly_cost: totals.total_cost,
        total_yearly_net: totals.total_net,
        total_yearly_gross: totals.total_gross,
        average_monthly_cost: totals.total_cost / Decimal::from(period_count),
    })
}
