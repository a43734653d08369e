//! Wage definition and payment models.
//!
//! This module defines the inputs of a payroll calculation: the employee's
//! base wage, recurring extra payments, and pay events that only apply to a
//! single calendar month.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// How an amount should be interpreted by the calculation engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AmountType {
    /// The amount is before tax and premium deductions.
    Gross,
    /// The amount is what the employee receives after deductions.
    Net,
}

/// Social security category of the employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SsiType {
    /// Employees under a service contract (4/a).
    #[default]
    S4A,
    /// Self-employed (4/b).
    S4B,
    /// Public servants (4/c).
    S4C,
}

/// Category tag of a payment line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaymentCategory {
    /// The regular monthly wage.
    RegularPayment,
    /// Overtime pay.
    Overtime,
    /// Social aid (food, transport, family allowances).
    SocialAid,
    /// Bonuses and other one-off extra pay.
    #[default]
    ExtraPay,
}

/// The wage an employee is paid each month.
///
/// # Example
///
/// ```
/// use bordro_tools::models::{AmountType, SsiType, WageDefinition};
///
/// let json = r#"{"name": "Ayşe", "wageAmount": 50000, "wageCalculationType": "Gross"}"#;
/// let wage: WageDefinition = serde_json::from_str(json).unwrap();
/// assert_eq!(wage.wage_calculation_type, AmountType::Gross);
/// assert_eq!(wage.ssi_type, SsiType::S4A);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WageDefinition {
    /// Employee display name.
    pub name: String,
    /// The wage amount.
    pub wage_amount: Decimal,
    /// Whether `wage_amount` is gross or net.
    pub wage_calculation_type: AmountType,
    /// Social security category.
    #[serde(default)]
    pub ssi_type: SsiType,
}

/// A payment on top of the base wage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraPayment {
    /// Payment description.
    pub name: String,
    /// The payment amount.
    pub amount: Decimal,
    /// Gross or net interpretation; absent means gross.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub amount_type: Option<AmountType>,
    /// Payment category.
    #[serde(default)]
    pub category: PaymentCategory,
}

/// An extra payment scoped to a single calendar month, such as a bonus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayEvent {
    /// Calendar year the payment belongs to.
    pub year: i32,
    /// Calendar month (1-12) the payment belongs to.
    pub month: u32,
    /// Payment description.
    pub name: String,
    /// The payment amount.
    pub amount: Decimal,
    /// Gross or net interpretation; absent means gross.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub amount_type: Option<AmountType>,
    /// Payment category.
    #[serde(default)]
    pub category: PaymentCategory,
}

impl PayEvent {
    /// Returns true if this event belongs to the given calendar month.
    pub fn falls_in(&self, year: i32, month: u32) -> bool {
        self.year == year && self.month == month
    }

    /// The payment this event contributes to its month.
    pub fn payment(&self) -> ExtraPayment {
        ExtraPayment {
            name: self.name.clone(),
            amount: self.amount,
            amount_type: self.amount_type,
            category: self.category,
        }
    }
}

/// An employee as submitted to the tools: wage plus extra payments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// The base wage.
    #[serde(flatten)]
    pub wage: WageDefinition,
    /// Payments added to every period.
    #[serde(default)]
    pub extra_payments: Vec<ExtraPayment>,
    /// Payments added only to the month they name.
    #[serde(default)]
    pub pay_events: Vec<PayEvent>,
}

impl Employee {
    /// Returns a copy of this employee with the wage raised by `percent`.
    ///
    /// Fails when the raised wage overflows or is not positive.
    pub fn with_raise(&self, percent: Decimal) -> PayrollResult<Employee> {
        let wage_amount = (percent / Decimal::ONE_HUNDRED)
            .checked_add(Decimal::ONE)
            .and_then(|multiplier| self.wage.wage_amount.checked_mul(multiplier))
            .filter(|amount| *amount > Decimal::ZERO)
            .ok_or_else(|| {
                PayrollError::validation(
                    "salaryRaisePercent",
                    format!("raise of {}% gives no valid wage for {}", percent, self.wage.name),
                )
            })?;
        let mut raised = self.clone();
        raised.wage.wage_amount = wage_amount;
        Ok(raised)
    }
}
