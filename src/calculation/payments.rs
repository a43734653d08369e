//! Payment line construction.
//!
//! Maps a period's extra payments into the engine's normalized payment-line
//! format. The base wage always travels as a fixed first line without an
//! amount; the engine derives it from the wage fields of the model.

use crate::models::{AmountType, ExtraPayment, PayEvent, PaymentCategory, PaymentLine};

/// Reference id of the base pay line.
pub const BASE_PAYMENT_REF: &str = "1";

/// Builds the ordered payment lines of one period.
///
/// The base line comes first. Each extra payment at zero-based index `i`
/// becomes a line with reference `extra_<i+2>`, in input order. An extra
/// payment is net only when its type is explicitly `Net`.
///
/// # Example
///
/// ```
/// use bordro_tools::calculation::build_payments;
/// use bordro_tools::models::{ExtraPayment, PaymentCategory};
/// use rust_decimal::Decimal;
///
/// let bonus = ExtraPayment {
///     name: "Bonus".to_string(),
///     amount: Decimal::new(5000, 0),
///     amount_type: None,
///     category: PaymentCategory::ExtraPay,
/// };
/// let lines = build_payments(&[bonus]);
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[0].reference, "1");
/// assert_eq!(lines[1].reference, "extra_2");
/// ```
pub fn build_payments(extra_payments: &[ExtraPayment]) -> Vec<PaymentLine> {
    let base = PaymentLine {
        reference: BASE_PAYMENT_REF.to_string(),
        name: None,
        payment_type: PaymentCategory::RegularPayment,
        amount: None,
        calculation_type: None,
    };

    std::iter::once(base)
        .chain(
            extra_payments
                .iter()
                .enumerate()
                .map(|(index, payment)| PaymentLine {
                    reference: format!("extra_{}", index + 2),
                    name: Some(payment.name.clone()),
                    payment_type: payment.category,
                    amount: Some(payment.amount),
                    calculation_type: Some(match payment.amount_type {
                        Some(AmountType::Net) => AmountType::Net,
                        _ => AmountType::Gross,
                    }),
                }),
        )
        .collect()
}

/// Collects the extra payments that apply to one calendar month.
///
/// Recurring payments apply to every month and come first; pay events are
/// appended only for the month they name, in input order.
pub fn payments_for_period(
    recurring: &[ExtraPayment],
    pay_events: &[PayEvent],
    year: i32,
    month: u32,
) -> Vec<ExtraPayment> {
    recurring
        .iter()
        .cloned()
        .chain(
            pay_events
                .iter()
                .filter(|event| event.falls_in(year, month))
                .map(PayEvent::payment),
        )
        .collect()
}
