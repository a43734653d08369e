//! Fiscal parameter defaults and scenario overrides.
//!
//! This module supplies the year-scoped default parameters of the payroll
//! calculation and turns a [`ScenarioConfig`] into the sparse
//! [`CustomParams`] override the engine understands.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{CustomParams, FiscalParameters, ScenarioConfig, TaxBracket};

/// The only year with a real parameter table.
pub const DEFAULT_FISCAL_YEAR: i32 = 2025;

/// Limit of the top bracket, meaning "no upper bound" (999,999,999,999).
///
/// Never scaled by a tax limit increase.
pub const UNBOUNDED_BRACKET_LIMIT: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 0);

/// Returns the default fiscal parameters for `year`.
///
/// Only 2025 has real figures. Any other year gets the 2025 table with the
/// `year` field relabelled, so callers must not treat the limits as valid
/// for that year.
///
/// # Example
///
/// ```
/// use bordro_tools::calculation::resolve_defaults;
///
/// let params = resolve_defaults(2030);
/// assert_eq!(params.year, 2030);
/// assert_eq!(params.tax_brackets, resolve_defaults(2025).tax_brackets);
/// ```
pub fn resolve_defaults(year: i32) -> FiscalParameters {
    FiscalParameters {
        year,
        ..defaults_2025()
    }
}

fn defaults_2025() -> FiscalParameters {
    FiscalParameters {
        year: DEFAULT_FISCAL_YEAR,
        min_wage: Decimal::new(2_600_550, 2),
        min_wage_net: Decimal::new(2_210_467, 2),
        ssi_lower_limit: Decimal::new(2_600_550, 2),
        ssi_upper_limit: Decimal::new(19_504_140, 2),
        stamp_tax_ratio: Decimal::new(759, 5),
        tax_brackets: vec![
            TaxBracket {
                limit: Decimal::new(158_000, 0),
                rate: Decimal::new(15, 2),
            },
            TaxBracket {
                limit: Decimal::new(330_000, 0),
                rate: Decimal::new(20, 2),
            },
            TaxBracket {
                limit: Decimal::new(1_200_000, 0),
                rate: Decimal::new(27, 2),
            },
            TaxBracket {
                limit: Decimal::new(4_300_000, 0),
                rate: Decimal::new(35, 2),
            },
            TaxBracket {
                limit: UNBOUNDED_BRACKET_LIMIT,
                rate: Decimal::new(40, 2),
            },
        ],
    }
}

/// Converts a percentage into a multiplier: 10 becomes 1.10.
pub fn percent_multiplier(percent: Decimal) -> Decimal {
    Decimal::ONE + percent / Decimal::ONE_HUNDRED
}

/// Builds the engine overrides for a scenario.
///
/// - minimum wage overrides are copied verbatim
/// - an SSI limit increase scales both SSI limits, unrounded
/// - `custom_tax_brackets` is used verbatim when present; otherwise a tax
///   limit increase scales every finite bracket limit, rounded to the
///   nearest integer, leaving rates and the unbounded bracket untouched
///
/// The salary raise is not a parameter override; it is applied to the
/// employees' wages by the caller.
///
/// Fails with a validation error when a scaled limit overflows or is not
/// positive.
pub fn apply_scenario(
    defaults: &FiscalParameters,
    scenario: &ScenarioConfig,
) -> PayrollResult<CustomParams> {
    let mut params = CustomParams {
        min_wage: scenario.min_wage,
        min_wage_net: scenario.min_wage_net,
        ..CustomParams::default()
    };

    if let Some(percent) = scenario.ssi_limit_increase_percent {
        let field = "ssiLimitIncreasePercent";
        params.ssi_lower_limit = Some(scale_limit(field, defaults.ssi_lower_limit, percent)?);
        params.ssi_upper_limit = Some(scale_limit(field, defaults.ssi_upper_limit, percent)?);
    }

    params.tax_brackets = match (&scenario.custom_tax_brackets, scenario.tax_limit_increase_percent)
    {
        (Some(custom), _) => Some(custom.clone()),
        (None, Some(percent)) => Some(scale_bracket_limits(&defaults.tax_brackets, percent)?),
        (None, None) => None,
    };

    Ok(params)
}

fn scale_limit(field: &str, limit: Decimal, percent: Decimal) -> PayrollResult<Decimal> {
    limit
        .checked_mul(percent_multiplier(percent))
        .filter(|scaled| *scaled > Decimal::ZERO)
        .ok_or_else(|| {
            PayrollError::validation(
                field,
                format!("increase of {}% gives no valid limit for {}", percent, limit),
            )
        })
}

fn scale_bracket_limits(
    brackets: &[TaxBracket],
    percent: Decimal,
) -> PayrollResult<Vec<TaxBracket>> {
    brackets
        .iter()
        .map(|bracket| {
            if bracket.limit == UNBOUNDED_BRACKET_LIMIT {
                return Ok(*bracket);
            }
            let limit = scale_limit("taxLimitIncreasePercent", bracket.limit, percent)?
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
            Ok(TaxBracket {
                limit,
                rate: bracket.rate,
            })
        })
        .collect()
}
