//! Fiscal parameter and scenario models.
//!
//! [`FiscalParameters`] is the year-scoped table of legal limits the engine
//! calculates with. A [`ScenarioConfig`] describes what-if changes to that
//! table, and [`CustomParams`] is the sparse override that is actually sent
//! to the engine.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One progressive income tax bracket.
///
/// Income up to `limit` (cumulative within the year) is taxed at `rate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Upper bound of the bracket.
    pub limit: Decimal,
    /// Tax rate as a fraction (0.15 for 15%).
    pub rate: Decimal,
}

/// Year-scoped default parameters of the payroll calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FiscalParameters {
    /// The fiscal year these parameters are labelled with.
    pub year: i32,
    /// Gross monthly minimum wage.
    pub min_wage: Decimal,
    /// Net monthly minimum wage.
    pub min_wage_net: Decimal,
    /// Lower limit of the SSI premium base.
    pub ssi_lower_limit: Decimal,
    /// Upper limit (ceiling) of the SSI premium base.
    pub ssi_upper_limit: Decimal,
    /// Stamp tax ratio applied to gross wage.
    pub stamp_tax_ratio: Decimal,
    /// Income tax brackets ordered by strictly increasing limit.
    pub tax_brackets: Vec<TaxBracket>,
}

/// A what-if scenario applied uniformly to an employee set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioConfig {
    /// Scenario label; unnamed scenarios are labelled by position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Percentage raise applied to every employee's wage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_raise_percent: Option<Decimal>,
    /// Gross minimum wage override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_wage: Option<Decimal>,
    /// Net minimum wage override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_wage_net: Option<Decimal>,
    /// Percentage increase of every finite tax bracket limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_limit_increase_percent: Option<Decimal>,
    /// Explicit bracket list; takes precedence over `tax_limit_increase_percent`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_tax_brackets: Option<Vec<TaxBracket>>,
    /// Percentage increase of both SSI limits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssi_limit_increase_percent: Option<Decimal>,
}

/// Sparse parameter overrides layered onto the engine's defaults.
///
/// Only the fields that are set are sent to the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomParams {
    /// Gross minimum wage override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_wage: Option<Decimal>,
    /// Net minimum wage override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_wage_net: Option<Decimal>,
    /// SSI lower limit override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssi_lower_limit: Option<Decimal>,
    /// SSI upper limit override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssi_upper_limit: Option<Decimal>,
    /// Tax bracket override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_brackets: Option<Vec<TaxBracket>>,
}

impl CustomParams {
    /// Returns true if no override is set.
    pub fn is_empty(&self) -> bool {
        self.min_wage.is_none()
            && self.min_wage_net.is_none()
            && self.ssi_lower_limit.is_none()
            && self.ssi_upper_limit.is_none()
            && self.tax_brackets.is_none()
    }
}
