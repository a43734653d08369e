//! HTTP client for the payroll calculation engine.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

use crate::config::Settings;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{EngineResponse, WageCalculationModel};

use super::PayrollEngine;

/// Path of the calculation endpoint, relative to the engine base URL.
pub const CALCULATE_PATH: &str = "/wage/calculate";

/// Header carrying the engine credential.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Calls the engine over HTTP, one POST per period.
#[derive(Clone)]
pub struct HttpPayrollEngine {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl HttpPayrollEngine {
    /// Creates a client for the engine at `base_url`.
    ///
    /// `timeout` bounds each individual engine call.
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> PayrollResult<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), CALCULATE_PATH),
            api_key: api_key.into(),
        })
    }

    /// Creates a client from loaded settings.
    pub fn from_settings(settings: &Settings) -> PayrollResult<Self> {
        Self::new(
            &settings.engine_url,
            settings.api_key.clone(),
            settings.request_timeout(),
        )
    }

    /// The full URL calculation requests are posted to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl PayrollEngine for HttpPayrollEngine {
    async fn calculate(&self, model: &WageCalculationModel) -> PayrollResult<EngineResponse> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(model)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(
                status = status.as_u16(),
                calc_date = %model.calc_date,
                "Engine rejected request"
            );
            return Err(PayrollError::Engine {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<EngineResponse>()
            .await
            .map_err(|e| PayrollError::Engine {
                status: status.as_u16(),
                message: format!("Failed to decode engine response: {}", e),
            })
    }
}
