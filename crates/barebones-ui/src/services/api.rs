//! REST client for the health probe and item listing.
//!
//! # Design
//! - Every request takes an optional abort signal owned by the caller's fetch scope.
//! - Non-2xx statuses are failures; bodies are only decoded after the status check.

use crate::core::config::ApiConfig;
use crate::core::error::{ApiError, check_status};
use barebones_api_models::{HealthResponse, Item, ItemsPayload};
use gloo_net::http::Request;
use web_sys::AbortSignal;

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub(crate) const fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    async fn get_json<T: for<'de> serde::Deserialize<'de>>(
        &self,
        url: &str,
        signal: Option<&AbortSignal>,
    ) -> Result<T, ApiError> {
        let response = Request::get(url)
            .abort_signal(signal)
            .send()
            .await
            .map_err(|err| classify(err, signal))?;
        check_status(response.status())?;
        response
            .json::<T>()
            .await
            .map_err(|err| classify(err, signal))
    }

    pub(crate) async fn fetch_health(
        &self,
        signal: Option<&AbortSignal>,
    ) -> Result<HealthResponse, ApiError> {
        self.get_json(&self.config.health_url(), signal).await
    }

    pub(crate) async fn fetch_items(
        &self,
        signal: Option<&AbortSignal>,
    ) -> Result<Vec<Item>, ApiError> {
        let payload: ItemsPayload = self.get_json(&self.config.data_url(), signal).await?;
        Ok(payload.into_items())
    }
}

fn classify(err: gloo_net::Error, signal: Option<&AbortSignal>) -> ApiError {
    if signal.is_some_and(AbortSignal::aborted) {
        return ApiError::Aborted;
    }
    match err {
        gloo_net::Error::SerdeError(err) => ApiError::Decode(err.to_string()),
        other => ApiError::Transport(other.to_string()),
    }
}
