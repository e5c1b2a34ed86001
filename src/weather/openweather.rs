//! OpenWeather current-conditions client.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::client::{shared_client, status_to_error};
use crate::error::SkycastError;

use super::types::WeatherObservation;
use super::WeatherLookup;

const BASE_URL: &str = "https://api.openweathermap.org";

/// Upstream lookups are a single short round trip; anything slower than this
/// reads as an outage.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn new(api_key: String, base_url: Option<String>) -> Self {
        Self {
            api_key,
            base_url: base_url.unwrap_or_else(|| BASE_URL.to_string()),
        }
    }
}

#[async_trait]
impl WeatherLookup for OpenWeatherClient {
    async fn fetch(&self, city: &str) -> Result<WeatherObservation, SkycastError> {
        let url = format!("{}/data/2.5/weather", self.base_url);

        debug!(city, "OpenWeather lookup");

        let resp = shared_client()
            .get(&url)
            .query(&[("q", city), ("appid", &self.api_key), ("units", "metric")])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SkycastError::Timeout(REQUEST_TIMEOUT.as_millis() as u64)
                } else {
                    SkycastError::Network(e)
                }
            })?;

        let status = resp.status().as_u16();
        if status != 200 {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(status_to_error(status, &body_text));
        }

        let obs: WeatherObservation = resp.json().await?;

        // A 200 without the core blocks is an upstream contract violation.
        if obs.main.is_none() || obs.weather.is_empty() {
            return Err(SkycastError::MalformedPayload(
                "OpenWeather response missing 'main' or 'weather'".into(),
            ));
        }

        Ok(obs)
    }
}
