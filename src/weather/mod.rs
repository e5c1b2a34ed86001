//! Weather lookup trait and the OpenWeather implementation.

pub mod openweather;
pub mod types;

pub use openweather::OpenWeatherClient;
pub use types::{WeatherObservation, WeatherSnapshot};

use async_trait::async_trait;

use crate::error::SkycastError;

/// Core trait implemented by weather providers.
///
/// A single lookup per call; retries and aggregation are out of scope.
#[async_trait]
pub trait WeatherLookup: Send + Sync {
    /// Fetch current conditions for a city.
    async fn fetch(&self, city: &str) -> Result<WeatherObservation, SkycastError>;
}
