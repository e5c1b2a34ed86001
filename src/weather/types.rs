//! OpenWeather wire types and the normalized snapshot.

use serde::Deserialize;
use serde_json::json;

/// Sentinel rendered for fields the upstream response did not include.
const MISSING: &str = "N/A";

/// The provider's native response shape, decoded once.
///
/// Everything beyond `main` and `weather` is optional; per-field absence
/// degrades to a sentinel in [`WeatherSnapshot`] instead of failing the
/// request.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherObservation {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    #[serde(default)]
    pub main: Option<MainMetrics>,
    #[serde(default)]
    pub wind: Option<Wind>,
    #[serde(default)]
    pub sys: Option<Sys>,
    #[serde(default)]
    pub dt: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherCondition {
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainMetrics {
    #[serde(default)]
    pub temp: Option<f64>,
    #[serde(default)]
    pub feels_like: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    #[serde(default)]
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sys {
    #[serde(default)]
    pub country: Option<String>,
}

/// Normalized weather fields used to build a generation prompt.
///
/// Transient: constructed per request, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub city: String,
    pub country: Option<String>,
    pub description: Option<String>,
    pub temperature_c: Option<f64>,
    pub feels_like_c: Option<f64>,
    pub humidity_percent: Option<f64>,
    pub wind_speed_mps: Option<f64>,
    pub unix_time: Option<i64>,
}

impl WeatherSnapshot {
    /// Build a snapshot from the provider response, falling back to the
    /// requested city name when the response omits one.
    pub fn from_observation(requested_city: &str, obs: &WeatherObservation) -> Self {
        let description = obs
            .weather
            .first()
            .and_then(|w| w.description.as_deref())
            .map(capitalize);

        Self {
            city: obs
                .name
                .clone()
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| requested_city.to_string()),
            country: obs.sys.as_ref().and_then(|s| s.country.clone()),
            description,
            temperature_c: obs.main.as_ref().and_then(|m| m.temp),
            feels_like_c: obs.main.as_ref().and_then(|m| m.feels_like),
            humidity_percent: obs.main.as_ref().and_then(|m| m.humidity),
            wind_speed_mps: obs.wind.as_ref().and_then(|w| w.speed),
            unix_time: obs.dt,
        }
    }

    /// Render the snapshot as the JSON object embedded in prompts.
    ///
    /// Missing fields become the `"N/A"` sentinel so the generator never sees
    /// nulls. Key order is deterministic (serde_json's map is ordered).
    pub fn to_prompt_json(&self) -> serde_json::Value {
        json!({
            "city": self.city,
            "country": or_missing_str(self.country.as_deref()),
            "description": or_missing_str(self.description.as_deref()),
            "temperature_c": or_missing_num(self.temperature_c),
            "feels_like_c": or_missing_num(self.feels_like_c),
            "humidity_percent": or_missing_num(self.humidity_percent),
            "wind_speed_mps": or_missing_num(self.wind_speed_mps),
            "unix_time": self.unix_time.map(serde_json::Value::from)
                .unwrap_or_else(|| MISSING.into()),
        })
    }

    /// Description for display, sentinel when absent.
    pub fn description_or_missing(&self) -> &str {
        self.description.as_deref().unwrap_or(MISSING)
    }

    /// Temperature for display, sentinel when absent.
    pub fn temperature_display(&self) -> String {
        self.temperature_c
            .map(|t| t.to_string())
            .unwrap_or_else(|| MISSING.to_string())
    }

    /// Plain-text summary used when the generator is unavailable but weather
    /// data is in hand.
    pub fn plain_summary(&self) -> String {
        format!(
            "The weather in {}: {}, {}°C",
            self.city,
            self.description_or_missing(),
            self.temperature_display(),
        )
    }
}

fn or_missing_str(value: Option<&str>) -> serde_json::Value {
    value.unwrap_or(MISSING).into()
}

fn or_missing_num(value: Option<f64>) -> serde_json::Value {
    value
        .map(serde_json::Value::from)
        .unwrap_or_else(|| MISSING.into())
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
