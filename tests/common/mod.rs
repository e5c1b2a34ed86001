//! Shared test helpers: mock weather and generation clients.
#![allow(dead_code)] // not every test binary uses every helper

use std::sync::Mutex;

use async_trait::async_trait;

use skycast::error::SkycastError;
use skycast::generation::TextGenerator;
use skycast::weather::{WeatherLookup, WeatherObservation};

/// A canned OpenWeather payload for London.
pub fn london_payload() -> serde_json::Value {
    serde_json::json!({
        "name": "London",
        "weather": [{"description": "light rain"}],
        "main": {"temp": 14.2, "feels_like": 13.0, "humidity": 87},
        "wind": {"speed": 4.6},
        "sys": {"country": "GB"},
        "dt": 1_700_000_000,
    })
}

/// Mock weather provider that records requested cities and returns queued
/// results.
#[derive(Default)]
pub struct MockWeather {
    results: Mutex<Vec<Result<WeatherObservation, SkycastError>>>,
    cities: Mutex<Vec<String>>,
}

impl MockWeather {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful observation from a raw JSON payload.
    pub fn queue_payload(&self, payload: serde_json::Value) {
        let obs = serde_json::from_value(payload).expect("valid observation payload");
        self.results.lock().unwrap().push(Ok(obs));
    }

    /// Queue a lookup failure.
    pub fn queue_error(&self, err: SkycastError) {
        self.results.lock().unwrap().push(Err(err));
    }

    /// Cities requested so far, in order.
    pub fn cities(&self) -> Vec<String> {
        self.cities.lock().unwrap().clone()
    }
}

#[async_trait]
impl WeatherLookup for MockWeather {
    async fn fetch(&self, city: &str) -> Result<WeatherObservation, SkycastError> {
        self.cities.lock().unwrap().push(city.to_string());
        let mut results = self.results.lock().unwrap();
        if results.is_empty() {
            return Ok(serde_json::from_value(london_payload()).unwrap());
        }
        results.remove(0)
    }
}

/// Mock text generator that records prompts and returns queued replies.
#[derive(Default)]
pub struct MockGenerator {
    replies: Mutex<Vec<Result<String, SkycastError>>>,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a reply.
    pub fn queue_reply(&self, text: &str) {
        self.replies.lock().unwrap().push(Ok(text.to_string()));
    }

    /// Queue a generation failure.
    pub fn queue_error(&self, err: SkycastError) {
        self.replies.lock().unwrap().push(Err(err));
    }

    /// Prompts received so far, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    /// The most recent prompt.
    pub fn last_prompt(&self) -> Option<String> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, SkycastError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let mut replies = self.replies.lock().unwrap();
        if replies.is_empty() {
            return Ok("Mock reply".to_string());
        }
        replies.remove(0)
    }
}
