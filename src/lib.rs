//! Skycast — conversational weather assistant.
//!
//! Accepts free-text chat messages, heuristically extracts a city, fetches
//! live conditions from OpenWeather, and asks Gemini to compose the reply,
//! keeping short per-session conversation history.
//!
//! # Quick Start
//!
//! ```no_run
//! use skycast::agent::WeatherAgent;
//! use skycast::config::SkycastConfig;
//!
//! # async fn example() -> skycast::error::Result<()> {
//! let agent = WeatherAgent::from_config(&SkycastConfig::from_env())?;
//! let result = agent.get_response("What's the weather in London?", &[]).await;
//! println!("{}", result.response);
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod client;
pub mod config;
pub mod error;
pub mod generation;
pub mod prelude;
pub mod server;
pub mod weather;
