//! The conversation agent: response-strategy dispatch and error recovery.

pub mod city;
pub mod conversation;
pub mod prompt;
pub mod session;

pub use conversation::{ChatTurn, Conversation, Role};
pub use session::{SessionStore, MAX_SESSION_TURNS};

use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::SkycastConfig;
use crate::error::Result;
use crate::generation::{GeminiClient, TextGenerator};
use crate::weather::{OpenWeatherClient, WeatherLookup, WeatherSnapshot};

/// Tool name reported for the weather provider.
pub const WEATHER_TOOL: &str = "OpenWeather";
/// Tool name reported for the text generator.
pub const GENERATION_TOOL: &str = "Gemini";

/// City used when no city can be extracted from the message.
pub const DEFAULT_CITY: &str = "New York";

/// At most this many history turns are rendered into a prompt.
pub const PROMPT_CONTEXT_TURNS: usize = 6;

/// Lowercase substrings that route a message to the small-talk branch.
const GREETING_KEYWORDS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "how are you",
    "good morning",
    "good evening",
];

/// Outcome of one agent call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentResult {
    /// The reply text (always present, possibly degraded).
    pub response: String,
    /// External tools invoked, in invocation order. The weather tool is only
    /// listed when its lookup succeeded.
    pub tools_used: Vec<&'static str>,
}

/// Orchestrates city extraction, weather lookup, and reply generation.
///
/// Stateless per invocation: only the message and the supplied history matter.
/// `get_response` never fails; every upstream error is converted into a
/// degraded-but-valid reply at its call site.
pub struct WeatherAgent {
    weather: Arc<dyn WeatherLookup>,
    generator: Arc<dyn TextGenerator>,
    default_city: String,
}

impl WeatherAgent {
    /// Create an agent over explicit clients (mocks in tests).
    pub fn new(weather: Arc<dyn WeatherLookup>, generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            weather,
            generator,
            default_city: DEFAULT_CITY.to_string(),
        }
    }

    /// Create an agent over the real OpenWeather and Gemini clients.
    ///
    /// Missing API keys are a fatal configuration error here, never a
    /// per-request one.
    pub fn from_config(config: &SkycastConfig) -> Result<Self> {
        let weather = OpenWeatherClient::new(
            config.openweather_api_key()?.to_string(),
            config.openweather_base_url().map(String::from),
        );
        let generator = GeminiClient::new(
            config.gemini_api_key()?.to_string(),
            config.gemini_base_url().map(String::from),
        );
        Ok(Self::new(Arc::new(weather), Arc::new(generator)))
    }

    /// Override the fallback city.
    pub fn with_default_city(mut self, city: impl Into<String>) -> Self {
        self.default_city = city.into();
        self
    }

    /// Answer a user message given recent conversation history.
    ///
    /// The caller is expected to bound `history` to the most recent
    /// [`MAX_SESSION_TURNS`]; the agent additionally uses at most the last
    /// [`PROMPT_CONTEXT_TURNS`] for prompt context.
    pub async fn get_response(&self, message: &str, history: &[ChatTurn]) -> AgentResult {
        let context = last_n(history, PROMPT_CONTEXT_TURNS);

        if is_small_talk(message) {
            return self.small_talk(message, context).await;
        }
        self.weather_query(message, context).await
    }

    async fn small_talk(&self, message: &str, context: &[ChatTurn]) -> AgentResult {
        debug!("small-talk branch");
        let prompt = prompt::small_talk(context, message);

        let response = match self.generator.generate(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "generation failed on small-talk branch");
                format!("Hello! (Gemini error: {e})")
            }
        };

        AgentResult {
            response,
            tools_used: vec![GENERATION_TOOL],
        }
    }

    async fn weather_query(&self, message: &str, context: &[ChatTurn]) -> AgentResult {
        let city = city::extract_city(message).unwrap_or_else(|| self.default_city.clone());
        debug!(%city, "weather branch");

        let snapshot = match self.weather.fetch(&city).await {
            Ok(obs) => WeatherSnapshot::from_observation(&city, &obs),
            Err(e) => {
                warn!(%city, error = %e, "weather lookup failed");
                // Attempted but failed: the weather tool is not reported.
                let prompt = prompt::weather_failure(message, &e.to_string());
                let response = match self.generator.generate(&prompt).await {
                    Ok(reply) => reply,
                    Err(gen_err) => {
                        warn!(error = %gen_err, "generation failed after lookup failure");
                        format!("Sorry, I couldn't fetch the weather. (Gemini error: {gen_err})")
                    }
                };
                return AgentResult {
                    response,
                    tools_used: vec![GENERATION_TOOL],
                };
            }
        };

        let prompt = prompt::weather_report(context, message, &snapshot);
        let response = match self.generator.generate(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                warn!(error = %e, "generation failed; falling back to plain summary");
                format!("{} (Gemini error: {e})", snapshot.plain_summary())
            }
        };

        AgentResult {
            response,
            tools_used: vec![WEATHER_TOOL, GENERATION_TOOL],
        }
    }
}

fn is_small_talk(message: &str) -> bool {
    let lower = message.to_lowercase();
    GREETING_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

fn last_n(turns: &[ChatTurn], n: usize) -> &[ChatTurn] {
    let start = turns.len().saturating_sub(n);
    &turns[start..]
}
