//! Common imports for Skycast users.

pub use crate::agent::{AgentResult, ChatTurn, Role, SessionStore, WeatherAgent};
pub use crate::config::SkycastConfig;
pub use crate::error::{Result, SkycastError};
pub use crate::generation::TextGenerator;
pub use crate::weather::{WeatherLookup, WeatherSnapshot};
