//! Deterministic prompt builders.
//!
//! Pure functions of their inputs so replies can be golden-tested. History is
//! rendered one turn per line, oldest first, role capitalized.

use crate::weather::WeatherSnapshot;

use super::conversation::ChatTurn;

/// Render history turns as "Role: content" lines, newline-joined.
pub fn format_history(turns: &[ChatTurn]) -> String {
    turns
        .iter()
        .map(|t| format!("{}: {}", t.role.as_str(), t.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prompt for the small-talk branch.
pub fn small_talk(history: &[ChatTurn], message: &str) -> String {
    format!(
        "You are a friendly AI assistant. \
         The user just greeted you or asked a casual question. \
         Reply naturally, warmly, and conversationally (not too long).\n\n\
         Conversation so far:\n{}\n\n\
         User message: {}",
        format_history(history),
        message,
    )
}

/// Prompt composed when the weather lookup failed.
pub fn weather_failure(message: &str, error_text: &str) -> String {
    format!(
        "You are a helpful weather assistant.\n\
         User message: {message}\n\
         Weather lookup failed with error: {error_text}\n\
         Politely explain the issue and suggest checking the city name. \
         Offer examples like 'What's the weather in London?' or 'Weather in Mumbai'."
    )
}

/// Data-grounded prompt composed from a successful lookup.
pub fn weather_report(history: &[ChatTurn], message: &str, snapshot: &WeatherSnapshot) -> String {
    format!(
        "You are a friendly weather assistant. \
         Use the provided real-time weather data to answer the user's message naturally.\n\n\
         Conversation context (last turns):\n{}\n\n\
         User message: {}\n\n\
         Real-time weather data (JSON):\n{}\n\n\
         Guidelines:\n\
         - Start with a concise summary (city, condition, temp, feels-like).\n\
         - Include one helpful tip (e.g., clothing, umbrella, hydration) if relevant.\n\
         - Keep it friendly and under 100 words.\n",
        format_history(history),
        message,
        snapshot.to_prompt_json(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn history() -> Vec<ChatTurn> {
        vec![
            ChatTurn::user("hello"),
            ChatTurn::assistant("Hi! How can I help?"),
        ]
    }

    #[test]
    fn history_renders_capitalized_roles_oldest_first() {
        assert_eq!(
            format_history(&history()),
            "User: hello\nAssistant: Hi! How can I help?"
        );
    }

    #[test]
    fn empty_history_renders_empty() {
        assert_eq!(format_history(&[]), "");
    }

    #[test]
    fn small_talk_prompt_is_stable() {
        let prompt = small_talk(&history(), "hey there");
        assert!(prompt.starts_with("You are a friendly AI assistant."));
        assert!(prompt.contains("User: hello\nAssistant: Hi! How can I help?"));
        assert!(prompt.ends_with("User message: hey there"));
        // Deterministic: identical inputs, identical output.
        assert_eq!(prompt, small_talk(&history(), "hey there"));
    }

    #[test]
    fn failure_prompt_embeds_the_error() {
        let prompt = weather_failure("weather in Atlantis", "city not found");
        assert!(prompt.contains("Weather lookup failed with error: city not found"));
        assert!(prompt.contains("What's the weather in London?"));
    }

    #[test]
    fn report_prompt_embeds_snapshot_json() {
        let snapshot = WeatherSnapshot {
            city: "London".into(),
            country: Some("GB".into()),
            description: Some("Light rain".into()),
            temperature_c: Some(14.2),
            feels_like_c: Some(13.0),
            humidity_percent: Some(87.0),
            wind_speed_mps: Some(4.6),
            unix_time: Some(1_700_000_000),
        };
        let prompt = weather_report(&history(), "weather in London", &snapshot);
        assert!(prompt.contains(r#""city":"London""#));
        assert!(prompt.contains("under 100 words"));
    }
}
