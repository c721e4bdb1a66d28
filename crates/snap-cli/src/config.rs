//! CLI configuration.

use snap_ai_client::GeminiConfig;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Front-end configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub log_format: LogFormat,
    pub gemini: GeminiConfig,
    /// Background colour the console host reports as its theme
    pub theme_background: Option<String>,
    /// Behave as if running outside the host platform (handoff unavailable)
    pub standalone: bool,
}

impl CliConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        Self {
            log_format: std::env::var("LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or(LogFormat::Pretty),
            gemini: GeminiConfig::from_env(),
            theme_background: std::env::var("SNAPMEDIA_THEME_BG")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            standalone: std::env::var("SNAPMEDIA_STANDALONE")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" JSON "), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse(""), LogFormat::Pretty);
    }
}
