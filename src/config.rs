//! Runtime Configuration
//!
//! The service base URL and the log level, resolved once at startup.

use task_sync::ApiConfig;
use tracing::Level;

use crate::browser;

/// `<meta name="tarefas-api-url" content="...">` in the host page wins over
/// the value baked in at build time
pub const API_URL_META: &str = "tarefas-api-url";

pub fn api_config() -> ApiConfig {
    ApiConfig::from_sources([
        browser::meta_content(API_URL_META),
        option_env!("TAREFAS_API_URL").map(str::to_string),
    ])
}

/// `TAREFAS_LOG` at build time, else debug for dev builds and info for release
pub fn log_level() -> Level {
    parse_level(option_env!("TAREFAS_LOG"))
}

fn parse_level(raw: Option<&str>) -> Level {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_names() {
        assert_eq!(parse_level(Some("warn")), Level::WARN);
        assert_eq!(parse_level(Some(" ERROR ")), Level::ERROR);
        assert_eq!(parse_level(Some("trace")), Level::TRACE);
    }

    #[test]
    fn test_parse_level_falls_back() {
        let fallback = if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO };
        assert_eq!(parse_level(None), fallback);
        assert_eq!(parse_level(Some("loud")), fallback);
    }
}
