use serde::Deserialize;

/// Output format of the logging pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggerFormat {
    /// Human-readable single-line output.
    #[default]
    Text,
    /// Structured JSON, one event per line.
    Json,
    /// Direct journald transport (Linux only, `journald` feature).
    Journald,
}
