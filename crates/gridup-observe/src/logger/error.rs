use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("invalid log level: {0}")]
    InvalidLogLevel(String),
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("logger initialization failed: {0}")]
    InitializationFailed(String),
    #[error("journald transport is not supported on this platform")]
    JournaldNotSupported,
}
