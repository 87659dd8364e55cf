//! CLI error type.

use std::fmt;

use assetbind::config::ConfigError;
use assetbind::emit::EmitError;
use assetbind::logging::LoggingError;
use assetbind::redistribute::RedistributeError;

/// Errors surfaced to the user by the CLI.
#[derive(Debug)]
pub enum CliError {
    /// Configuration could not be loaded or is incomplete.
    Config(String),
    /// Logging could not be initialized.
    Logging(String),
    /// Generating a bindings file failed.
    Generate(EmitError),
    /// The redistribution run could not start.
    Redistribute(RedistributeError),
    /// Some archives were rejected.
    ArchivesFailed(usize),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::Logging(msg) => write!(f, "Logging error: {}", msg),
            CliError::Generate(e) => write!(f, "Generation failed: {}", e),
            CliError::Redistribute(e) => write!(f, "Redistribution failed: {}", e),
            CliError::ArchivesFailed(count) => {
                let noun = if *count == 1 { "archive" } else { "archives" };
                write!(f, "{} {} could not be redistributed", count, noun)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Generate(e) => Some(e),
            CliError::Redistribute(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<LoggingError> for CliError {
    fn from(e: LoggingError) -> Self {
        CliError::Logging(e.to_string())
    }
}

impl From<EmitError> for CliError {
    fn from(e: EmitError) -> Self {
        CliError::Generate(e)
    }
}

impl From<RedistributeError> for CliError {
    fn from(e: RedistributeError) -> Self {
        CliError::Redistribute(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_conversion() {
        let err: CliError = ConfigError::UnknownCategory("sounds".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: unknown asset category: sounds"
        );
    }

    #[test]
    fn test_archives_failed_plural() {
        assert_eq!(
            CliError::ArchivesFailed(1).to_string(),
            "1 archive could not be redistributed"
        );
        assert_eq!(
            CliError::ArchivesFailed(3).to_string(),
            "3 archives could not be redistributed"
        );
    }

    #[test]
    fn test_redistribute_error_has_source() {
        use std::error::Error;

        let err: CliError = RedistributeError::MalformedName("x".to_string()).into();
        assert!(err.source().is_some());
    }
}
