//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::exitcode;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Usage(String),

    #[error("node lists differ")]
    NotEqual,
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

impl From<DomainError> for CliError {
    fn from(e: DomainError) -> Self {
        CliError::from(ApplicationError::Domain(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => exitcode::USAGE,
            CliError::NotEqual => exitcode::NOT_EQUAL,
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => exitcode::IOERR,
                InfraError::Json { .. } => exitcode::SOFTWARE,
                InfraError::TooDeep { .. } => exitcode::DATAERR,
                InfraError::Application(app) => match app {
                    ApplicationError::Domain(_) | ApplicationError::InvalidInput { .. } => {
                        exitcode::DATAERR
                    }
                    ApplicationError::Config { .. } => exitcode::CONFIG,
                    ApplicationError::OperationFailed { source, .. } => {
                        match source.downcast_ref::<std::io::Error>() {
                            Some(io) if io.kind() == std::io::ErrorKind::NotFound => {
                                exitcode::NOINPUT
                            }
                            _ => exitcode::IOERR,
                        }
                    }
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Malformation;

    #[test]
    fn given_malformed_input_when_mapping_then_dataerr() {
        let err = CliError::from(DomainError::MalformedInput(vec![Malformation::MissingRoot]));
        assert_eq!(err.exit_code(), exitcode::DATAERR);
    }

    #[test]
    fn given_missing_file_when_mapping_then_noinput() {
        let err = CliError::from(ApplicationError::OperationFailed {
            context: "read input: nope.json".into(),
            source: Box::new(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
        });
        assert_eq!(err.exit_code(), exitcode::NOINPUT);
    }

    #[test]
    fn given_tree_too_deep_to_render_when_mapping_then_dataerr() {
        let err = CliError::from(InfraError::TooDeep {
            depth: 61,
            limit: 60,
        });
        assert_eq!(err.exit_code(), exitcode::DATAERR);
    }

    #[test]
    fn given_config_error_when_mapping_then_config() {
        let err = CliError::from(ApplicationError::Config {
            message: "bad".into(),
        });
        assert_eq!(err.exit_code(), exitcode::CONFIG);
        assert_eq!(CliError::NotEqual.exit_code(), 1);
    }
}
