//! Error types for `linkerd_doc`.

use thiserror::Error;

/// Raised when a command's metadata cannot be turned into a documentation
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    /// The same option name appears twice in one option list.
    #[error("command '{command}' declares option '--{option}' more than once")]
    DuplicateOption {
        /// Full path of the offending command.
        command: String,
        /// Name of the repeated option.
        option: String,
    },

    /// A subcommand was registered without a name.
    #[error("command '{parent}' has a subcommand with an empty name")]
    EmptyName {
        /// Full path of the command owning the unnamed subcommand.
        parent: String,
    },
}

/// Errors surfaced by the documentation pipeline.
#[derive(Debug, Error)]
pub enum DocError {
    /// Walking the command hierarchy failed.
    #[error("failed to extract CLI documentation: {0}")]
    Extraction(#[from] ExtractionError),

    /// The reference document could not be encoded as YAML.
    #[error("failed to serialize reference document: {0}")]
    Serialization(#[from] serde_yaml::Error),

    /// Writing the rendered document failed.
    #[error("failed to write reference document: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded from the environment.
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Box<figment::Error>),

    /// The log filter or subscriber could not be installed.
    #[error("failed to initialise logging: {0}")]
    Logging(String),

    /// A declared subcommand has no handler in this binary.
    #[error("command '{0}' has no handler in this binary")]
    NoHandler(String),
}

impl From<figment::Error> for DocError {
    fn from(err: figment::Error) -> Self {
        Self::Configuration(Box::new(err))
    }
}
