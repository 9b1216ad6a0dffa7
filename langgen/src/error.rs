//! All error types for the langgen crate.
//!
//! [`Error`] is returned from every fallible operation (loading, validation,
//! writing). Catalog invariant violations are described by [`ValidationError`],
//! which always names the offending entry key together with the language,
//! argument, or type involved.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unknown format `{0}`")]
    UnknownFormat(String),

    #[error("{format} parse error: {message}")]
    Parse { format: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Creates a new parse error for the given catalog format.
    pub fn parse_error(format: impl ToString, message: impl ToString) -> Self {
        Error::Parse {
            format: format.to_string(),
            message: message.to_string(),
        }
    }
}

/// The first catalog invariant found violated.
///
/// Validation is fail-fast, so a run reports exactly one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("the catalog does not declare any languages")]
    NoLanguages,

    #[error("\"{language}\" is not a valid language code")]
    InvalidLanguage { language: String },

    #[error("language \"{language}\" is declared more than once")]
    DuplicateLanguage { language: String },

    #[error("key \"{key}\" is used by more than one item")]
    DuplicateKey { key: String },

    #[error("item which has a key \"{key}\" does not have localization for \"{language}\"")]
    MissingLocalization { key: String, language: String },

    #[error("item which has a key \"{key}\" has unnecessary localization for \"{language}\"")]
    UnnecessaryLocalization { key: String, language: String },

    #[error(
        "key \"{key}\" is not a valid identifier path (dot-separated segments of letters, digits and `_`, not starting with a digit)"
    )]
    InvalidKey { key: String },

    #[error("argument name \"{argument}\" in key \"{key}\" is not a valid identifier")]
    InvalidArgumentName { key: String, argument: String },

    #[error("argument \"{argument}\" is declared more than once in key \"{key}\"")]
    DuplicateArgument { key: String, argument: String },

    #[error(
        "type of an argument named \"{argument}\" in key \"{key}\" is not supported: \"{argument_type}\""
    )]
    UnsupportedArgumentType {
        key: String,
        argument: String,
        argument_type: String,
    },

    #[error(
        "item which has a key \"{key}\" includes undefined argument named \"{name}\" in \"{language}\""
    )]
    UndefinedPlaceholderReference {
        key: String,
        language: String,
        name: String,
    },

    #[error(
        "accessor generated for key \"{key}\" has the same Swift name as the one generated for \"{other}\""
    )]
    AccessorNameCollision { key: String, other: String },
}
