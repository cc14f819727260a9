//! Error type shared across the crate.
//!
//! Only fatal problems surface as `CliParseError`: schema mistakes caught
//! before any token is examined, range violations in the text wrapper, and
//! unbalanced quoting in the command-line splitter. Recoverable parse
//! problems (missing required argument, unknown argument, bad value) are
//! accumulated as messages on `ParseResult` instead.

#[derive(Debug, thiserror::Error)]
pub enum CliParseError {
    #[error("no arguments are declared for this target")]
    EmptySchema,

    #[error("argument '{0}' is required and cannot also declare a default value")]
    RequiredWithDefault(String),

    #[error("default value for argument '{0}' does not match its field type")]
    DefaultTypeMismatch(String),

    #[error("maximum line length must be greater than 1, got {0}")]
    LineLength(usize),

    #[error("unbalanced quoting in command line")]
    UnbalancedQuote,
}

pub type Result<T> = std::result::Result<T, CliParseError>;
