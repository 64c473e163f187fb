use thiserror::Error;

/// An error occurred while validating the options passed to `setup`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The options were not given as a key/value mapping.
    #[error("Invalid options: expected a mapping of keys to values")]
    NotAMapping,
    /// A required key is absent from the options.
    #[error("Invalid options: missing required key {0:?}")]
    MissingKey(String),
    /// A key is present but holds a value of the wrong kind.
    #[error("Invalid options: key {key:?} must be {expected}")]
    WrongKind { key: String, expected: &'static str },
    /// A key holds a value outside of what the algorithm accepts.
    #[error("Invalid options: {key} = {value}: {reason}")]
    OutOfRange {
        key: String,
        value: String,
        reason: &'static str,
    },
    /// The number of arguments cannot be laid out as a square matrix.
    #[error("n_arg must be a perfect square (got n_arg = {0})")]
    NotSquare(usize),
    /// The wrapped function object has no output to differentiate.
    #[error("Invalid options: the wrapped function object has no outputs")]
    NoOutputs,
}

/// Errors returned by function objects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `setup` rejected its options.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    /// A method other than `setup` was called before a successful `setup`.
    #[error("Function object used before a successful setup")]
    NotInitialized,
    /// `call` was given an argument vector of the wrong length.
    #[error("Dimension mismatch: expected an argument of length {expected}, got {actual}")]
    Dimension { expected: usize, actual: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Checks the length of an argument vector against the domain of a function object.
pub fn check_dimension(expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::Dimension { expected, actual })
    }
}
