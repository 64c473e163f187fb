//! Options given to function objects at setup time.
//!
//! Options are a plain mapping from keys to JSON values, so that every algorithm (and every
//! adapter wrapping one) can share the same configuration surface while picking the keys it
//! cares about. Keys that an algorithm does not know about are kept and ignored.

use crate::error::ConfigurationError;
use derive_more::Deref;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Key/value options passed to [`FunObj::setup`](crate::FunObj::setup).
///
/// # Example
///
/// ```
/// use adbench_core::Options;
///
/// let option = Options::new(9, 0).with("step", 1e-4);
/// assert_eq!(Ok(9), option.get_usize("n_arg"));
/// assert_eq!(Ok(0), option.get_i64("n_other"));
/// assert_eq!(Ok(1e-4), option.get_f64_or("step", 1e-6));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Deref)]
#[serde(transparent)]
pub struct Options(Map<String, Value>);

impl Options {
    /// Options holding the two keys every algorithm requires.
    pub fn new(n_arg: usize, n_other: i64) -> Self {
        Self::default().with("n_arg", n_arg).with("n_other", n_other)
    }

    /// Returns these options with `key` set to `value`, replacing any previous value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Inserts or replaces a single option.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    fn require(&self, key: &str) -> Result<&Value, ConfigurationError> {
        self.0
            .get(key)
            .ok_or_else(|| ConfigurationError::MissingKey(key.to_string()))
    }

    /// Reads a required non-negative integer.
    pub fn get_usize(&self, key: &str) -> Result<usize, ConfigurationError> {
        self.require(key)?
            .as_u64()
            .and_then(|v| usize::try_from(v).ok())
            .ok_or_else(|| ConfigurationError::WrongKind {
                key: key.to_string(),
                expected: "a non-negative integer",
            })
    }

    /// Reads a required signed integer.
    pub fn get_i64(&self, key: &str) -> Result<i64, ConfigurationError> {
        self.require(key)?
            .as_i64()
            .ok_or_else(|| ConfigurationError::WrongKind {
                key: key.to_string(),
                expected: "an integer",
            })
    }

    /// Reads an optional number, falling back to `default` when the key is absent.
    pub fn get_f64_or(&self, key: &str, default: f64) -> Result<f64, ConfigurationError> {
        match self.0.get(key) {
            None => Ok(default),
            Some(value) => value.as_f64().ok_or_else(|| ConfigurationError::WrongKind {
                key: key.to_string(),
                expected: "a number",
            }),
        }
    }
}

impl From<Map<String, Value>> for Options {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Options {
    type Error = ConfigurationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            _ => Err(ConfigurationError::NotAMapping),
        }
    }
}
