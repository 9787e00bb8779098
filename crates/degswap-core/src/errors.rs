//! Error values returned by every fallible degswap operation.
//!
//! Errors carry a stable kebab-case `code` that tests and host bindings match
//! on, a message for humans, and string context such as positions, sizes or
//! offending values.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payload shared by all [`SwapError`] families.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable code, e.g. `duplicate-edge`.
    pub code: String,
    /// Description of what went wrong.
    pub message: String,
    /// Sorted key/value details.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// How the caller might fix the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Starts a payload with no context and no hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records one detail; a repeated key keeps the last value.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Display) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Attaches a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        let mut details = self.context.iter();
        if let Some((key, value)) = details.next() {
            write!(f, " ({key}={value}")?;
            for (key, value) in details {
                write!(f, ", {key}={value}")?;
            }
            f.write_str(")")?;
        }
        match &self.hint {
            Some(hint) => write!(f, "; hint: {hint}"),
            None => Ok(()),
        }
    }
}

/// Failure of a swap chain or of one of its inputs.
///
/// The family says which input was at fault. All checks that can be done up
/// front run before the first step, so an error never leaves a half-mutated
/// edge list behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum SwapError {
    /// Edge lists, forbidden pairs or chain parameters.
    #[error("invalid input {0}")]
    Input(ErrorInfo),
    /// Weight matrix shape, values or acceptance ratios.
    #[error("invalid weights {0}")]
    Weights(ErrorInfo),
    /// Seeds and entropy.
    #[error("randomness failure {0}")]
    Rng(ErrorInfo),
    /// JSON, YAML and artefact files.
    #[error("serialization failure {0}")]
    Serde(ErrorInfo),
}

impl SwapError {
    /// Payload of any family.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            SwapError::Input(info)
            | SwapError::Weights(info)
            | SwapError::Rng(info)
            | SwapError::Serde(info) => info,
        }
    }

    /// The stable error code.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Family name as it appears in serialized errors.
    pub fn family(&self) -> &'static str {
        match self {
            SwapError::Input(_) => "Input",
            SwapError::Weights(_) => "Weights",
            SwapError::Rng(_) => "Rng",
            SwapError::Serde(_) => "Serde",
        }
    }
}
