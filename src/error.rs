//! Error types for consumers and configuration.
//!
//! Pure abstractions (mappers, predicates, producers, binary operators)
//! cannot fail on their own. Consumers exist for their side effects, so
//! their failures are reported through [`ConsumeError`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a [`Consumer`](crate::function::Consumer).
///
/// # Examples
///
/// ```rust
/// use funcops::error::ConsumeError;
///
/// let error = ConsumeError::Step {
///     step: 1,
///     source: Box::new(ConsumeError::Rejected("empty input".to_string())),
/// };
/// assert_eq!(error.to_string(), "consumer step 1 failed");
/// assert_eq!(error.failed_step(), Some(1));
/// ```
#[derive(Debug, Error)]
pub enum ConsumeError {
    /// Appending to a file failed.
    #[error("failed to append to {}", .path.display())]
    Append {
        /// The file that was being appended to.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// Writing a line to an output stream failed.
    #[error("failed to write output line")]
    Write(#[source] io::Error),

    /// The consumer refused the value.
    #[error("value rejected: {0}")]
    Rejected(String),

    /// A step of a composed consumer chain failed.
    ///
    /// `step` is the zero-based position of the failing consumer in the
    /// flattened chain.
    #[error("consumer step {step} failed")]
    Step {
        /// Position of the failing consumer.
        step: usize,
        /// The error raised by that consumer.
        #[source]
        source: Box<ConsumeError>,
    },
}

impl ConsumeError {
    /// Returns the failing step if this error came from a consumer chain.
    #[must_use]
    pub const fn failed_step(&self) -> Option<usize> {
        match self {
            Self::Step { step, .. } => Some(*step),
            _ => None,
        }
    }

    /// Strips the chain position and returns the error of the failing step.
    #[must_use]
    pub fn into_step_source(self) -> Self {
        match self {
            Self::Step { source, .. } => *source,
            other => other,
        }
    }
}

/// Errors raised while loading [`DemoConfig`](crate::config::DemoConfig).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The variable is set but holds an empty string.
    #[error("environment variable {0} is set but empty")]
    Empty(String),

    /// The variable is set but is not valid Unicode.
    #[error("environment variable {0} is not valid Unicode")]
    NotUnicode(String),
}
