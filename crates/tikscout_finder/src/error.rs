use std::fmt;

use thiserror::Error;
use tracing::warn;

use crate::config::FailurePolicy;
use crate::source::FetchFailure;
use crate::stats::RunStats;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Search,
    Videos,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Search => write!(f, "user search"),
            Operation::Videos => write!(f, "video list"),
        }
    }
}

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("{operation} failed for '{subject}': {source}")]
    Fetch {
        operation: Operation,
        subject: String,
        source: FetchFailure,
    },
    #[error("invalid delay range {min}..={max} seconds")]
    InvalidDelay { min: f64, max: f64 },
}

impl FailurePolicy {
    /// Applies the policy to one source call; `subject` is the keyword or secUid.
    pub(crate) fn absorb<T>(
        self,
        result: Result<Vec<T>, FetchFailure>,
        operation: Operation,
        subject: &str,
        stats: &mut RunStats,
    ) -> Result<Vec<T>, FinderError> {
        let failure = match result {
            Ok(records) => return Ok(records),
            Err(failure) => failure,
        };

        stats.record_failure(&failure);

        match self {
            FailurePolicy::Degrade => {
                warn!(%operation, subject, error = %failure, "call failed, treating as empty");
                Ok(Vec::new())
            }
            FailurePolicy::Strict => Err(FinderError::Fetch {
                operation,
                subject: subject.to_string(),
                source: failure,
            }),
        }
    }
}
