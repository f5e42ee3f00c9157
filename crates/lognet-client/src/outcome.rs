//! Call outcome classification.
//!
//! Every response classifies by status code alone: `[200, 300)` is
//! success, anything else is a failure carrying the full response details
//! for the caller to inspect.

use reqwest::StatusCode;

use crate::error::Result;

/// Details of a response that did not classify as success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureResponse {
    /// HTTP status code of the response.
    pub status: StatusCode,
    /// Raw response body.
    pub body: String,
}

/// Classification of a service response.
///
/// Callers that only care about success/failure can use
/// [`Outcome::is_success`]; callers that need diagnostics pattern-match on
/// `Failure`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The response status was in `[200, 300)`.
    Success,
    /// Any other status, with the response for inspection.
    Failure(FailureResponse),
}

impl Outcome {
    /// Classifies a status code and body pair.
    #[must_use]
    pub fn from_status(status: StatusCode, body: String) -> Self {
        if status.is_success() {
            Self::Success
        } else {
            Self::Failure(FailureResponse { status, body })
        }
    }

    /// Classifies a response, consuming its body on failure.
    ///
    /// # Errors
    ///
    /// Returns an error if reading the failure body off the wire fails.
    pub async fn classify(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        if status.is_success() {
            return Ok(Self::Success);
        }
        let body = response.text().await?;
        Ok(Self::Failure(FailureResponse { status, body }))
    }

    /// Whether the response classified as success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// The failure details, if any.
    #[must_use]
    pub const fn failure(&self) -> Option<&FailureResponse> {
        match self {
            Self::Success => None,
            Self::Failure(response) => Some(response),
        }
    }
}
