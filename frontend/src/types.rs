//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **API Types** - Backend response structures
//! - **Submission Types** - Lifecycle of one classify request
//! - **Render Types** - DOM-free render instructions for results
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// API Response Types
// =============================================================================

/// A single classification result from the backend.
///
/// Confidence is a probability in `[0, 1]`. The backend returns
/// predictions already ranked; the client never re-sorts them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted class label
    pub class: String,
    /// Model confidence for that class
    pub confidence: f64,
}

/// Response from the backend predict endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    /// Ranked predictions, best first
    pub predictions: Vec<Prediction>,
}

// =============================================================================
// Submission Types
// =============================================================================

/// Lifecycle of a single classify submission.
///
/// Transitions: `Idle -> InFlight` on submit, `InFlight -> Succeeded` on a
/// parsed success response, `InFlight -> Failed` on a non-success status or
/// any thrown error, and `Succeeded`/`Failed -> InFlight` on the next submit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Nothing submitted yet (or page freshly loaded)
    #[default]
    Idle,
    /// Request issued, response pending
    InFlight,
    /// Response parsed and rendered
    Succeeded,
    /// Request failed, error rendered
    Failed,
}

impl SubmissionState {
    /// Whether the busy spinner should be shown.
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmissionState::InFlight)
    }
}

// =============================================================================
// Render Types
// =============================================================================

/// One rendered result line, as a label/value pair.
///
/// Keeps formatting independent of the DOM: components only interpolate
/// these, they never format confidences themselves.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultLine {
    /// Class label, as received
    pub label: String,
    /// Pre-formatted percentage, e.g. `"95.67%"`
    pub value: String,
}

impl ResultLine {
    /// Full line text, e.g. `"cat: 95.67%"`.
    pub fn text(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

/// Format a `[0, 1]` confidence as a percentage with two decimals.
pub fn format_confidence(confidence: f64) -> String {
    format!("{:.2}%", confidence * 100.0)
}

/// Map backend predictions to render instructions, preserving order.
pub fn prediction_lines(predictions: &[Prediction]) -> Vec<ResultLine> {
    predictions
        .iter()
        .map(|pred| ResultLine {
            label: pred.class.clone(),
            value: format_confidence(pred.confidence),
        })
        .collect()
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Only two kinds exist: a non-success HTTP status, surfaced with a fixed
/// retry message, and everything else (network unreachable, malformed JSON,
/// form snapshot failures), surfaced with the underlying message.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Backend answered with a non-success HTTP status.
    RequestFailed,
    /// Anything thrown along the way.
    Unexpected(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::RequestFailed => {
                write!(f, "Failed to classify the image. Please try again.")
            }
            AppError::Unexpected(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_formatting() {
        assert_eq!(format_confidence(0.9567), "95.67%");
        assert_eq!(format_confidence(0.0), "0.00%");
        assert_eq!(format_confidence(1.0), "100.00%");
        assert_eq!(format_confidence(0.5), "50.00%");
    }

    #[test]
    fn test_prediction_lines_preserve_order_and_count() {
        let predictions = vec![
            Prediction {
                class: "cat".to_string(),
                confidence: 0.9567,
            },
            Prediction {
                class: "tiger".to_string(),
                confidence: 0.03,
            },
            Prediction {
                class: "lion".to_string(),
                confidence: 0.0133,
            },
        ];

        let lines = prediction_lines(&predictions);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text(), "cat: 95.67%");
        assert_eq!(lines[1].text(), "tiger: 3.00%");
        assert_eq!(lines[2].text(), "lion: 1.33%");
    }

    #[test]
    fn test_prediction_lines_empty() {
        assert!(prediction_lines(&[]).is_empty());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            AppError::RequestFailed.to_string(),
            "Failed to classify the image. Please try again."
        );
        assert_eq!(
            AppError::Unexpected("connection refused".to_string()).to_string(),
            "connection refused"
        );
    }

    #[test]
    fn test_submission_state() {
        assert_eq!(SubmissionState::default(), SubmissionState::Idle);
        assert!(SubmissionState::InFlight.is_busy());
        assert!(!SubmissionState::Idle.is_busy());
        assert!(!SubmissionState::Succeeded.is_busy());
        assert!(!SubmissionState::Failed.is_busy());
    }
}
