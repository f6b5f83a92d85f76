//! HTTP service for submitting an image to the classification backend.

use gloo_net::http::Request;
use web_sys::FormData;

use crate::config::PREDICT_PATH;
use crate::types::{AppError, AppResult, PredictResponse};

/// Submit a form snapshot to the predict endpoint and parse the response.
///
/// The form data must carry the selected image under the `file` field.
/// A non-success HTTP status maps to [`AppError::RequestFailed`]; every
/// other failure (request build, network, JSON parse) maps to
/// [`AppError::Unexpected`] with the underlying message.
pub async fn classify_image(form_data: FormData, backend_url: &str) -> AppResult<PredictResponse> {
    let url = format!("{}{}", backend_url, PREDICT_PATH);

    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| AppError::Unexpected(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Unexpected(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        log::warn!("Predict endpoint returned status {}", response.status());
        return Err(AppError::RequestFailed);
    }

    response
        .json::<PredictResponse>()
        .await
        .map_err(|e| AppError::Unexpected(format!("Failed to parse response: {}", e)))
}

#[cfg(test)]
mod tests {
    use crate::types::PredictResponse;

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "predictions": [
                { "class": "cat", "confidence": 0.9567 },
                { "class": "tiger", "confidence": 0.0210 },
                { "class": "lion", "confidence": 0.0098 }
            ]
        }"#;

        let response: PredictResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.predictions.len(), 3);
        assert_eq!(response.predictions[0].class, "cat");
        assert!((response.predictions[0].confidence - 0.9567).abs() < f64::EPSILON);
        assert_eq!(response.predictions[2].class, "lion");
    }

    #[test]
    fn test_response_deserialization_empty() {
        let response: PredictResponse = serde_json::from_str(r#"{"predictions":[]}"#).unwrap();
        assert!(response.predictions.is_empty());
    }

    #[test]
    fn test_response_rejects_missing_predictions() {
        let result: Result<PredictResponse, _> = serde_json::from_str(r#"{"results":[]}"#);
        assert!(result.is_err());
    }
}
