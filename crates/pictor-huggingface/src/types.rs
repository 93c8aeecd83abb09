// SPDX-FileCopyrightText: 2026 Pictor Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types for the Hugging Face inference API.

use serde::{Deserialize, Serialize};

/// JSON body of a generation request.
#[derive(Debug, Serialize)]
pub struct GenerationRequest<'a> {
    pub inputs: &'a str,
}

/// JSON error body, e.g. `{"error": "Model is currently loading"}`.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_inputs_field() {
        let request = GenerationRequest {
            inputs: "a fantasy castle",
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"inputs":"a fantasy castle"}"#);
    }

    #[test]
    fn error_response_deserializes() {
        let parsed: ApiErrorResponse =
            serde_json::from_str(r#"{"error": "Model is currently loading"}"#).unwrap();
        assert_eq!(parsed.error, "Model is currently loading");
    }
}
