use serde::Serialize;
use std::collections::BTreeMap;

/// Row counts reported back to the caller
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Metrics {
    pub records_in: usize,
    pub records_out: usize,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// The status envelope written back to the platform
///
/// `error` names the failure kind (`Invalid Inputs`, `Invalid Parameters`,
/// `Invalid Mode`, `Missing Column`) or carries the failure detail for
/// unexpected errors; it is absent on success.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Response {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metrics: Option<Metrics>,
    pub status: Status,
}

impl Response {
    pub fn success(output: BTreeMap<String, String>, metrics: Metrics) -> Self {
        Self {
            message: "Tool executed successfully!".to_string(),
            error: None,
            output: Some(output),
            metrics: Some(metrics),
            status: Status::Success,
        }
    }

    /// Success envelope for a pesticide run with zero matches: nothing is
    /// uploaded, the output map stays empty
    pub fn no_matches(records_in: usize) -> Self {
        Self {
            message: "No matching products found.".to_string(),
            error: None,
            output: Some(BTreeMap::new()),
            metrics: Some(Metrics {
                records_in,
                records_out: 0,
            }),
            status: Status::Success,
        }
    }

    fn error_kind(kind: &str, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: Some(kind.to_string()),
            output: None,
            metrics: None,
            status: Status::Error,
        }
    }

    pub fn invalid_inputs(message: impl Into<String>) -> Self {
        Self::error_kind("Invalid Inputs", message)
    }

    pub fn invalid_parameters(message: impl Into<String>) -> Self {
        Self::error_kind("Invalid Parameters", message)
    }

    pub fn invalid_mode(message: impl Into<String>) -> Self {
        Self::error_kind("Invalid Mode", message)
    }

    pub fn missing_column(message: impl Into<String>) -> Self {
        Self::error_kind("Missing Column", message)
    }

    /// Catch-all for unexpected failures; the detail lands in `error`
    pub fn failure(detail: impl std::fmt::Display) -> Self {
        Self {
            message: "An error occurred during matching.".to_string(),
            error: Some(detail.to_string()),
            output: None,
            metrics: None,
            status: Status::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_serialization_shape() {
        let response = Response::success(
            BTreeMap::from([("matched_fertilizers".to_string(), "out.csv".to_string())]),
            Metrics {
                records_in: 3,
                records_out: 3,
            },
        );
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["output"]["matched_fertilizers"], "out.csv");
        assert_eq!(json["metrics"]["records_in"], 3);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_error_serialization_shape() {
        let response = Response::invalid_mode("Include 'mode' in parameters.");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"], "Invalid Mode");
        assert!(json.get("output").is_none());
        assert!(json.get("metrics").is_none());
    }

    #[test]
    fn test_no_matches_keeps_empty_output_map() {
        let json = serde_json::to_value(Response::no_matches(5)).unwrap();
        assert_eq!(json["status"], "success");
        assert_eq!(json["output"], serde_json::json!({}));
        assert_eq!(json["metrics"]["records_out"], 0);
    }
}
