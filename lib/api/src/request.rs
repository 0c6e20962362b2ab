use agromatch_storage::StoreConfig;
use serde::Deserialize;

/// The request document handed to the tool by the platform
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    /// Object store connection settings
    #[serde(default)]
    pub minio: StoreConfig,
    #[serde(default)]
    pub input: Inputs,
    pub output: Outputs,
    #[serde(default)]
    pub parameters: Parameters,
}

/// Remote paths of the uploaded datasets
///
/// Each key carries a list of paths; only the first entry of each is used.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Inputs {
    #[serde(default)]
    pub npk_values: Vec<String>,
    #[serde(default)]
    pub fertilizer_dataset: Vec<String>,
    #[serde(default)]
    pub pesticides_dataset: Vec<String>,
    #[serde(default)]
    pub active_substances: Vec<String>,
}

/// Remote paths the results are written to
#[derive(Debug, Clone, Deserialize)]
pub struct Outputs {
    pub matched_products: String,
}

/// Operating mode and language tags
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Parameters {
    pub mode: Option<String>,
    pub input_language: Option<String>,
    pub db_language: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_request_parses() {
        let request: Request = serde_json::from_str(
            r#"{
                "minio": {"endpoint_url": "https://store.example.com", "id": "a", "key": "b", "skey": "c"},
                "input": {"npk_values": ["in/npk.csv"], "fertilizer_dataset": ["in/fert.csv"]},
                "output": {"matched_products": "out/matched.csv"},
                "parameters": {"mode": "fertilizers"}
            }"#,
        )
        .unwrap();
        assert_eq!(request.input.npk_values, vec!["in/npk.csv"]);
        assert_eq!(request.output.matched_products, "out/matched.csv");
        assert_eq!(request.parameters.mode.as_deref(), Some("fertilizers"));
        assert_eq!(request.minio.session_token.as_deref(), Some("c"));
    }

    #[test]
    fn test_sparse_request_defaults() {
        let request: Request =
            serde_json::from_str(r#"{"output": {"matched_products": "out.csv"}}"#).unwrap();
        assert!(request.input.npk_values.is_empty());
        assert!(request.parameters.mode.is_none());
        assert!(request.minio.endpoint_url.is_none());
    }
}
