use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported OpenAPI version: {0}")]
    UnsupportedVersion(String),
}

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("could not find a unique method name for `{0}` after {1} attempts")]
    NameCollision(String, usize),

    #[error("could not find a unique placeholder field name after {0} attempts")]
    SuffixExhausted(usize),
}
