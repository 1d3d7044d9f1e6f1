use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("summary request failed: {0}")]
    Request(reqwest::Error),

    #[error("could not decode summary response: {0}")]
    Decode(reqwest::Error),
}

#[derive(Debug, Error)]
pub enum TargetError {
    #[error("display element `{0}` not found")]
    MissingElement(String),

    #[error("chart config could not be serialized: {0}")]
    ChartConfig(#[from] serde_json::Error),
}
