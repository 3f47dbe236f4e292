use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error("HTTP client could not be built: {source}")]
    Client {
        #[source]
        source: reqwest::Error
    },
    #[error("Prediction request to [{endpoint}] failed: {source}")]
    Network {
        endpoint: String,
        #[source]
        source: reqwest::Error
    },
    #[error("Prediction response from [{endpoint}] could not be decoded: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error
    }
}

impl PredictionError {
    pub fn client(source: reqwest::Error) -> Self {
        Self::Client { source }
    }

    pub fn network(endpoint: &str, source: reqwest::Error) -> Self {
        Self::Network { endpoint: endpoint.to_string(), source }
    }

    pub fn decode(endpoint: &str, source: serde_json::Error) -> Self {
        Self::Decode { endpoint: endpoint.to_string(), source }
    }
}
