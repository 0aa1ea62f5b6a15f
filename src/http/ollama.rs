/// reqwest-backed client for the Ollama HTTP API.
use crate::error::{ConfigError, DiscoveryError, ProbeError};
use crate::http::client::{BenchClient, ClientConfig, GenerationStats, ModelInfo};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Client for the `/api/tags` and `/api/generate` endpoints.
pub struct OllamaClient {
    client: Client,
    config: ClientConfig,
}

/// Payload for the generation endpoint. `stream` is always false so the
/// whole response body arrives at once.
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    done: bool,
    eval_count: Option<u64>,
    eval_duration: Option<u64>,
    total_duration: Option<u64>,
}

impl OllamaClient {
    /// Create a new Ollama client. Timeouts are applied per request because
    /// discovery and generation run under different budgets.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn tags_url(&self, address: &str) -> String {
        format!("http://{}:{}/api/tags", address, self.config.port)
    }

    fn generate_url(&self, address: &str) -> String {
        format!("http://{}:{}/api/generate", address, self.config.port)
    }
}

fn discovery_transport_error(err: reqwest::Error, timeout: Duration) -> DiscoveryError {
    if err.is_timeout() {
        DiscoveryError::Timeout {
            seconds: timeout.as_secs_f64(),
        }
    } else if err.is_connect() {
        DiscoveryError::ConnectionRefused(err.to_string())
    } else {
        DiscoveryError::InvalidResponse(err.to_string())
    }
}

fn probe_transport_error(err: reqwest::Error, timeout: Duration) -> ProbeError {
    if err.is_timeout() {
        ProbeError::Timeout {
            seconds: timeout.as_secs_f64(),
        }
    } else if err.is_connect() {
        ProbeError::ConnectionRefused(err.to_string())
    } else {
        ProbeError::InvalidResponse(err.to_string())
    }
}

#[async_trait::async_trait]
impl BenchClient for OllamaClient {
    async fn list_models(&self, address: &str) -> Result<Vec<ModelInfo>, DiscoveryError> {
        let timeout = self.config.discovery_timeout();

        let response = self
            .client
            .get(self.tags_url(address))
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| discovery_transport_error(e, timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DiscoveryError::InvalidResponse(format!("HTTP {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| discovery_transport_error(e, timeout))?;
        let tags: TagsResponse = serde_json::from_str(&body)
            .map_err(|e| DiscoveryError::InvalidResponse(e.to_string()))?;

        Ok(tags.models)
    }

    async fn generate(&self, address: &str, model: &str) -> Result<GenerationStats, ProbeError> {
        let timeout = self.config.timeout;
        let request = GenerateRequest {
            model,
            prompt: &self.config.prompt,
            stream: false,
        };

        let response = self
            .client
            .post(self.generate_url(address))
            .timeout(timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| probe_transport_error(e, timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProbeError::ServerError(format!("HTTP {}", status)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| probe_transport_error(e, timeout))?;
        let reply: GenerateResponse = serde_json::from_str(&body)
            .map_err(|e| ProbeError::InvalidResponse(e.to_string()))?;

        if !reply.done {
            return Err(ProbeError::InvalidResponse(
                "generation did not report done".into(),
            ));
        }

        match (reply.eval_count, reply.eval_duration, reply.total_duration) {
            (Some(eval_count), Some(eval_duration_ns), Some(total_duration_ns)) => {
                Ok(GenerationStats {
                    eval_count,
                    eval_duration_ns,
                    total_duration_ns,
                })
            }
            _ => Err(ProbeError::InvalidResponse("missing eval metrics".into())),
        }
    }
}
