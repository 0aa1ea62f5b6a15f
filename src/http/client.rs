/// HTTP client abstraction for Ollama-compatible hosts.
use crate::error::{DiscoveryError, ProbeError};
use serde::Deserialize;
use std::time::Duration;

/// One model advertised by a host's tag listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelInfo {
    /// Model name as returned by the host, tag suffix included
    pub name: String,
}

/// Generation metrics reported by a host for one completed request.
#[derive(Debug, Clone, Copy)]
pub struct GenerationStats {
    /// Number of tokens generated
    pub eval_count: u64,
    /// Time spent generating, in nanoseconds
    pub eval_duration_ns: u64,
    /// End-to-end processing time, in nanoseconds
    pub total_duration_ns: u64,
}

/// Trait for benchmark transports.
#[async_trait::async_trait]
pub trait BenchClient: Send + Sync {
    /// List the models available on `address`.
    async fn list_models(&self, address: &str) -> Result<Vec<ModelInfo>, DiscoveryError>;

    /// Run one non-streaming generation and return the reported metrics.
    async fn generate(&self, address: &str, model: &str) -> Result<GenerationStats, ProbeError>;
}

/// Transport configuration shared by both endpoints.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Port the Ollama API listens on
    pub port: u16,
    /// Full per-request timeout for generation
    pub timeout: Duration,
    /// Prompt sent to every host
    pub prompt: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            port: 11434,
            timeout: Duration::from_secs(30),
            prompt: "Why is the sky blue?".to_string(),
        }
    }
}

impl ClientConfig {
    /// Discovery gets a third of the configured timeout; the generation
    /// request keeps the full budget.
    pub fn discovery_timeout(&self) -> Duration {
        self.timeout / 3
    }
}
