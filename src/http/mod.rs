/// HTTP transport for Ollama-compatible hosts.
pub mod client;
pub mod ollama;
