/// CLI argument parsing and run orchestration.
use crate::error::AppError;
use crate::http::client::ClientConfig;
use crate::http::ollama::OllamaClient;
use crate::output::{self, Summary};
use crate::runner::pool::run_pool;
use crate::sink::ResultSink;
use crate::targets::resolve_targets;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Ollamark - benchmark Ollama hosts over HTTP.
#[derive(Parser, Debug)]
#[command(name = "ollamark")]
#[command(about = "Benchmark response latency and token throughput of Ollama hosts")]
#[command(version)]
pub struct Cli {
    /// Single host address to benchmark
    #[arg(long)]
    pub ip: Option<String>,

    /// File with one host address per line (blank lines ignored)
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Number of hosts probed concurrently
    #[arg(long, default_value = "1")]
    pub threads: usize,

    /// Timeout in seconds for each request
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Port the Ollama API listens on
    #[arg(long, default_value = "11434")]
    pub port: u16,
}

impl Cli {
    /// Execute the benchmark run.
    ///
    /// Per-target failures never surface here: they become error rows and
    /// summary counts, and the run still exits cleanly.
    pub fn run(self) -> Result<(), AppError> {
        let targets = resolve_targets(self.ip.as_deref(), self.file.as_deref())?;

        let config = ClientConfig {
            port: self.port,
            timeout: Duration::from_secs(self.timeout.max(1)),
            ..ClientConfig::default()
        };
        let client = Arc::new(OllamaClient::new(config)?);
        let sink = Arc::new(ResultSink::new());

        eprintln!(
            "\nStarting tests with timeout of {} seconds per request...",
            self.timeout.max(1)
        );
        output::print_header();

        let rt = tokio::runtime::Runtime::new()
            .map_err(|e| AppError::Runtime(format!("Failed to create async runtime: {}", e)))?;

        rt.block_on(async {
            tokio::select! {
                _ = run_pool(client, targets, self.threads, Arc::clone(&sink)) => {}
                _ = tokio::signal::ctrl_c() => {
                    eprintln!("\nInterrupted, abandoning in-flight probes");
                }
            }
        });

        let history = sink.history();
        println!("{}", Summary::from_results(&history));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_surface() {
        let cli = Cli::parse_from(["ollamark", "--ip", "10.0.0.1"]);
        assert_eq!(cli.ip.as_deref(), Some("10.0.0.1"));
        assert_eq!(cli.threads, 1);
        assert_eq!(cli.timeout, 30);
        assert_eq!(cli.port, 11434);
        assert!(cli.file.is_none());
    }

    #[test]
    fn ip_and_file_can_be_combined() {
        let cli = Cli::parse_from([
            "ollamark", "--ip", "10.0.0.1", "--file", "hosts.txt", "--threads", "8",
            "--timeout", "5",
        ]);
        assert_eq!(cli.file.as_deref(), Some(std::path::Path::new("hosts.txt")));
        assert_eq!(cli.threads, 8);
        assert_eq!(cli.timeout, 5);
    }

    #[test]
    fn missing_targets_fail_before_any_probing() {
        let cli = Cli::parse_from(["ollamark"]);
        let err = cli.run().unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
