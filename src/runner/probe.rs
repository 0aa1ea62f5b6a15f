/// Per-target probe pipeline: discovery, generation, result assembly.
use crate::error::{DiscoveryError, ProbeError};
use crate::http::client::{BenchClient, ModelInfo};
use crate::targets::Target;
use chrono::{DateTime, Local};

/// Model benchmarked whenever a host has it installed.
pub const PREFERRED_MODEL: &str = "llama3.2";

/// Terminal status of a single target's probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStatus {
    Success,
    Error,
}

/// Outcome of one target's full pipeline. Exactly one is produced per
/// target, whichever stage failed.
#[derive(Debug, Clone)]
pub struct ProbeResult {
    pub target: Target,
    pub model: Option<String>,
    pub status: ProbeStatus,
    pub tokens_per_second: Option<f64>,
    pub total_duration_ns: Option<u64>,
    pub timestamp: DateTime<Local>,
    pub error_detail: Option<String>,
}

impl ProbeResult {
    fn success(target: Target, model: String, tokens_per_second: f64, total_duration_ns: u64) -> Self {
        Self {
            target,
            model: Some(model),
            status: ProbeStatus::Success,
            tokens_per_second: Some(tokens_per_second),
            total_duration_ns: Some(total_duration_ns),
            timestamp: Local::now(),
            error_detail: None,
        }
    }

    fn error(target: Target, detail: String) -> Self {
        Self {
            target,
            model: None,
            status: ProbeStatus::Error,
            tokens_per_second: None,
            total_duration_ns: None,
            timestamp: Local::now(),
            error_detail: Some(detail),
        }
    }
}

fn base_name(name: &str) -> &str {
    name.split(':').next().unwrap_or(name)
}

/// Pick the model to benchmark from a host's tag listing.
///
/// Prefers `llama3.2` when present, otherwise the first model in host
/// order. Tag suffixes (`:latest`, `:7b`) are stripped before comparison
/// and in the returned name.
pub fn select_model(models: &[ModelInfo]) -> Result<String, DiscoveryError> {
    if let Some(preferred) = models
        .iter()
        .find(|m| base_name(&m.name) == PREFERRED_MODEL)
    {
        return Ok(base_name(&preferred.name).to_string());
    }

    match models.first() {
        Some(first) => Ok(base_name(&first.name).to_string()),
        None => Err(DiscoveryError::NoModelsAvailable),
    }
}

/// Tokens per second from the host-reported evaluation metrics.
pub fn tokens_per_second(eval_count: u64, eval_duration_ns: u64) -> Result<f64, ProbeError> {
    if eval_duration_ns == 0 {
        return Err(ProbeError::InvalidResponse(
            "eval_duration of zero nanoseconds".into(),
        ));
    }

    Ok(eval_count as f64 / (eval_duration_ns as f64 / 1_000_000_000.0))
}

/// Run the full pipeline for one target. Never fails: every outcome,
/// including discovery failures, becomes a `ProbeResult`.
pub async fn probe_target<C: BenchClient + ?Sized>(client: &C, target: Target) -> ProbeResult {
    let models = match client.list_models(&target.address).await {
        Ok(models) => models,
        Err(e) => return ProbeResult::error(target, e.to_string()),
    };

    let model = match select_model(&models) {
        Ok(model) => model,
        Err(e) => return ProbeResult::error(target, e.to_string()),
    };

    let stats = match client.generate(&target.address, &model).await {
        Ok(stats) => stats,
        Err(e) => return ProbeResult::error(target, e.to_string()),
    };

    match tokens_per_second(stats.eval_count, stats.eval_duration_ns) {
        Ok(tps) => ProbeResult::success(target, model, tps, stats.total_duration_ns),
        Err(e) => ProbeResult::error(target, e.to_string()),
    }
}
