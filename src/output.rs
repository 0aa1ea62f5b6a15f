/// Fixed-width console output for live rows and the final summary.
use crate::runner::probe::{ProbeResult, ProbeStatus};
use std::fmt;
use std::fmt::Write as _;

const RULE_WIDTH: usize = 100;

/// Print the table header once, before any probing starts.
pub fn print_header() {
    println!("\nResults:");
    println!("{}", "-".repeat(RULE_WIDTH));
    println!(
        "{:<10} {:<20} {:<15} {:<10} {:<12} {:<20}",
        "Timestamp", "IP Address", "Model", "Status", "Tokens/sec", "Total Duration (ns)"
    );
    println!("{}", "-".repeat(RULE_WIDTH));
}

/// One table row for a completed probe. Error rows carry the failure
/// detail after the fixed columns.
pub fn format_row(result: &ProbeResult) -> String {
    let model = result.model.as_deref().unwrap_or("N/A");
    let status = match result.status {
        ProbeStatus::Success => "success",
        ProbeStatus::Error => "error",
    };
    let tps = result
        .tokens_per_second
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| "N/A".to_string());
    let duration = result
        .total_duration_ns
        .map(|v| v.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    let mut row = format!(
        "{:<10} {:<20} {:<15} {:<10} {:<12} {:<20}",
        result.timestamp.format("%H:%M:%S"),
        result.target.address,
        model,
        status,
        tps,
        duration
    );
    if let Some(detail) = &result.error_detail {
        let _ = write!(row, " {}", detail);
    }
    row
}

/// End-of-run summary over the full history.
#[derive(Debug)]
pub struct Summary {
    pub total: usize,
    pub successes: usize,
    pub errors: usize,
    pub average_tps: Option<f64>,
    pub fastest: Option<(String, f64)>,
}

impl Summary {
    pub fn from_results(results: &[ProbeResult]) -> Self {
        let total = results.len();
        let successes = results
            .iter()
            .filter(|r| r.status == ProbeStatus::Success)
            .count();

        let mut sum = 0.0;
        let mut fastest: Option<(String, f64)> = None;
        for result in results {
            if let Some(tps) = result.tokens_per_second {
                sum += tps;
                if fastest.as_ref().is_none_or(|(_, best)| tps > *best) {
                    fastest = Some((result.target.address.clone(), tps));
                }
            }
        }

        Self {
            total,
            successes,
            errors: total - successes,
            average_tps: (successes > 0).then(|| sum / successes as f64),
            fastest,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;
        write!(
            f,
            "Summary: {} hosts, {} succeeded, {} failed",
            self.total, self.successes, self.errors
        )?;
        if let Some(avg) = self.average_tps {
            write!(f, "\nAverage: {:.2} tokens/sec", avg)?;
        }
        if let Some((address, tps)) = &self.fastest {
            write!(f, "\nFastest: {} at {:.2} tokens/sec", address, tps)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::targets::Target;
    use chrono::Local;

    fn success(address: &str, tps: f64) -> ProbeResult {
        ProbeResult {
            target: Target::new(address),
            model: Some("llama3.2".into()),
            status: ProbeStatus::Success,
            tokens_per_second: Some(tps),
            total_duration_ns: Some(10_706_818_083),
            timestamp: Local::now(),
            error_detail: None,
        }
    }

    fn failure(address: &str, detail: &str) -> ProbeResult {
        ProbeResult {
            target: Target::new(address),
            model: None,
            status: ProbeStatus::Error,
            tokens_per_second: None,
            total_duration_ns: None,
            timestamp: Local::now(),
            error_detail: Some(detail.into()),
        }
    }

    #[test]
    fn success_rows_format_tps_to_two_decimals() {
        let row = format_row(&success("1.1.1.1", 42.6835));
        assert!(row.contains("1.1.1.1"));
        assert!(row.contains("llama3.2"));
        assert!(row.contains("success"));
        assert!(row.contains("42.68"));
        assert!(row.contains("10706818083"));
    }

    #[test]
    fn error_rows_use_na_placeholders_and_carry_the_detail() {
        let row = format_row(&failure("2.2.2.2", "no models available"));
        assert!(row.contains("error"));
        assert!(row.contains("N/A"));
        assert!(row.ends_with("no models available"));
    }

    #[test]
    fn summary_counts_successes_and_errors() {
        let results = vec![
            success("1.1.1.1", 40.0),
            failure("2.2.2.2", "connection refused"),
            success("3.3.3.3", 50.0),
        ];

        let summary = Summary::from_results(&results);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.successes, 2);
        assert_eq!(summary.errors, 1);
        assert_eq!(summary.average_tps, Some(45.0));
        assert_eq!(summary.fastest, Some(("3.3.3.3".to_string(), 50.0)));
    }

    #[test]
    fn all_error_summary_has_no_throughput_lines() {
        let results = vec![failure("1.1.1.1", "timeout")];
        let summary = Summary::from_results(&results);

        assert_eq!(summary.average_tps, None);
        assert_eq!(summary.fastest, None);

        let rendered = summary.to_string();
        assert!(rendered.contains("1 hosts, 0 succeeded, 1 failed"));
        assert!(!rendered.contains("Average"));
    }
}
