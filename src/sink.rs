/// Thread-safe collector and live printer for probe results.
use crate::output;
use crate::runner::probe::ProbeResult;
use std::sync::Mutex;

/// Serializes result rows to stdout and keeps the run history.
///
/// Printing happens under the same lock as the history append, so rows
/// from concurrent workers never interleave and every recorded result
/// ends up in the history exactly once.
#[derive(Default)]
pub struct ResultSink {
    history: Mutex<Vec<ProbeResult>>,
}

impl ResultSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed probe: print its row and append it to the
    /// history.
    pub fn record(&self, result: ProbeResult) {
        let mut history = match self.history.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        println!("{}", output::format_row(&result));
        history.push(result);
    }

    /// Snapshot of everything recorded so far, in completion order.
    pub fn history(&self) -> Vec<ProbeResult> {
        match self.history.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}
