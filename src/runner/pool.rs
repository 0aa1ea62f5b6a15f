/// Bounded worker pool running target probes concurrently.
use crate::http::client::BenchClient;
use crate::runner::probe::probe_target;
use crate::sink::ResultSink;
use crate::targets::Target;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Run every target through discovery and probing with at most `threads`
/// probes in flight, recording each outcome on the sink as it completes.
///
/// Workers pull targets from a shared queue and run one target end to end
/// before taking the next, so a slow or unreachable host only occupies a
/// single worker slot. Targets complete in whatever order their network
/// calls finish.
pub async fn run_pool<C>(
    client: Arc<C>,
    targets: Vec<Target>,
    threads: usize,
    sink: Arc<ResultSink>,
) where
    C: BenchClient + 'static,
{
    let worker_count = threads.max(1).min(targets.len().max(1));
    let queue = Arc::new(Mutex::new(targets.into_iter().collect::<VecDeque<_>>()));

    let mut workers = Vec::with_capacity(worker_count);
    for _ in 0..worker_count {
        let client = Arc::clone(&client);
        let queue = Arc::clone(&queue);
        let sink = Arc::clone(&sink);

        workers.push(tokio::spawn(async move {
            loop {
                let next = queue.lock().ok().and_then(|mut q| q.pop_front());
                let Some(target) = next else { break };

                let result = probe_target(client.as_ref(), target).await;
                sink.record(result);
            }
        }));
    }

    for worker in workers {
        // A panicked worker loses only its own in-flight target.
        let _ = worker.await;
    }
}
