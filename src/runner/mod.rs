/// Concurrent probe execution.
pub mod pool;
pub mod probe;
