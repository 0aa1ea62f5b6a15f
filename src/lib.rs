/// Ollamark library - exposes modules for testing and external use.
pub mod cli;
pub mod error;
pub mod http;
pub mod output;
pub mod runner;
pub mod sink;
pub mod targets;
