/// Ollamark - benchmark response latency and token throughput of Ollama
/// hosts over HTTP.
mod cli;
mod error;
mod http;
mod output;
mod runner;
mod sink;
mod targets;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
