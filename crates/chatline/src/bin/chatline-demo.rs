//! Ask the local OpenAI-compatible adapter one question and print the answer.
//!
//! ```bash
//! cargo run -p chatline --bin chatline-demo
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG=debug` to see the request.
use std::io;

use chatline::{ClientConfig, DEMO_PROMPT, invoke};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = ClientConfig::local_adapter();

    invoke(&config, DEMO_PROMPT, &mut io::stdout().lock()).await
}
