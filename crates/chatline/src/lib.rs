//! # `chatline` – the umbrella crate
//!
//! One dependency line for the whole stack:
//!
//! | Crate               | What it provides                                                        |
//! |---------------------|-------------------------------------------------------------------------|
//! | **`chatline-core`** | Provider-agnostic traits, the bound [`ChatClient`], errors              |
//! | **`chatline-openai`** | HTTP backend for OpenAI-compatible `/chat/completions` *(optional)*   |
//!
//! On top of the re-exports this crate carries the one-shot contract used by
//! the `chatline-demo` binary: a fixed [`ClientConfig`] pointing at a local
//! OpenAI-compatible adapter, and [`invoke`], which sends a single prompt and
//! writes the reply as one line.
//!
//! ```rust,no_run
//! use chatline::{ClientConfig, DEMO_PROMPT, invoke};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::local_adapter();
//!     invoke(&config, DEMO_PROMPT, &mut std::io::stdout().lock()).await
//! }
//! ```
#![doc(html_root_url = "https://docs.rs/chatline/latest")]

pub use chatline_core::*;

#[cfg(feature = "openai")]
pub use chatline_openai as openai;

mod config;
#[cfg(feature = "openai")]
mod invoke;

pub use config::ClientConfig;
#[cfg(feature = "openai")]
pub use invoke::invoke;

/// Prompt sent by the demo binary.
pub const DEMO_PROMPT: &str = "hi! Reply in one short sentence.";
