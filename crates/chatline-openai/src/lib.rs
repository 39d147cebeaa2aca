//! OpenAI-compatible backend for the **chatline** SDK.
//!
//! Works against api.openai.com as well as any server that mimics its
//! `/chat/completions` route (local adapters, proxies, self-hosted models):
//! point [`OpenAiAdapterBuilder::with_base_url`] at the server's `/v1` root.
mod adapter;
mod model_map;
mod provider_impl_chat;

pub use adapter::{OpenAiAdapter, OpenAiAdapterBuilder};
pub mod api_v1;
mod client;
pub mod error;

pub use client::OpenAiClient;
