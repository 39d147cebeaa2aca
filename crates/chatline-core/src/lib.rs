//! Provider-agnostic building blocks of the **chatline** SDK.
//!
//! * [`generic`] – chat messages, roles and the reply type shared by every
//!   backend.
//! * [`template`] – the [`IntoPrompt`](template::IntoPrompt) conversion that
//!   turns plain strings (or richer values) into chat messages.
//! * [`provider`] – the [`ChatCompletionProvider`](provider::ChatCompletionProvider)
//!   trait a backend implements.
//! * [`client`] – [`ChatClient`], a backend bound to a single model.
//! * [`error`] – the unified [`ChatError`](error::ChatError) taxonomy.
pub mod client;
pub mod error;
pub mod generic;
pub mod model;
pub mod provider;
pub mod template;

pub use client::ChatClient;
