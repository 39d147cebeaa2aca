//! Model identifiers used throughout the **chatline** workspace.
//!
//! Well-known OpenAI models get an enum variant so application code never
//! types `"gpt-4o-mini"` by hand; everything a self-hosted server resolves on
//! its own (`"claude-code"`, `"llama3"`, …) goes through [`Model::Custom`].
//!
//! ```rust
//! use chatline_core::model::{Model, OpenAiModel};
//!
//! assert_eq!(Model::from(OpenAiModel::Gpt4oMini),
//!            Model::OpenAi(OpenAiModel::Gpt4oMini));
//! assert_eq!(Model::custom("claude-code").to_string(), "claude-code");
//! ```
use std::{borrow::Cow, fmt};

/// Universal identifier for an LLM model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Built-in OpenAI models (chat completion API).
    OpenAi(OpenAiModel),
    /// Any model name the target server resolves itself. Sent verbatim.
    Custom(Cow<'static, str>),
}

impl Model {
    pub fn custom(name: impl Into<Cow<'static, str>>) -> Self {
        Model::Custom(name.into())
    }
}

/// Models **officially** supported by the OpenAI back-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpenAiModel {
    Gpt4o,
    Gpt4oMini,
    Gpt4_1,
    Gpt4_1Mini,
    O3Mini,
}

impl From<OpenAiModel> for Model {
    fn from(val: OpenAiModel) -> Self {
        Model::OpenAi(val)
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::OpenAi(model) => write!(f, "{model:?}"),
            Model::Custom(name) => f.write_str(name),
        }
    }
}
