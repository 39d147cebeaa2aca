use std::borrow::Cow;

use chatline_core::model::{Model, OpenAiModel};

pub const GPT4_O: &str = "gpt-4o";
pub const GPT4_O_MINI: &str = "gpt-4o-mini";
pub const GPT4_1: &str = "gpt-4.1";
pub const GPT4_1_MINI: &str = "gpt-4.1-mini";
pub const O3_MINI: &str = "o3-mini";

/// Wire name of `model` for an OpenAI-compatible endpoint.
pub(crate) fn map_model(model: &Model) -> Cow<'static, str> {
    let openai_model = match model {
        Model::Custom(custom) => return custom.clone(),
        Model::OpenAi(openai_model) => openai_model,
    };

    let name = match openai_model {
        OpenAiModel::Gpt4o => GPT4_O,
        OpenAiModel::Gpt4oMini => GPT4_O_MINI,
        OpenAiModel::Gpt4_1 => GPT4_1,
        OpenAiModel::Gpt4_1Mini => GPT4_1_MINI,
        OpenAiModel::O3Mini => O3_MINI,
    };
    name.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_names_pass_through_verbatim() {
        assert_eq!(map_model(&Model::custom("claude-code")), "claude-code");
    }

    #[test]
    fn known_models_use_wire_names() {
        assert_eq!(map_model(&OpenAiModel::Gpt4_1Mini.into()), GPT4_1_MINI);
        assert_eq!(map_model(&OpenAiModel::O3Mini.into()), O3_MINI);
    }
}
