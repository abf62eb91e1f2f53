use thiserror::Error;

use super::variant::PromptVariant;

/// Library-wide error type for prompt construction.
///
/// Template-authoring defects are deliberately not represented here: a
/// malformed template degrades to a warning and a partial render, because
/// templates are untrusted third-party content shipped with a model.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Tool declarations were already set on this builder.
    #[error("Tools already set")]
    ToolsAlreadySet,

    /// No usable prompt template for this model and variant.
    #[error("{0}")]
    UnsupportedTemplate(String),
}

impl PromptError {
    /// The model ships no template mapping at all.
    pub(crate) fn templates_unavailable() -> Self {
        PromptError::UnsupportedTemplate(
            "Prompt templates are not available for this model".to_string(),
        )
    }

    /// The model's mapping lacks the selected variant.
    pub(crate) fn variant_unavailable(variant: PromptVariant) -> Self {
        PromptError::UnsupportedTemplate(format!(
            "Prompt template not available for variant: {variant}"
        ))
    }
}
