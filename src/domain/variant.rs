use std::fmt;

/// Which of a model's named template bodies a conversation renders with.
///
/// Models may ship several template strings keyed by lowercase variant name;
/// the variant is chosen per conversation, before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PromptVariant {
    /// Plain conversational exchange.
    #[default]
    Default,
    /// Tool-augmented conversation (function declarations in the context).
    Tool,
    /// Retrieval-augmented conversation.
    Rag,
}

impl PromptVariant {
    /// Lowercase key under which a model stores this variant's template.
    pub fn as_str(self) -> &'static str {
        match self {
            PromptVariant::Default => "default",
            PromptVariant::Tool => "tool",
            PromptVariant::Rag => "rag",
        }
    }
}

impl fmt::Display for PromptVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
