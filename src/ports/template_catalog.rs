use std::collections::HashMap;

/// Port for per-model template metadata, supplied by the tokenizer/model
/// layer.
///
/// Keys of the template mapping are lowercase variant names (`"default"`,
/// `"tool"`, `"rag"`).
pub trait TemplateCatalog: Send + Sync {
    /// The model's template mapping, if it ships one.
    fn prompt_templates(&self) -> Option<&HashMap<String, String>>;

    /// End-of-sequence token exposed to templates as `eos_token`.
    fn eos_token(&self) -> &str;
}
