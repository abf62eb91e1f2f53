use std::sync::Arc;

use crate::ports::{TemplateCatalog, TemplateRenderer};
use crate::services::MinijinjaRenderer;

use super::builder::PromptBuilder;

/// Entry point binding a model's template catalog to a rendering engine.
///
/// One engine serves any number of conversations; each [`builder`] call
/// starts a fresh one.
///
/// [`builder`]: PromptEngine::builder
pub struct PromptEngine {
    catalog: Arc<dyn TemplateCatalog>,
    renderer: Arc<dyn TemplateRenderer>,
}

impl PromptEngine {
    /// Engine rendering through the bundled minijinja adapter.
    pub fn new(catalog: Arc<dyn TemplateCatalog>) -> Self {
        Self::with_renderer(catalog, Arc::new(MinijinjaRenderer::new()))
    }

    /// Engine rendering through a caller-supplied adapter.
    pub fn with_renderer(
        catalog: Arc<dyn TemplateCatalog>,
        renderer: Arc<dyn TemplateRenderer>,
    ) -> Self {
        PromptEngine { catalog, renderer }
    }

    /// True iff the model ships a non-empty template mapping.
    pub fn has_prompt_templates(&self) -> bool {
        self.catalog.prompt_templates().is_some_and(|templates| !templates.is_empty())
    }

    /// Start a new conversation against this model.
    pub fn builder(&self) -> PromptBuilder {
        PromptBuilder::new(Arc::clone(&self.catalog), Arc::clone(&self.renderer))
    }
}
