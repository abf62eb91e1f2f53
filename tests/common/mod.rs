//! Shared fixtures for integration tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use chatprompt::TemplateCatalog;

/// In-memory model metadata that counts template-mapping lookups.
#[allow(dead_code)]
pub struct ModelFixture {
    templates: Option<HashMap<String, String>>,
    eos_token: String,
    lookups: AtomicUsize,
}

#[allow(dead_code)]
impl ModelFixture {
    /// A model shipping no template mapping at all.
    pub fn without_templates() -> Self {
        ModelFixture {
            templates: None,
            eos_token: "</s>".to_string(),
            lookups: AtomicUsize::new(0),
        }
    }

    /// A model shipping the given variant-name/body pairs.
    pub fn new(templates: &[(&str, &str)]) -> Self {
        let templates =
            templates.iter().map(|(name, body)| (name.to_string(), body.to_string())).collect();
        ModelFixture {
            templates: Some(templates),
            eos_token: "</s>".to_string(),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn eos(mut self, token: &str) -> Self {
        self.eos_token = token.to_string();
        self
    }

    /// How many times the template mapping was queried.
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

impl TemplateCatalog for ModelFixture {
    fn prompt_templates(&self) -> Option<&HashMap<String, String>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.templates.as_ref()
    }

    fn eos_token(&self) -> &str {
        &self.eos_token
    }
}
