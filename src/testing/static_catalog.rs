use std::collections::HashMap;

use crate::ports::TemplateCatalog;

/// In-memory template catalog for tests.
pub struct StaticCatalog {
    templates: Option<HashMap<String, String>>,
    eos_token: String,
}

impl StaticCatalog {
    /// Catalog with no template mapping at all.
    pub fn empty() -> Self {
        StaticCatalog { templates: None, eos_token: "</s>".to_string() }
    }

    /// Catalog shipping a single named template.
    pub fn with_template(name: &str, body: &str) -> Self {
        let mut templates = HashMap::new();
        templates.insert(name.to_string(), body.to_string());
        StaticCatalog { templates: Some(templates), eos_token: "</s>".to_string() }
    }

    pub fn eos(mut self, token: &str) -> Self {
        self.eos_token = token.to_string();
        self
    }
}

impl TemplateCatalog for StaticCatalog {
    fn prompt_templates(&self) -> Option<&HashMap<String, String>> {
        self.templates.as_ref()
    }

    fn eos_token(&self) -> &str {
        &self.eos_token
    }
}
