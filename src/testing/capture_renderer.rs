use std::sync::Mutex;

use serde_json::Value;

use crate::ports::{RenderOutcome, TemplateRenderer};

/// Renderer double that records the last context it was handed and returns a
/// fixed output.
pub struct CaptureRenderer {
    output: String,
    last_context: Mutex<Option<Value>>,
}

impl CaptureRenderer {
    pub fn new(output: &str) -> Self {
        CaptureRenderer { output: output.to_string(), last_context: Mutex::new(None) }
    }

    pub fn last_context(&self) -> Option<Value> {
        self.last_context.lock().unwrap().clone()
    }
}

impl TemplateRenderer for CaptureRenderer {
    fn render(&self, _template: &str, context: &Value) -> RenderOutcome {
        *self.last_context.lock().unwrap() = Some(context.clone());
        RenderOutcome { output: self.output.clone(), errors: Vec::new() }
    }
}
