use std::sync::Arc;

use serde_json::Value;

/// Callback receiving messages a template reports through its raise signal.
///
/// Injected at renderer construction so independent renderer instances (for
/// example, under test) do not share diagnostic state.
pub type RaiseSink = Arc<dyn Fn(&str) + Send + Sync>;

/// Result of one render call: the produced text plus any engine errors.
///
/// Errors here are soft. The output may be partial or empty, but callers
/// always get whatever the engine managed to produce.
#[derive(Debug, Clone, Default)]
pub struct RenderOutcome {
    pub output: String,
    pub errors: Vec<String>,
}

/// Port for rendering chat templates.
///
/// This abstraction keeps the template engine (e.g. minijinja) out of the
/// domain layer and lets tests substitute their own engine.
pub trait TemplateRenderer: Send + Sync {
    /// Render a template string against an assembled conversation context.
    ///
    /// Never fails at the call boundary: engine errors are reported in the
    /// outcome instead.
    fn render(&self, template: &str, context: &Value) -> RenderOutcome;
}
