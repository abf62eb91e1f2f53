//! Production template renderer backed by minijinja.

use std::sync::Arc;

use minijinja::{Environment, UndefinedBehavior};
use serde_json::Value;
use tracing::warn;

use crate::ports::{RaiseSink, RenderOutcome, TemplateRenderer};

/// Renders chat templates with a minijinja environment configured for the
/// conventions of pretrained model repositories.
///
/// Each instance owns its environment and raise sink; the environment is
/// immutable after construction, so one renderer can serve concurrent
/// renders.
pub struct MinijinjaRenderer {
    env: Environment<'static>,
}

impl MinijinjaRenderer {
    /// Renderer whose raise signal is logged as a warning.
    pub fn new() -> Self {
        Self::with_raise_sink(Arc::new(|message: &str| {
            warn!(reason = %message, "prompt template raised an error");
        }))
    }

    /// Renderer forwarding raise-signal messages to `sink`.
    pub fn with_raise_sink(sink: RaiseSink) -> Self {
        let mut env = Environment::new();
        // Whitespace handling chat-template authors write against.
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        // Omitted context keys must read as undefined, not as errors.
        env.set_undefined_behavior(UndefinedBehavior::Lenient);

        // Templates call raise_exception("...") to flag an unsupported
        // conversation shape. The render must keep going regardless.
        env.add_function("raise_exception", move |message: String| -> String {
            sink(&message);
            String::new()
        });

        MinijinjaRenderer { env }
    }
}

impl Default for MinijinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MinijinjaRenderer {
    fn render(&self, template: &str, context: &Value) -> RenderOutcome {
        let compiled = match self.env.template_from_str(template) {
            Ok(compiled) => compiled,
            Err(err) => {
                let errors = error_chain(&err);
                warn!(errors = ?errors, "prompt template failed to parse");
                return RenderOutcome { output: String::new(), errors };
            }
        };

        // Render through a writer so output produced before a mid-render
        // failure is kept.
        let mut buf: Vec<u8> = Vec::new();
        let mut errors = Vec::new();
        if let Err(err) = compiled.render_to_write(context, &mut buf) {
            errors = error_chain(&err);
            warn!(errors = ?errors, "prompt template render reported errors");
        }

        RenderOutcome { output: String::from_utf8_lossy(&buf).into_owned(), errors }
    }
}

fn error_chain(err: &minijinja::Error) -> Vec<String> {
    let mut messages = vec![err.to_string()];
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        messages.push(cause.to_string());
        source = cause.source();
    }
    messages
}
