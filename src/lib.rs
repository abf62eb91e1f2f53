//! chatprompt: render structured conversations through model-shipped chat templates.
//!
//! Pretrained model repositories ship Jinja-family template strings that map a
//! conversation (user/system/assistant turns, tool calls, tool results) into
//! the single prompt string the model was trained on. This crate owns the
//! typed conversation model, the builder that accumulates turns under
//! validation rules, template-variant selection, and the contract with the
//! rendering engine.
//!
//! Template metadata comes in through the [`TemplateCatalog`] port; rendering
//! goes out through the [`TemplateRenderer`] port, with a bundled
//! [`MinijinjaRenderer`] as the production adapter.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{PromptBuilder, PromptEngine};
pub use domain::{FunctionView, Message, PromptError, PromptVariant, Role, Tool, ToolCall};
pub use ports::{RaiseSink, RenderOutcome, TemplateCatalog, TemplateRenderer};
pub use services::MinijinjaRenderer;
