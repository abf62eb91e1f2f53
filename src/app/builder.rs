use std::sync::Arc;

use serde_json::{Map, Value};

use crate::domain::{Message, PromptError, PromptVariant, Tool, ToolCall};
use crate::ports::{TemplateCatalog, TemplateRenderer};

/// Accumulates one conversation and renders it through the model's chat
/// template.
///
/// Messages are kept in insertion order; that order is the turn order the
/// template sees. A builder belongs to a single conversation and a single
/// caller. `build` may be called repeatedly and re-renders the current
/// state.
pub struct PromptBuilder {
    catalog: Arc<dyn TemplateCatalog>,
    renderer: Arc<dyn TemplateRenderer>,
    variant: PromptVariant,
    add_generation_prompt: bool,
    messages: Vec<Message>,
    tools: Option<Vec<Tool>>,
}

impl PromptBuilder {
    pub(crate) fn new(
        catalog: Arc<dyn TemplateCatalog>,
        renderer: Arc<dyn TemplateRenderer>,
    ) -> Self {
        PromptBuilder {
            catalog,
            renderer,
            variant: PromptVariant::Default,
            add_generation_prompt: true,
            messages: Vec::new(),
            tools: None,
        }
    }

    /// Select which of the model's template bodies to render with.
    pub fn set_variant(&mut self, variant: PromptVariant) -> &mut Self {
        self.variant = variant;
        self
    }

    /// Whether the template should append the cue for the model to start
    /// generating (`add_generation_prompt` in the context). Defaults to true.
    pub fn set_add_generation_prompt(&mut self, add_generation_prompt: bool) -> &mut Self {
        self.add_generation_prompt = add_generation_prompt;
        self
    }

    pub fn add_system_message(&mut self, content: impl Into<String>) -> &mut Self {
        self.messages.push(Message::system(content));
        self
    }

    pub fn add_user_message(&mut self, content: impl Into<String>) -> &mut Self {
        self.messages.push(Message::user(content));
        self
    }

    pub fn add_assistant_message(&mut self, content: impl Into<String>) -> &mut Self {
        self.messages.push(Message::assistant(content));
        self
    }

    /// Feed a tool execution outcome back into the conversation as a `tool`
    /// turn. The payload may be any JSON value.
    pub fn add_tool_result(&mut self, content: Value) -> &mut Self {
        self.messages.push(Message::tool_result(content));
        self
    }

    pub fn add_tool_call(&mut self, call: ToolCall) -> &mut Self {
        self.messages.push(Message::tool_call(call));
        self
    }

    /// Declare the callable tools, exactly once per builder.
    ///
    /// Declarations cannot be merged or replaced afterwards; a second call is
    /// a usage error.
    pub fn add_tools(
        &mut self,
        tools: impl IntoIterator<Item = Tool>,
    ) -> Result<&mut Self, PromptError> {
        if self.tools.is_some() {
            return Err(PromptError::ToolsAlreadySet);
        }
        self.tools = Some(tools.into_iter().collect());
        Ok(self)
    }

    pub fn has_tools(&self) -> bool {
        !self.tools().is_empty()
    }

    /// Declared tools; empty when none were set.
    pub fn tools(&self) -> &[Tool] {
        self.tools.as_deref().unwrap_or_default()
    }

    /// Messages accumulated so far, in insertion order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Render the accumulated conversation.
    ///
    /// An empty conversation renders to an empty string without touching the
    /// template catalog. Engine-level template defects are soft failures:
    /// the renderer logs them and whatever output the engine produced is
    /// returned.
    pub fn build(&self) -> Result<String, PromptError> {
        if self.messages.is_empty() {
            return Ok(String::new());
        }

        let templates = self
            .catalog
            .prompt_templates()
            .filter(|templates| !templates.is_empty())
            .ok_or_else(PromptError::templates_unavailable)?;

        let template = templates
            .get(self.variant.as_str())
            .ok_or_else(|| PromptError::variant_unavailable(self.variant))?;

        let context = self.render_context();
        Ok(self.renderer.render(template, &context).output)
    }

    /// Assemble the context map handed to the template.
    fn render_context(&self) -> Value {
        let mut context = Map::new();
        context.insert(
            "messages".to_string(),
            Value::Array(self.messages.iter().map(Message::to_value).collect()),
        );
        context.insert(
            "add_generation_prompt".to_string(),
            Value::Bool(self.add_generation_prompt),
        );
        context.insert(
            "eos_token".to_string(),
            Value::String(self.catalog.eos_token().to_string()),
        );
        // The BOS marker is inserted by the tokenizer stage, never by the
        // template.
        context.insert("bos_token".to_string(), Value::String(String::new()));

        if self.has_tools() {
            context.insert(
                "tools".to_string(),
                Value::Array(self.tools().iter().map(|tool| tool.as_value().clone()).collect()),
            );
        }

        Value::Object(context)
    }
}
