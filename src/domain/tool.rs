use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// A model-emitted request to invoke a named function with arguments.
///
/// `name` is the function identifier; it must be non-empty. Parameter order
/// carries no meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolCall {
    name: String,
    parameters: Map<String, Value>,
}

impl ToolCall {
    pub fn new(name: impl Into<String>, parameters: Map<String, Value>) -> Self {
        ToolCall { name: name.into(), parameters }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &Map<String, Value> {
        &self.parameters
    }

    /// Nested view matching the `function.name` / `function.arguments`
    /// attribute path that template authors address.
    pub fn function(&self) -> FunctionView<'_> {
        FunctionView { call: self }
    }

    /// Serialize to the `{"function": {"name", "arguments"}}` wire shape.
    pub fn to_value(&self) -> Value {
        json!({
            "function": {
                "name": self.name.clone(),
                "arguments": Value::Object(self.parameters.clone()),
            }
        })
    }
}

/// Borrowed accessor over the function half of a [`ToolCall`].
#[derive(Debug, Clone, Copy)]
pub struct FunctionView<'a> {
    call: &'a ToolCall,
}

impl FunctionView<'_> {
    pub fn name(&self) -> &str {
        self.call.name()
    }

    pub fn arguments(&self) -> &Map<String, Value> {
        self.call.parameters()
    }
}

/// A callable-function declaration, passed through to the render context
/// unchanged.
///
/// The internal shape belongs to the model's template; the core does not
/// inspect or validate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tool(Value);

impl Tool {
    pub fn new(declaration: Value) -> Self {
        Tool(declaration)
    }

    /// Conventional `{"type": "function", ...}` declaration for a named
    /// function with a JSON-schema parameter description.
    pub fn function(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Value,
    ) -> Self {
        Tool(json!({
            "type": "function",
            "function": {
                "name": name.into(),
                "description": description.into(),
                "parameters": parameters,
            }
        }))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}
