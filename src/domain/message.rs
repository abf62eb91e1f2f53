use serde_json::{Map, Value};

use super::tool::ToolCall;

/// Conversational role attached to a serialized message record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
    ToolCall,
}

impl Role {
    /// Lowercase wire name used in serialized records.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Tool => "tool",
            Role::ToolCall => "tool_call",
        }
    }
}

/// One conversational turn.
///
/// Each variant owns exactly the payload its role carries, so the serialized
/// record only ever contains the keys valid for that variant. Templates test
/// fields with defined-ness/truthiness checks; a missing key and a null key
/// are not the same thing to them.
#[derive(Debug, Clone)]
pub enum Message {
    System { content: String },
    User { content: String },
    Assistant { content: String },
    /// Tool execution outcome fed back into the conversation. The payload is
    /// an arbitrary JSON value, not necessarily a string.
    ToolResult { content: Value },
    /// Model-emitted request to invoke a named function.
    ToolCall { call: ToolCall },
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Message::System { content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Message::User { content: content.into() }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Message::Assistant { content: content.into() }
    }

    pub fn tool_result(content: Value) -> Self {
        Message::ToolResult { content }
    }

    pub fn tool_call(call: ToolCall) -> Self {
        Message::ToolCall { call }
    }

    pub fn role(&self) -> Role {
        match self {
            Message::System { .. } => Role::System,
            Message::User { .. } => Role::User,
            Message::Assistant { .. } => Role::Assistant,
            Message::ToolResult { .. } => Role::Tool,
            Message::ToolCall { .. } => Role::ToolCall,
        }
    }

    /// Tool calls carried by this turn; empty unless this is a tool-call
    /// turn.
    pub fn tool_calls(&self) -> &[ToolCall] {
        match self {
            Message::ToolCall { call } => std::slice::from_ref(call),
            _ => &[],
        }
    }

    /// Serialize to the record shape chat templates iterate over.
    ///
    /// `content` and `tool_calls` are omitted, not null, for roles they do
    /// not apply to.
    pub fn to_value(&self) -> Value {
        let mut record = Map::new();
        record.insert("role".to_string(), Value::String(self.role().as_str().to_string()));

        match self {
            Message::System { content }
            | Message::User { content }
            | Message::Assistant { content } => {
                record.insert("content".to_string(), Value::String(content.clone()));
            }
            Message::ToolResult { content } => {
                record.insert("content".to_string(), content.clone());
            }
            Message::ToolCall { call } => {
                record.insert("tool_calls".to_string(), Value::Array(vec![call.to_value()]));
            }
        }

        Value::Object(record)
    }
}
