pub mod error;
pub mod message;
pub mod tool;
pub mod variant;

pub use error::PromptError;
pub use message::{Message, Role};
pub use tool::{FunctionView, Tool, ToolCall};
pub use variant::PromptVariant;
