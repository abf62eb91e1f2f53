mod renderer;
mod template_catalog;

pub use renderer::{RaiseSink, RenderOutcome, TemplateRenderer};
pub use template_catalog::TemplateCatalog;
