mod capture_renderer;
mod static_catalog;

pub use capture_renderer::CaptureRenderer;
pub use static_catalog::StaticCatalog;
