mod apitemplate_pdf_renderer;

pub use apitemplate_pdf_renderer::ApiTemplatePdfRenderer;
