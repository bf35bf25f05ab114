//! Invoice sequence → PDF byte stream.

use facturas_invoicing::Invoice;

use crate::error::RenderError;
use crate::layout::{self, LayoutOptions};
use crate::pdf;

/// Renders an invoice sequence into a paginated PDF document.
///
/// Succeeds for any sequence length, including zero (a title-only document
/// is a valid outcome, not an error). Rendering performs no IO; the result
/// is a request-scoped in-memory buffer.
#[derive(Clone, Debug, Default)]
pub struct DocumentRenderer {
    options: LayoutOptions,
}

impl DocumentRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: LayoutOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    pub fn render(&self, invoices: &[Invoice]) -> Result<RenderedReport, RenderError> {
        let layout = layout::paginate(invoices, &self.options);
        let bytes = pdf::emit(&layout, &self.options)?;
        Ok(RenderedReport { bytes })
    }
}

/// The rendered document bytes; has no identity beyond the request that
/// produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedReport {
    bytes: Vec<u8>,
}

impl RenderedReport {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facturas_invoicing::InvoiceId;

    fn invoice(id: &str) -> Invoice {
        Invoice::new(InvoiceId::new(id).unwrap(), "Ana", "100", "2024-01-01").unwrap()
    }

    #[test]
    fn empty_sequence_renders_a_document() {
        let report = DocumentRenderer::new().render(&[]).unwrap();
        assert!(!report.is_empty());
        assert!(report.as_bytes().starts_with(b"%PDF"));
    }

    #[test]
    fn single_invoice_renders_a_document() {
        let report = DocumentRenderer::new().render(&[invoice("1")]).unwrap();
        assert!(report.as_bytes().starts_with(b"%PDF"));
    }

    #[test]
    fn many_pages_render_without_failure() {
        let invoices: Vec<Invoice> = (1..=100).map(|i| invoice(&i.to_string())).collect();
        let report = DocumentRenderer::new().render(&invoices).unwrap();
        assert!(report.as_bytes().starts_with(b"%PDF"));
        // More content must not shrink the document.
        let small = DocumentRenderer::new().render(&[]).unwrap();
        assert!(report.len() > small.len());
    }
}
