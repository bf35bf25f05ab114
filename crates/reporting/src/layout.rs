//! Pure page/block model for the invoice report.
//!
//! The types here describe the logical content of the document without
//! referencing the rendering crate, so pagination can be exercised in tests
//! without producing any PDF bytes. [`paginate`] is a total function: any
//! invoice sequence (including the empty one) produces a layout, and content
//! that does not fit a page simply starts the next one.

use facturas_invoicing::Invoice;

/// One typographic point in millimetres.
pub(crate) const PT_TO_MM: f64 = 0.352_778;

/// Baseline-to-baseline distance as a multiple of the font size.
const LINE_FACTOR: f64 = 1.4;

/// Lines emitted for every invoice record.
pub const RECORD_LINES: usize = 4;

/// Horizontal alignment of a text block.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Geometry and typography of the report document.
///
/// The defaults are the portrait A4 report this service ships: an 18pt
/// title, 12pt record lines, and a centered title. Title alignment is an
/// explicit option and the emitter honors whatever is set here.
#[derive(Clone, Debug)]
pub struct LayoutOptions {
    pub title: String,
    pub title_alignment: HorizontalAlignment,
    /// Page width in millimetres.
    pub page_width: f64,
    /// Page height in millimetres.
    pub page_height: f64,
    /// Uniform page margin in millimetres.
    pub margin: f64,
    /// Title font size in points.
    pub title_size: f64,
    /// Record line font size in points.
    pub body_size: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            title: "Reporte de Facturas".to_string(),
            title_alignment: HorizontalAlignment::Center,
            page_width: 210.0,
            page_height: 297.0,
            margin: 20.0,
            title_size: 18.0,
            body_size: 12.0,
        }
    }
}

impl LayoutOptions {
    /// Baseline-to-baseline distance of a record line, in millimetres.
    pub(crate) fn body_line_height(&self) -> f64 {
        self.body_size * LINE_FACTOR * PT_TO_MM
    }

    pub(crate) fn title_line_height(&self) -> f64 {
        self.title_size * LINE_FACTOR * PT_TO_MM
    }

    /// Height of the title block: the title line plus two blank record lines.
    pub(crate) fn title_block_height(&self) -> f64 {
        self.title_line_height() + 2.0 * self.body_line_height()
    }

    /// Height of one record block: four lines plus one blank separator line.
    pub(crate) fn record_block_height(&self) -> f64 {
        (RECORD_LINES as f64 + 1.0) * self.body_line_height()
    }

    fn content_height(&self) -> f64 {
        self.page_height - 2.0 * self.margin
    }

    /// Record blocks that fit on the first page, below the title block.
    ///
    /// A page always takes at least one record so pagination progresses even
    /// under degenerate geometry.
    pub fn first_page_capacity(&self) -> usize {
        let available = self.content_height() - self.title_block_height();
        capacity(available, self.record_block_height())
    }

    /// Record blocks that fit on every page after the first.
    pub fn overflow_page_capacity(&self) -> usize {
        capacity(self.content_height(), self.record_block_height())
    }
}

fn capacity(available: f64, block_height: f64) -> usize {
    let fit = (available / block_height).floor();
    if fit < 1.0 { 1 } else { fit as usize }
}

/// The paginated document: one or more pages of blocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportLayout {
    pages: Vec<PageLayout>,
}

impl ReportLayout {
    pub fn pages(&self) -> &[PageLayout] {
        &self.pages
    }

    /// All record blocks across pages, in document order.
    pub fn record_blocks(&self) -> impl Iterator<Item = &RecordBlock> {
        self.pages.iter().flat_map(|p| p.blocks.iter()).filter_map(|b| match b {
            Block::Record(r) => Some(r),
            Block::Title(_) => None,
        })
    }
}

/// A single page worth of blocks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLayout {
    blocks: Vec<Block>,
}

impl PageLayout {
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }
}

/// A block of content positioned by the paginator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Block {
    Title(TitleBlock),
    Record(RecordBlock),
}

/// The document title; emitted exactly once, on the first page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TitleBlock {
    pub text: String,
    pub alignment: HorizontalAlignment,
}

/// The four lines shown for one invoice record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordBlock {
    lines: [String; RECORD_LINES],
}

impl RecordBlock {
    fn for_invoice(invoice: &Invoice) -> Self {
        Self {
            lines: [
                format!("Factura #{}", invoice.id()),
                format!("Cliente: {}", invoice.client_name()),
                format!("Monto: {}", invoice.total_amount()),
                format!("Fecha: {}", invoice.date()),
            ],
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Lay the invoice sequence out into pages.
///
/// The title block opens the first page regardless of sequence length; record
/// blocks follow in input order, spilling onto fresh pages whenever the
/// remaining page height cannot hold the next block.
pub fn paginate(invoices: &[Invoice], options: &LayoutOptions) -> ReportLayout {
    let record_height = options.record_block_height();

    let mut pages = vec![PageLayout {
        blocks: vec![Block::Title(TitleBlock {
            text: options.title.clone(),
            alignment: options.title_alignment,
        })],
    }];
    let mut remaining = options.content_height() - options.title_block_height();
    let mut records_on_page = 0usize;

    for invoice in invoices {
        // At least one record per page, even when geometry says zero fit.
        if remaining < record_height && records_on_page > 0 {
            pages.push(PageLayout { blocks: Vec::new() });
            remaining = options.content_height();
            records_on_page = 0;
        }

        pages
            .last_mut()
            .unwrap()
            .blocks
            .push(Block::Record(RecordBlock::for_invoice(invoice)));
        remaining -= record_height;
        records_on_page += 1;
    }

    ReportLayout { pages }
}

#[cfg(test)]
mod tests {
    use super::*;
    use facturas_invoicing::InvoiceId;
    use proptest::prelude::*;

    fn invoice(id: &str, name: &str, amount: &str, date: &str) -> Invoice {
        Invoice::new(InvoiceId::new(id).unwrap(), name, amount, date).unwrap()
    }

    fn numbered_invoices(n: usize) -> Vec<Invoice> {
        (1..=n)
            .map(|i| invoice(&i.to_string(), "Cliente", "100", "2024-01-01"))
            .collect()
    }

    #[test]
    fn empty_sequence_yields_title_only() {
        let layout = paginate(&[], &LayoutOptions::default());
        assert_eq!(layout.pages().len(), 1);
        assert_eq!(layout.pages()[0].blocks().len(), 1);
        assert!(matches!(layout.pages()[0].blocks()[0], Block::Title(_)));
    }

    #[test]
    fn record_block_carries_fields_verbatim() {
        let inv = invoice("1", "Ana", "100", "2024-01-01");
        let layout = paginate(std::slice::from_ref(&inv), &LayoutOptions::default());

        let record = layout.record_blocks().next().unwrap();
        assert_eq!(
            record.lines(),
            [
                "Factura #1",
                "Cliente: Ana",
                "Monto: 100",
                "Fecha: 2024-01-01",
            ]
        );
    }

    #[test]
    fn amount_and_date_are_not_reformatted() {
        let inv = invoice("9", "Luis", "0099.500", "31/12/2024");
        let layout = paginate(std::slice::from_ref(&inv), &LayoutOptions::default());

        let record = layout.record_blocks().next().unwrap();
        assert_eq!(record.lines()[2], "Monto: 0099.500");
        assert_eq!(record.lines()[3], "Fecha: 31/12/2024");
    }

    #[test]
    fn overflow_starts_a_second_page() {
        let options = LayoutOptions::default();
        let n = options.first_page_capacity() + 1;
        let layout = paginate(&numbered_invoices(n), &options);

        assert_eq!(layout.pages().len(), 2);
        assert_eq!(
            layout.pages()[0].blocks().len(),
            options.first_page_capacity() + 1, // title + records
        );
        assert_eq!(layout.pages()[1].blocks().len(), 1);
    }

    #[test]
    fn exactly_full_first_page_stays_single() {
        let options = LayoutOptions::default();
        let n = options.first_page_capacity();
        let layout = paginate(&numbered_invoices(n), &options);
        assert_eq!(layout.pages().len(), 1);
    }

    proptest! {
        /// Property: for any N ≥ 0, the layout has exactly N record blocks in
        /// input order plus exactly one title block, on the first page.
        #[test]
        fn n_invoices_produce_n_ordered_record_blocks(n in 0usize..80) {
            let options = LayoutOptions::default();
            let layout = paginate(&numbered_invoices(n), &options);

            let titles = layout
                .pages()
                .iter()
                .flat_map(|p| p.blocks())
                .filter(|b| matches!(b, Block::Title(_)))
                .count();
            prop_assert_eq!(titles, 1);
            prop_assert!(matches!(layout.pages()[0].blocks()[0], Block::Title(_)));

            let ids: Vec<String> = layout
                .record_blocks()
                .map(|r| r.lines()[0].clone())
                .collect();
            let expected: Vec<String> =
                (1..=n).map(|i| format!("Factura #{i}")).collect();
            prop_assert_eq!(ids, expected);
        }

        /// Property: no page exceeds its record capacity and only the last
        /// page may run short.
        #[test]
        fn pages_respect_capacity(n in 0usize..120) {
            let options = LayoutOptions::default();
            let layout = paginate(&numbered_invoices(n), &options);

            for (idx, page) in layout.pages().iter().enumerate() {
                let records = page
                    .blocks()
                    .iter()
                    .filter(|b| matches!(b, Block::Record(_)))
                    .count();
                let cap = if idx == 0 {
                    options.first_page_capacity()
                } else {
                    options.overflow_page_capacity()
                };
                prop_assert!(records <= cap);

                let is_last = idx + 1 == layout.pages().len();
                if !is_last {
                    prop_assert_eq!(records, cap);
                }
            }
        }
    }
}
