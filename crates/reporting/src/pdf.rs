//! PDF emission from a [`ReportLayout`].
//!
//! The paginator has already decided what goes on which page; this module
//! only turns blocks into text operations with printpdf's built-in Helvetica.

use std::io::BufWriter;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::error::RenderError;
use crate::layout::{Block, HorizontalAlignment, LayoutOptions, ReportLayout, PT_TO_MM};

/// Rough average glyph advance for Helvetica, in em.
///
/// printpdf exposes no metrics for built-in fonts, so centered and
/// right-aligned text is positioned from this estimate.
const AVG_GLYPH_ADVANCE_EM: f64 = 0.5;

const LAYER_NAME: &str = "contenido";

pub(crate) fn emit(layout: &ReportLayout, options: &LayoutOptions) -> Result<Vec<u8>, RenderError> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        options.title.as_str(),
        Mm(options.page_width),
        Mm(options.page_height),
        LAYER_NAME,
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Font(e.to_string()))?;

    for (index, page) in layout.pages().iter().enumerate() {
        let layer = if index == 0 {
            doc.get_page(first_page).get_layer(first_layer)
        } else {
            let (page_idx, layer_idx) =
                doc.add_page(Mm(options.page_width), Mm(options.page_height), LAYER_NAME);
            doc.get_page(page_idx).get_layer(layer_idx)
        };

        let mut cursor = options.page_height - options.margin;
        for block in page.blocks() {
            match block {
                Block::Title(title) => {
                    cursor -= options.title_line_height();
                    let x = aligned_x(&title.text, title.alignment, options.title_size, options);
                    layer.use_text(
                        title.text.as_str(),
                        options.title_size,
                        Mm(x),
                        Mm(cursor),
                        &font,
                    );
                    // Two blank record lines below the title.
                    cursor -= 2.0 * options.body_line_height();
                }
                Block::Record(record) => {
                    cursor = emit_record_lines(&layer, record.lines(), cursor, options, &font);
                    // One blank separator line between records.
                    cursor -= options.body_line_height();
                }
            }
        }
    }

    let mut bytes = Vec::new();
    doc.save(&mut BufWriter::new(&mut bytes))
        .map_err(|e| RenderError::Assembly(e.to_string()))?;
    Ok(bytes)
}

fn emit_record_lines(
    layer: &PdfLayerReference,
    lines: &[String],
    mut cursor: f64,
    options: &LayoutOptions,
    font: &IndirectFontRef,
) -> f64 {
    for line in lines {
        cursor -= options.body_line_height();
        layer.use_text(
            line.as_str(),
            options.body_size,
            Mm(options.margin),
            Mm(cursor),
            font,
        );
    }
    cursor
}

fn aligned_x(
    text: &str,
    alignment: HorizontalAlignment,
    size: f64,
    options: &LayoutOptions,
) -> f64 {
    let estimated_width = text.chars().count() as f64 * size * AVG_GLYPH_ADVANCE_EM * PT_TO_MM;
    let x = match alignment {
        HorizontalAlignment::Left => options.margin,
        HorizontalAlignment::Center => (options.page_width - estimated_width) / 2.0,
        HorizontalAlignment::Right => options.page_width - options.margin - estimated_width,
    };
    x.max(options.margin)
}
