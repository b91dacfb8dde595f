//! PDF rendering of a report model.
//!
//! Draws onto US Letter pages with a top-down point cursor, breaking to a
//! new page when the cursor reaches the bottom margin.

use std::io::BufWriter;

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use rust_decimal::Decimal;
use spendwise_core::reports::ReportModel;

use crate::error::ApiError;

const PAGE_WIDTH_MM: f32 = 215.9;
const PAGE_HEIGHT_MM: f32 = 279.4;
const PT_TO_MM: f32 = 25.4 / 72.0;

const LEFT_MARGIN_PT: f32 = 50.0;
const TOP_START_PT: f32 = 750.0;
const BOTTOM_MARGIN_PT: f32 = 50.0;
const LINE_STEP_PT: f32 = 20.0;
const SECTION_STEP_PT: f32 = 30.0;
const MAX_LINE_CHARS: usize = 90;

struct PageCursor<'a> {
    doc: &'a printpdf::PdfDocumentReference,
    layer: PdfLayerReference,
    font: &'a IndirectFontRef,
    y_pt: f32,
}

impl<'a> PageCursor<'a> {
    fn write_line(&mut self, text: &str, size: f32, step_pt: f32) {
        if self.y_pt < BOTTOM_MARGIN_PT {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "content");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y_pt = TOP_START_PT;
        }
        let truncated: String = text.chars().take(MAX_LINE_CHARS).collect();
        self.layer.use_text(
            truncated,
            size,
            Mm(LEFT_MARGIN_PT * PT_TO_MM),
            Mm(self.y_pt * PT_TO_MM),
            self.font,
        );
        self.y_pt -= step_pt;
    }
}

fn percent_label(percent: Option<Decimal>) -> String {
    match percent {
        Some(p) => format!("{p}%"),
        None => "no limit".to_string(),
    }
}

/// Renders the report into PDF bytes.
pub fn render_report(report: &ReportModel) -> Result<Vec<u8>, ApiError> {
    let (doc, page, layer) = PdfDocument::new(
        format!("Expense Report {}", report.period),
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "content",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ApiError::Internal(format!("Failed to load PDF font: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ApiError::Internal(format!("Failed to load PDF font: {e}")))?;

    let mut cursor = PageCursor {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        font: &bold,
        y_pt: TOP_START_PT,
    };

    cursor.write_line(
        &format!("Expense Report for {}", report.owner_email),
        16.0,
        LINE_STEP_PT,
    );
    cursor.font = &font;
    cursor.write_line(&format!("Period: {}", report.period), 11.0, LINE_STEP_PT);
    cursor.write_line(
        &format!(
            "Generated: {}",
            report.generated_at.format("%Y-%m-%d %H:%M UTC")
        ),
        11.0,
        SECTION_STEP_PT,
    );

    cursor.font = &bold;
    cursor.write_line("Budgets", 13.0, LINE_STEP_PT);
    cursor.font = &font;
    if report.rows.is_empty() {
        cursor.write_line("No categories defined.", 11.0, LINE_STEP_PT);
    }
    for row in &report.rows {
        let remaining = row.budget - row.spent;
        cursor.write_line(
            &format!(
                "{} | budget {} | spent {} | remaining {} | {}",
                row.name,
                row.budget,
                row.spent,
                remaining,
                percent_label(row.percent_used)
            ),
            11.0,
            LINE_STEP_PT,
        );
    }
    cursor.font = &bold;
    cursor.write_line(
        &format!(
            "Total | budget {} | spent {} | {}",
            report.total.budget,
            report.total.spent,
            percent_label(report.total.percent_used)
        ),
        11.0,
        SECTION_STEP_PT,
    );

    cursor.write_line("Recent expenses", 13.0, LINE_STEP_PT);
    cursor.font = &font;
    if report.recent_expenses.is_empty() {
        cursor.write_line("No expenses recorded.", 11.0, LINE_STEP_PT);
    }
    for line in &report.recent_expenses {
        cursor.write_line(
            &format!(
                "{} | {} | {} | {}",
                line.entry_date, line.category_name, line.amount, line.note
            ),
            11.0,
            LINE_STEP_PT,
        );
    }

    let mut bytes = Vec::new();
    doc.save(&mut BufWriter::new(&mut bytes))
        .map_err(|e| ApiError::Internal(format!("Failed to write PDF: {e}")))?;
    Ok(bytes)
}
