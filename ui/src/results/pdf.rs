//! Analysis report as a PDF, assembled with `lopdf`.
//!
//! Uses the two standard Helvetica faces with `WinAnsiEncoding`, so no font
//! data is embedded and Latin-1 text (plus the cp1252 extras such as `€` and
//! `–`) is written as-is. Characters outside that set become `?`. Text runs
//! top to bottom on A4 pages; the compliance table breaks across pages and
//! repeats its header.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, ObjectId, Stream, StringFormat};

use super::AnalysisView;

pub const REPORT_FILENAME: &str = "document-analysis-report.pdf";
pub const REPORT_TITLE: &str = "Document Analysis Report";
pub const NO_SUMMARY: &str = "No summary available";

const PAGE_WIDTH: f32 = 595.0;
const PAGE_HEIGHT: f32 = 842.0;
const MARGIN: f32 = 50.0;
const CONTENT_WIDTH: f32 = PAGE_WIDTH - 2.0 * MARGIN;
// Average Helvetica glyph advance as a share of the font size, rounded up.
const GLYPH_WIDTH: f32 = 0.55;
const CELL_PADDING: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Face {
    Regular,
    Bold,
}

impl Face {
    fn resource(self) -> &'static str {
        match self {
            Face::Regular => "F1",
            Face::Bold => "F2",
        }
    }
}

/// Build the report: title, summary, then the compliance table.
pub fn analysis_report(view: &AnalysisView) -> Result<Vec<u8>, String> {
    let mut layout = Layout::new();
    layout.text_block(REPORT_TITLE, 20.0, Face::Bold);
    layout.gap(12.0);

    layout.text_block("Summary", 14.0, Face::Bold);
    layout.gap(4.0);
    layout.text_block(view.summary.as_deref().unwrap_or(NO_SUMMARY), 11.0, Face::Regular);
    layout.gap(16.0);

    layout.text_block("Compliance Report", 14.0, Face::Bold);
    layout.gap(6.0);
    let rows: Vec<[&str; 2]> = view
        .compliant
        .iter()
        .map(|label| [label.as_str(), "Compliant"])
        .chain(view.missing.iter().map(|label| [label.as_str(), "Missing"]))
        .collect();
    layout.table(["Requirement", "Status"], [0.7, 0.3], &rows);

    assemble(layout.into_pages())
}

/// Turn laid-out pages into a saved document.
fn assemble(pages: Vec<Vec<Operation>>) -> Result<Vec<u8>, String> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let regular = doc.add_object(font("Helvetica"));
    let bold = doc.add_object(font("Helvetica-Bold"));
    let resources = doc.add_object(dictionary! {
        "Font" => dictionary! {
            Face::Regular.resource() => regular,
            Face::Bold.resource() => bold,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let encoded = Content { operations }
            .encode()
            .map_err(|err| err.to_string())?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id: ObjectId = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let media_box: Vec<Object> = vec![
        Object::Integer(0),
        Object::Integer(0),
        PAGE_WIDTH.into(),
        PAGE_HEIGHT.into(),
    ];
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources,
            "MediaBox" => media_box,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).map_err(|err| err.to_string())?;
    Ok(bytes)
}

fn font(base: &str) -> lopdf::Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => base,
        "Encoding" => "WinAnsiEncoding",
    }
}

/// Cursor-based page layout producing content operations per page.
struct Layout {
    pages: Vec<Vec<Operation>>,
    current: Vec<Operation>,
    /// Distance of the next baseline budget from the page bottom.
    cursor: f32,
}

impl Layout {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: Vec::new(),
            cursor: PAGE_HEIGHT - MARGIN,
        }
    }

    fn remaining(&self) -> f32 {
        self.cursor - MARGIN
    }

    fn new_page(&mut self) {
        let finished = std::mem::take(&mut self.current);
        self.pages.push(finished);
        self.cursor = PAGE_HEIGHT - MARGIN;
    }

    fn ensure(&mut self, height: f32) {
        // A block taller than a page is drawn anyway rather than looping.
        if height > self.remaining() && self.cursor < PAGE_HEIGHT - MARGIN {
            self.new_page();
        }
    }

    fn gap(&mut self, height: f32) {
        self.cursor -= height;
    }

    fn text_block(&mut self, text: &str, size: f32, face: Face) {
        let leading = size * 1.3;
        for line in wrap(text, chars_per_line(CONTENT_WIDTH, size)) {
            self.ensure(leading);
            self.cursor -= leading;
            self.show_text(MARGIN, self.cursor + size * 0.25, size, face, &line);
        }
    }

    fn table(&mut self, header: [&str; 2], shares: [f32; 2], rows: &[[&str; 2]]) {
        let size = 10.0;
        self.ensure(row_height(&header, shares, size) * 2.0);
        self.table_row(header, shares, size, Face::Bold);
        for row in rows {
            if row_height(row, shares, size) > self.remaining() {
                self.new_page();
                self.table_row(header, shares, size, Face::Bold);
            }
            self.table_row(*row, shares, size, Face::Regular);
        }
    }

    fn table_row(&mut self, cells: [&str; 2], shares: [f32; 2], size: f32, face: Face) {
        let leading = size * 1.3;
        let height = row_height(&cells, shares, size);
        let top = self.cursor;
        let bottom = top - height;

        let mut x = MARGIN;
        for (cell, share) in cells.iter().zip(shares) {
            let width = CONTENT_WIDTH * share;
            self.current.extend([
                Operation::new("G", vec![0.6_f32.into()]),
                Operation::new("w", vec![0.5_f32.into()]),
                Operation::new(
                    "re",
                    vec![x.into(), bottom.into(), width.into(), height.into()],
                ),
                Operation::new("S", vec![]),
            ]);
            let mut baseline = top - CELL_PADDING - size;
            for line in wrap(cell, chars_per_line(width - 2.0 * CELL_PADDING, size)) {
                self.show_text(x + CELL_PADDING, baseline, size, face, &line);
                baseline -= leading;
            }
            x += width;
        }
        self.cursor = bottom;
    }

    fn show_text(&mut self, x: f32, y: f32, size: f32, face: Face, text: &str) {
        self.current.extend([
            Operation::new("BT", vec![]),
            Operation::new("Tf", vec![face.resource().into(), size.into()]),
            Operation::new("Td", vec![x.into(), y.into()]),
            Operation::new(
                "Tj",
                vec![Object::String(win_ansi(text), StringFormat::Literal)],
            ),
            Operation::new("ET", vec![]),
        ]);
    }

    fn into_pages(mut self) -> Vec<Vec<Operation>> {
        self.new_page();
        self.pages
    }
}

fn row_height(cells: &[&str; 2], shares: [f32; 2], size: f32) -> f32 {
    let lines = cells
        .iter()
        .zip(shares)
        .map(|(cell, share)| {
            let width = CONTENT_WIDTH * share - 2.0 * CELL_PADDING;
            wrap(cell, chars_per_line(width, size)).len()
        })
        .max()
        .unwrap_or(1);
    lines as f32 * size * 1.3 + 2.0 * CELL_PADDING
}

fn chars_per_line(width: f32, size: f32) -> usize {
    ((width / (size * GLYPH_WIDTH)).floor() as usize).max(1)
}

/// Greedy word wrap; words longer than a line are split. Always yields at
/// least one line.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut line = String::new();
        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();
            while word.len() > max_chars {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                }
                let rest = word.split_off(max_chars);
                lines.push(word.into_iter().collect());
                word = rest;
            }
            let line_len = line.chars().count();
            if !line.is_empty() && line_len + 1 + word.len() > max_chars {
                lines.push(std::mem::take(&mut line));
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.extend(word);
        }
        if !line.is_empty() {
            lines.push(line);
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Encode `text` as WinAnsi (cp1252) bytes.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(ch: char) -> u8 {
    match ch {
        ' '..='~' | '\u{a0}'..='\u{ff}' => ch as u8,
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        'ˆ' => 0x88,
        '‰' => 0x89,
        'Š' => 0x8a,
        '‹' => 0x8b,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '˜' => 0x98,
        '™' => 0x99,
        'š' => 0x9a,
        '›' => 0x9b,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => b'?',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every `Tj` string in page order, grouped per page.
    fn shown_text(bytes: &[u8]) -> Vec<Vec<Vec<u8>>> {
        let doc = Document::load_mem(bytes).unwrap();
        doc.get_pages()
            .values()
            .map(|&page_id| {
                let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
                content
                    .operations
                    .into_iter()
                    .filter(|op| op.operator == "Tj")
                    .filter_map(|op| match op.operands.first() {
                        Some(Object::String(bytes, _)) => Some(bytes.clone()),
                        _ => None,
                    })
                    .collect()
            })
            .collect()
    }

    fn all_text(bytes: &[u8]) -> Vec<Vec<u8>> {
        shown_text(bytes).into_iter().flatten().collect()
    }

    fn view(summary: Option<&str>, compliant: usize, missing: usize) -> AnalysisView {
        AnalysisView {
            summary: summary.map(str::to_string),
            compliant: (0..compliant).map(|i| format!("Requirement {i}")).collect(),
            missing: (0..missing).map(|i| format!("Gap {i}")).collect(),
            ..AnalysisView::default()
        }
    }

    #[test]
    fn report_has_title_summary_and_table() {
        let bytes = analysis_report(&view(Some("Covers fire safety."), 1, 1)).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));

        let text = all_text(&bytes);
        let position = |needle: &str| text.iter().position(|t| t == needle.as_bytes());
        assert_eq!(position(REPORT_TITLE), Some(0));
        assert!(position("Summary").is_some());
        assert!(position("Covers fire safety.").is_some());
        assert!(position("Requirement").is_some());
        assert!(position("Status").is_some());
        assert!(position("Compliant").is_some());
        assert!(position("Missing").is_some());
        assert!(position("Requirement 0").unwrap() < position("Gap 0").unwrap());
    }

    #[test]
    fn missing_summary_has_placeholder() {
        let bytes = analysis_report(&view(None, 0, 0)).unwrap();
        assert_eq!(shown_text(&bytes).len(), 1);
        assert!(all_text(&bytes).contains(&NO_SUMMARY.as_bytes().to_vec()));
    }

    #[test]
    fn long_tables_break_pages_and_repeat_header() {
        let pages = shown_text(&analysis_report(&view(None, 80, 40)).unwrap());
        assert!(pages.len() >= 2);
        for page in &pages[1..] {
            assert_eq!(page.first().map(Vec::as_slice), Some(&b"Requirement"[..]));
        }
        assert!(pages.iter().flatten().any(|t| t == b"Gap 39"));
    }

    #[test]
    fn latin1_text_survives_export() {
        let mut report = view(Some("Política de seguridad: señalización – 10 €"), 0, 0);
        report.compliant = vec!["Salidas de emergencia señalizadas".into()];

        let text = all_text(&analysis_report(&report).unwrap());
        assert!(text.contains(&win_ansi("Política de seguridad: señalización – 10 €")));
        assert!(text.contains(&win_ansi("Salidas de emergencia señalizadas")));
        assert_eq!(
            win_ansi("ñ – €"),
            vec![0xf1, b' ', 0x96, b' ', 0x80]
        );
    }

    #[test]
    fn unencodable_characters_become_question_marks() {
        assert_eq!(win_ansi("a→b 日"), b"a?b ?");
        assert_eq!(win_ansi("(x) \\"), b"(x) \\");
    }

    #[test]
    fn wrap_splits_on_words_and_long_tokens() {
        assert_eq!(wrap("one two three", 7), ["one two", "three"]);
        assert_eq!(wrap("abcdefghij", 4), ["abcd", "efgh", "ij"]);
        assert_eq!(wrap("", 10), [""]);
    }
}
