//! Word (OOXML) text extraction.
//!
//! A `.docx` file is a zip archive; the body lives in `word/document.xml`.
//! Each top-level `w:p` paragraph becomes one line made of its own runs.
//! Paragraphs nested inside it (text boxes) do not contribute to that line.

use std::io::{Cursor, Read};

use roxmltree::{Document, Node};

use super::ExtractionError;

const DOCUMENT_PART: &str = "word/document.xml";
const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

pub fn extract(payload: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(payload))
        .map_err(|e| ExtractionError::Docx(e.to_string()))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractionError::Docx(format!("{DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractionError::Docx(e.to_string()))?;

    Ok(paragraphs_from_xml(&xml)?.join("\n").trim().to_string())
}

fn paragraphs_from_xml(xml: &str) -> Result<Vec<String>, ExtractionError> {
    let doc = Document::parse(xml)
        .map_err(|e| ExtractionError::Docx(format!("{DOCUMENT_PART}: {e}")))?;

    Ok(doc
        .descendants()
        .filter(|node| is_wordml(node, "p") && owning_paragraph(*node).is_none())
        .map(paragraph_text)
        .collect())
}

fn paragraph_text(paragraph: Node) -> String {
    let mut text = String::new();
    for node in paragraph.descendants() {
        // only run content; `w:tab` also appears in tab-stop definitions under `w:pPr`
        let in_run = node.parent().is_some_and(|p| is_wordml(&p, "r"));
        if !node.is_element() || !in_run || owning_paragraph(node) != Some(paragraph) {
            continue;
        }
        match node.tag_name().name() {
            "t" => text.push_str(node.text().unwrap_or_default()),
            "tab" => text.push('\t'),
            "br" | "cr" => text.push('\n'),
            _ => {}
        }
    }
    text
}

/// Nearest enclosing `w:p`, excluding the node itself.
fn owning_paragraph<'a, 'input>(node: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    node.ancestors().skip(1).find(|a| is_wordml(a, "p"))
}

fn is_wordml(node: &Node, local_name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == local_name
        && node.tag_name().namespace() == Some(WORDML_NS)
}
