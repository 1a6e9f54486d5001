use super::ExtractionError;

/// Extracts text page by page, one `\n` between pages.
pub fn extract(payload: &[u8]) -> Result<String, ExtractionError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(payload)
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    Ok(join_pages(&pages))
}

fn join_pages(pages: &[String]) -> String {
    pages.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal uncompressed PDF with one line of Helvetica text per page.
    fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let font_id = 3 + 2 * pages.len();
        let kids: Vec<String> = (0..pages.len())
            .map(|i| format!("{} 0 R", 3 + 2 * i))
            .collect();

        let mut objects = vec![
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            format!(
                "<< /Type /Pages /Kids [{}] /Count {} >>",
                kids.join(" "),
                pages.len()
            ),
        ];
        for (i, text) in pages.iter().enumerate() {
            let content = format!("BT /F1 24 Tf 72 700 Td ({text}) Tj ET");
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 {font_id} 0 R >> >> /Contents {} 0 R >>",
                4 + 2 * i
            ));
            objects.push(format!(
                "<< /Length {} >>\nstream\n{content}\nendstream",
                content.len()
            ));
        }
        objects.push(
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
                .to_string(),
        );

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
        }

        let xref_at = pdf.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            xref.push_str(&format!("{offset:010} 00000 n \n"));
        }
        pdf.extend_from_slice(xref.as_bytes());
        pdf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
                objects.len() + 1
            )
            .as_bytes(),
        );
        pdf
    }

    #[test]
    fn test_two_page_pdf_text_in_page_order() {
        let pdf = build_pdf(&["Alpha page", "Beta page"]);
        let text = extract(&pdf).unwrap();

        let alpha = text.find("Alpha").expect("first page text");
        let beta = text.find("Beta").expect("second page text");
        assert!(alpha < beta, "pages out of order: {text:?}");
        assert!(text[alpha..beta].contains('\n'), "pages not separated: {text:?}");
        assert_eq!(text, text.trim());
    }

    #[test]
    fn test_join_pages_separates_with_newline() {
        let pages = vec!["Page one".to_string(), "Page two".to_string()];
        assert_eq!(join_pages(&pages), "Page one\nPage two");
    }

    #[test]
    fn test_join_pages_trims_outer_whitespace() {
        let pages = vec!["\n  Summary\n".to_string(), "Skills  \n\n".to_string()];
        assert_eq!(join_pages(&pages), "Summary\n\nSkills");
    }

    #[test]
    fn test_join_pages_empty_document() {
        assert_eq!(join_pages(&[]), "");
    }
}
