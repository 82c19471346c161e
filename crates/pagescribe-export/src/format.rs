// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Content rendering per export format.

use pagescribe_core::types::{ExportFormat, Page};

/// Render `text` for `format`.
///
/// Plain text is returned unchanged. Markdown gains a level-one heading
/// when a filename is supplied: `"# {filename}\n\n{text}"`.
pub fn render(format: ExportFormat, text: &str, filename: Option<&str>) -> String {
    match (format, filename) {
        (ExportFormat::Markdown, Some(name)) => format!("# {name}\n\n{text}"),
        _ => text.to_owned(),
    }
}

/// Render a page, using its trimmed suggested filename as the heading.
///
/// The name is trimmed before use, and a blank name gets no heading at all
/// instead of a bare `# ` line.
pub fn page_content(page: &Page, format: ExportFormat) -> String {
    let name = page.suggested_filename.trim();
    render(format, &page.text, (!name.is_empty()).then_some(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagescribe_core::types::ImageId;

    #[test]
    fn plain_text_is_identity() {
        let text = "line one\n\n  indented\n# not a heading";
        assert_eq!(render(ExportFormat::PlainText, text, None), text);
        assert_eq!(render(ExportFormat::PlainText, text, Some("Notes")), text);
    }

    #[test]
    fn markdown_adds_heading() {
        assert_eq!(
            render(ExportFormat::Markdown, "body", Some("Notes")),
            "# Notes\n\nbody"
        );
    }

    #[test]
    fn markdown_without_filename_is_identity() {
        assert_eq!(render(ExportFormat::Markdown, "body", None), "body");
    }

    #[test]
    fn page_heading_uses_trimmed_name() {
        let page = Page::new(ImageId::new(), "  Receipt  ".into(), "total 12.50".into());
        assert_eq!(page_content(&page, ExportFormat::Markdown), "# Receipt\n\ntotal 12.50");

        let unnamed = Page::new(ImageId::new(), "   ".into(), "text".into());
        assert_eq!(page_content(&unnamed, ExportFormat::Markdown), "text");
    }
}
