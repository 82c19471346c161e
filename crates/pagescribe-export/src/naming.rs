// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Output file naming.

use pagescribe_core::types::{ExportFormat, Page};

/// Base name used when a page has no usable filename.
pub const UNTITLED: &str = "Untitled";

/// Extensions stripped from suggested names so exports never end up as
/// `notes.md.txt`.
const KNOWN_EXTENSIONS: [&str; 2] = [".md", ".txt"];

/// Characters dropped so a name stays a single path component.
const PATH_CHARS: [char; 3] = ['/', '\\', '\0'];

/// The file stem a suggested filename exports under.
///
/// Drops path separators, trims whitespace and leading dots, strips any
/// trailing `.md`/`.txt` (repeatedly), and falls back to [`UNTITLED`] when
/// nothing is left. The result is always a plain file name inside the
/// export folder.
pub fn base_name(suggested: &str) -> String {
    let flattened: String = suggested.chars().filter(|c| !PATH_CHARS.contains(c)).collect();
    let mut name = flattened.trim().trim_start_matches('.').trim_start();
    while let Some(stripped) = KNOWN_EXTENSIONS
        .iter()
        .find_map(|ext| name.strip_suffix(*ext))
    {
        name = stripped.trim_end();
    }
    if name.is_empty() {
        UNTITLED.to_owned()
    } else {
        name.to_owned()
    }
}

/// The file name a page exports to before collision resolution.
pub fn target_name(page: &Page, format: ExportFormat) -> String {
    format!("{}.{}", base_name(&page.suggested_filename), format.extension())
}

/// The `n`th candidate name for `base`: `base.ext`, then `base 1.ext`,
/// `base 2.ext`, ...
pub fn numbered_name(base: &str, extension: &str, n: u32) -> String {
    if n == 0 {
        format!("{base}.{extension}")
    } else {
        format!("{base} {n}.{extension}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagescribe_core::types::ImageId;

    fn page(name: &str) -> Page {
        Page::new(ImageId::new(), name.into(), String::new())
    }

    #[test]
    fn existing_extension_is_replaced() {
        assert_eq!(
            target_name(&page("  Daily Reflection.md  "), ExportFormat::PlainText),
            "Daily Reflection.txt"
        );
        assert_eq!(
            target_name(&page("todo.txt"), ExportFormat::Markdown),
            "todo.md"
        );
    }

    #[test]
    fn blank_name_becomes_untitled() {
        assert_eq!(target_name(&page("   "), ExportFormat::Markdown), "Untitled.md");
        assert_eq!(target_name(&page(".md"), ExportFormat::PlainText), "Untitled.txt");
    }

    #[test]
    fn stacked_extensions_are_all_stripped() {
        assert_eq!(base_name("notes.md.txt"), "notes");
    }

    #[test]
    fn other_dots_are_kept() {
        assert_eq!(base_name("v1.2 release"), "v1.2 release");
        assert_eq!(base_name("2024-10-05.mdx"), "2024-10-05.mdx");
    }

    #[test]
    fn names_cannot_leave_the_folder() {
        assert_eq!(base_name("../escaped"), "escaped");
        assert_eq!(base_name("/tmp/out/abs"), "tmpoutabs");
        assert_eq!(base_name("..\\..\\win"), "win");
        assert_eq!(base_name("a/b.md"), "ab");
        assert_eq!(base_name(".hidden"), "hidden");
    }

    #[test]
    fn dot_only_names_become_untitled() {
        for name in [".", "..", "../..", "/", " .. .md"] {
            assert_eq!(base_name(name), UNTITLED, "{name:?}");
        }
    }

    #[test]
    fn numbered_candidates() {
        assert_eq!(numbered_name("base", "md", 0), "base.md");
        assert_eq!(numbered_name("base", "md", 1), "base 1.md");
        assert_eq!(numbered_name("base", "txt", 12), "base 12.txt");
    }
}
