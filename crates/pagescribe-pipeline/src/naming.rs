// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Filename suggestion from recognised text.
//
// Looks at the first three non-blank lines only. At each position a line
// containing a date separator (`/` or `-`) wins outright; otherwise a line of
// reasonable length is taken. Nothing qualifying falls back to today's date.

use chrono::{Local, NaiveDate};

/// Characters that may not appear in a suggested name.
pub const INVALID_FILENAME_CHARS: &[char] = &['/', '<', '>', ':', '"', '|', '?', '*', '\\'];

/// Number of leading non-blank lines considered.
const CANDIDATE_LINES: usize = 3;

/// Inclusive length bounds (in chars) for a plain title line.
const MIN_TITLE_CHARS: usize = 3;
const MAX_TITLE_CHARS: usize = 50;

/// Suggest a file name for `text`, falling back to today's local date.
pub fn suggest_name(text: &str) -> String {
    suggest_name_on(text, Local::now().date_naive())
}

/// Suggest a file name for `text`, falling back to `today` as `YYYY-MM-DD`.
///
/// The result is never empty and never contains [`INVALID_FILENAME_CHARS`].
pub fn suggest_name_on(text: &str, today: NaiveDate) -> String {
    let candidates = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(CANDIDATE_LINES);

    for line in candidates {
        if line.contains(['/', '-']) {
            let cleaned = sanitize(line);
            if !cleaned.is_empty() {
                return cleaned;
            }
        }

        let chars = line.chars().count();
        if (MIN_TITLE_CHARS..=MAX_TITLE_CHARS).contains(&chars) {
            let cleaned = sanitize(line);
            if !cleaned.is_empty() {
                return cleaned;
            }
        }
    }

    today.format("%Y-%m-%d").to_string()
}

/// Strip characters that are not allowed in file names, then trim.
pub fn sanitize(line: &str) -> String {
    line.chars()
        .filter(|c| !INVALID_FILENAME_CHARS.contains(c))
        .collect::<String>()
        .trim()
        .to_owned()
}
