// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// One-file-per-page export into a folder.
//
// Existing files are never overwritten: a name that is taken at write time
// gets a counter (`base 1.ext`, `base 2.ext`, ...). The check is done by
// exclusive create, so it holds even if something else writes into the
// folder between pages.
//
// The batch is not transactional. A write error stops the batch at that
// page and the files already written stay on disk.

use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::{Component, Path, PathBuf};

use pagescribe_core::error::Result;
use pagescribe_core::types::{ExportFormat, Page};
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::format::page_content;
use crate::naming::{base_name, numbered_name};

/// Prefix of the per-export folders created for sharing.
const SHARE_DIR_PREFIX: &str = "pagescribe-share";

/// Writes pages into a single folder.
#[derive(Debug, Clone)]
pub struct FolderExporter {
    dir: PathBuf,
}

impl FolderExporter {
    /// Export into an existing, caller-chosen folder.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Export into a fresh folder under the OS temporary directory.
    ///
    /// Each call gets its own folder so files from earlier shares are never
    /// renamed or replaced.
    pub fn temporary() -> Result<Self> {
        let dir = std::env::temp_dir().join(format!("{SHARE_DIR_PREFIX}-{}", Uuid::new_v4()));
        fs::create_dir_all(&dir)?;
        debug!(path = %dir.display(), "created share folder");
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write every page, in order, and return the written paths in the same
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`PagescribeError::Io`](pagescribe_core::PagescribeError::Io)
    /// for the first page that cannot be written. Later pages are not
    /// attempted; earlier files are left in place.
    #[instrument(skip_all, fields(dir = %self.dir.display(), pages = pages.len(), ?format))]
    pub fn export(&self, pages: &[Page], format: ExportFormat) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(pages.len());
        for page in pages {
            let base = base_name(&page.suggested_filename);
            let contents = page_content(page, format);
            let path = write_unique(&self.dir, &base, format.extension(), contents.as_bytes())?;
            debug!(page = %page.id(), path = %path.display(), "page written");
            written.push(path);
        }
        info!(files = written.len(), "export complete");
        Ok(written)
    }
}

/// Write `contents` to the first free name among `base.ext`, `base 1.ext`,
/// `base 2.ext`, ... in `dir`, returning the path used.
///
/// `base` must be a single file name; anything that would resolve outside
/// `dir` is refused with an `InvalidInput` I/O error.
pub fn write_unique(dir: &Path, base: &str, extension: &str, contents: &[u8]) -> Result<PathBuf> {
    let mut n = 0u32;
    loop {
        let name = numbered_name(base, extension, n);
        let path = dir.join(&name);
        if !stays_in(dir, &path) {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                format!("`{name}` is not a plain file name"),
            )
            .into());
        }
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                file.write_all(contents)?;
                file.flush()?;
                return Ok(path);
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => n += 1,
            Err(e) => return Err(e.into()),
        }
    }
}

fn stays_in(dir: &Path, path: &Path) -> bool {
    let mut components = path.strip_prefix(dir).map(Path::components).into_iter().flatten();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagescribe_core::PagescribeError;
    use pagescribe_core::types::ImageId;
    use tempfile::TempDir;

    fn page(name: &str, text: &str) -> Page {
        Page::new(ImageId::new(), name.into(), text.into())
    }

    fn file_name(path: &Path) -> String {
        path.file_name().unwrap().to_string_lossy().into_owned()
    }

    #[test]
    fn colliding_names_get_counters() {
        let dir = TempDir::new().unwrap();
        let exporter = FolderExporter::new(dir.path());
        let pages = [page("base", "one"), page("base.md", "two"), page(" base ", "three")];

        let paths = exporter.export(&pages, ExportFormat::PlainText).unwrap();
        let names: Vec<_> = paths.iter().map(|p| file_name(p)).collect();
        assert_eq!(names, ["base.txt", "base 1.txt", "base 2.txt"]);
        assert_eq!(fs::read_to_string(&paths[1]).unwrap(), "two");
    }

    #[test]
    fn existing_files_are_not_overwritten() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("Notes.md"), "keep me").unwrap();

        let paths = FolderExporter::new(dir.path())
            .export(&[page("Notes", "new")], ExportFormat::Markdown)
            .unwrap();

        assert_eq!(file_name(&paths[0]), "Notes 1.md");
        assert_eq!(fs::read_to_string(dir.path().join("Notes.md")).unwrap(), "keep me");
        assert_eq!(fs::read_to_string(&paths[0]).unwrap(), "# Notes\n\nnew");
    }

    #[test]
    fn counter_skips_every_taken_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "").unwrap();
        fs::write(dir.path().join("a 1.txt"), "").unwrap();
        fs::create_dir(dir.path().join("a 2.txt")).unwrap();

        let path = write_unique(dir.path(), "a", "txt", b"x").unwrap();
        assert_eq!(file_name(&path), "a 3.txt");
    }

    #[test]
    fn failure_stops_batch_without_rollback() {
        let dir = TempDir::new().unwrap();
        // Longer than any file system allows for one name component.
        let too_long = "x".repeat(300);
        let pages = [
            page("first", "1"),
            page(&too_long, "2"),
            page("third", "3"),
        ];

        let err = FolderExporter::new(dir.path())
            .export(&pages, ExportFormat::PlainText)
            .unwrap_err();
        assert!(matches!(err, PagescribeError::Io(_)), "got {err}");

        assert!(dir.path().join("first.txt").exists(), "earlier file stays");
        assert!(!dir.path().join("third.txt").exists(), "later pages not written");
    }

    #[test]
    fn path_like_names_stay_in_the_folder() {
        let root = TempDir::new().unwrap();
        let chosen = root.path().join("chosen");
        fs::create_dir(&chosen).unwrap();
        let absolute = root.path().join("abs_escape");
        let pages = [
            page("../escaped", "up"),
            page(&absolute.to_string_lossy(), "absolute"),
            page("nested/name", "nested"),
            page("..", "dots"),
        ];

        let paths = FolderExporter::new(&chosen)
            .export(&pages, ExportFormat::PlainText)
            .unwrap();

        for path in &paths {
            assert_eq!(path.parent(), Some(chosen.as_path()), "{}", path.display());
        }
        assert_eq!(file_name(&paths[0]), "escaped.txt");
        assert_eq!(file_name(&paths[2]), "nestedname.txt");
        assert_eq!(file_name(&paths[3]), "Untitled.txt");
        assert!(!root.path().join("escaped.txt").exists());
        assert!(!root.path().join("abs_escape.txt").exists());
        assert_eq!(fs::read_dir(root.path()).unwrap().count(), 1);
    }

    #[test]
    fn write_unique_refuses_path_bases() {
        let root = TempDir::new().unwrap();
        let chosen = root.path().join("chosen");
        fs::create_dir(&chosen).unwrap();

        for base in ["../out", "a/b", "/abs"] {
            let err = write_unique(&chosen, base, "md", b"x").unwrap_err();
            assert!(
                matches!(err, PagescribeError::Io(ref e) if e.kind() == ErrorKind::InvalidInput),
                "{base}: {err}"
            );
        }
        assert_eq!(fs::read_dir(root.path()).unwrap().count(), 1);
        assert_eq!(fs::read_dir(&chosen).unwrap().count(), 0);
    }

    #[test]
    fn temporary_exports_use_separate_folders() {
        let pages = [page("Shared", "text")];
        let first = FolderExporter::temporary().unwrap();
        let second = FolderExporter::temporary().unwrap();
        assert_ne!(first.dir(), second.dir());

        let a = first.export(&pages, ExportFormat::Markdown).unwrap();
        let b = second.export(&pages, ExportFormat::Markdown).unwrap();
        assert_eq!(file_name(&a[0]), "Shared.md");
        assert_eq!(file_name(&b[0]), "Shared.md");

        fs::remove_dir_all(first.dir()).unwrap();
        fs::remove_dir_all(second.dir()).unwrap();
    }

    #[test]
    fn paths_follow_input_order() {
        let dir = TempDir::new().unwrap();
        let pages = [page("zeta", "z"), page("alpha", "a")];
        let paths = FolderExporter::new(dir.path())
            .export(&pages, ExportFormat::Markdown)
            .unwrap();
        assert_eq!(file_name(&paths[0]), "zeta.md");
        assert_eq!(file_name(&paths[1]), "alpha.md");
    }
}
