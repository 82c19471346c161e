// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Ordered in-memory collections for captured images and processed pages.
//
// Both stores are single-writer: every mutation takes `&mut self`, so the
// owning session is the only place that can change them. Order is insertion
// order, disturbed only by removals.

use tracing::debug;

use pagescribe_core::error::{PagescribeError, Result};
use pagescribe_core::types::{CapturedImage, ImageId, Page, PageId};

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// Processed pages in the order the pipeline produced them.
#[derive(Debug, Clone, Default)]
pub struct PageStore {
    pages: Vec<Page>,
}

impl PageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page at the end. Fails if a page with the same id is present.
    pub fn append(&mut self, page: Page) -> Result<()> {
        if self.position(page.id()).is_some() {
            return Err(PagescribeError::DuplicatePage(page.id()));
        }
        debug!(page_id = %page.id(), "page appended");
        self.pages.push(page);
        Ok(())
    }

    /// Replace a page's filename and text wholesale and mark it edited.
    ///
    /// The id and source image are untouched.
    pub fn update(&mut self, id: PageId, filename: String, text: String) -> Result<()> {
        let index = self.position(id).ok_or(PagescribeError::PageNotFound(id))?;
        let page = &mut self.pages[index];
        page.suggested_filename = filename;
        page.text = text;
        page.edited = true;
        debug!(page_id = %id, "page updated");
        Ok(())
    }

    /// Delete a page, keeping the order of the rest.
    pub fn remove(&mut self, id: PageId) -> Result<Page> {
        let index = self.position(id).ok_or(PagescribeError::PageNotFound(id))?;
        debug!(page_id = %id, "page removed");
        Ok(self.pages.remove(index))
    }

    pub fn clear(&mut self) {
        debug!(count = self.pages.len(), "page store cleared");
        self.pages.clear();
    }

    /// Swap in a fresh run's pages.
    pub(crate) fn replace(&mut self, pages: Vec<Page>) {
        debug!(count = pages.len(), "page store replaced");
        self.pages = pages;
    }

    pub fn get(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|p| p.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.pages.iter()
    }

    pub fn as_slice(&self) -> &[Page] {
        &self.pages
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    fn position(&self, id: PageId) -> Option<usize> {
        self.pages.iter().position(|p| p.id() == id)
    }
}

// ---------------------------------------------------------------------------
// Captured images
// ---------------------------------------------------------------------------

/// Images captured for the current batch, in capture order.
#[derive(Debug, Clone, Default)]
pub struct CaptureStore {
    images: Vec<CapturedImage>,
}

impl CaptureStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timestamp and append an image, returning its id.
    pub fn add(&mut self, bytes: Vec<u8>) -> ImageId {
        let image = CapturedImage::new(bytes);
        let id = image.id();
        debug!(
            image_id = %id,
            size = image.bytes().len(),
            at = %image.captured_at(),
            "image captured"
        );
        self.images.push(image);
        id
    }

    pub fn remove(&mut self, id: ImageId) -> Result<CapturedImage> {
        let index = self
            .images
            .iter()
            .position(|i| i.id() == id)
            .ok_or(PagescribeError::ImageNotFound(id))?;
        debug!(image_id = %id, "image removed");
        Ok(self.images.remove(index))
    }

    pub fn clear(&mut self) {
        debug!(count = self.images.len(), "capture store cleared");
        self.images.clear();
    }

    pub fn get(&self, id: ImageId) -> Option<&CapturedImage> {
        self.images.iter().find(|i| i.id() == id)
    }

    pub fn as_slice(&self) -> &[CapturedImage] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
