//! Mask image catalog with round-robin assignment.

use std::path::PathBuf;

use image::RgbaImage;
use thiserror::Error;

use crate::mask::builder::CatalogBuilder;

/// Errors from building a [`MaskCatalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Round-robin indexing is undefined for a zero-size catalog, so an
    /// empty one is rejected at construction.
    #[error("mask catalog must contain at least one entry")]
    Empty,
    #[error("failed to load mask image {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Opaque reference to one catalog entry. Only ever issued by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskHandle(pub(crate) usize);

/// A mask assigned to a tracked face: which catalog entry, and how much to
/// enlarge the face box when drawing it. Fixed for the face's lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaskAssignment {
    pub handle: MaskHandle,
    pub scale: f32,
}

/// One mask asset: an RGBA image plus the scale factor applied to a face's
/// bounding box to compute the overlay region. Masks are drawn larger than
/// the raw detected box, which classifiers draw tighter than the whole face.
#[derive(Debug, Clone)]
pub struct MaskEntry {
    image: RgbaImage,
    scale: f32,
}

impl MaskEntry {
    pub fn new(image: RgbaImage, scale: f32) -> Self {
        Self { image, scale }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}

/// Fixed, ordered set of mask entries plus a round-robin cursor.
///
/// A plain sequence with a separate cursor; successive
/// [`next_assignment`](Self::next_assignment) calls cycle through the
/// entries in order, never randomly and never based on content.
#[derive(Debug, Clone)]
pub struct MaskCatalog {
    entries: Vec<MaskEntry>,
    cursor: usize,
}

impl MaskCatalog {
    /// Build a catalog from already-loaded entries. Fails on an empty list.
    pub fn new(entries: Vec<MaskEntry>) -> Result<Self, CatalogError> {
        if entries.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { entries, cursor: 0 })
    }

    /// Start a [`CatalogBuilder`] for loading masks from image files.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hand out the next mask in the cycle.
    ///
    /// The cursor advances before indexing, so the k-th call (1-indexed)
    /// returns entry `k % len`.
    pub fn next_assignment(&mut self) -> MaskAssignment {
        self.cursor = self.cursor.wrapping_add(1);
        let index = self.cursor % self.entries.len();
        MaskAssignment {
            handle: MaskHandle(index),
            scale: self.entries[index].scale,
        }
    }

    /// Look up the entry behind a handle issued by this catalog.
    pub fn entry(&self, handle: MaskHandle) -> &MaskEntry {
        &self.entries[handle.0]
    }
}
