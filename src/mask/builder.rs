//! Builder for loading a mask catalog from image files.

use std::path::PathBuf;

use log::debug;

use crate::mask::catalog::{CatalogError, MaskCatalog, MaskEntry};

/// Builder collecting `(path, scale)` pairs and loading them into a
/// [`MaskCatalog`].
///
/// ```no_run
/// use facemask_rs::MaskCatalog;
///
/// let catalog = MaskCatalog::builder()
///     .mask("imgs/hair.png", 1.5)
///     .mask("imgs/glasses.png", 1.3)
///     .build()?;
/// # Ok::<(), facemask_rs::CatalogError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    masks: Vec<(PathBuf, f32)>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mask image file with the scale factor to apply when drawing it
    /// over a face.
    pub fn mask(mut self, path: impl Into<PathBuf>, scale: f32) -> Self {
        self.masks.push((path.into(), scale));
        self
    }

    /// Load every image and build the catalog. Fails on the first file that
    /// cannot be read or decoded, and on an empty mask list.
    pub fn build(self) -> Result<MaskCatalog, CatalogError> {
        let mut entries = Vec::with_capacity(self.masks.len());
        for (path, scale) in self.masks {
            let image = image::open(&path)
                .map_err(|source| CatalogError::Load {
                    path: path.clone(),
                    source,
                })?
                .into_rgba8();
            debug!(
                "loaded mask {} ({}x{}, scale {scale})",
                path.display(),
                image.width(),
                image.height()
            );
            entries.push(MaskEntry::new(image, scale));
        }
        MaskCatalog::new(entries)
    }
}
