mod builder;
mod catalog;
mod overlay;

pub use builder::CatalogBuilder;
pub use catalog::{CatalogError, MaskAssignment, MaskCatalog, MaskEntry, MaskHandle};
pub use overlay::overlay_mask;
