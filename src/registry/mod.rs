//! Style/layout descriptor registry.
//!
//! The descriptor is the record the rendering side reads: computed grid
//! fields plus pass-through style fields. Writes are change-tracked so the
//! container can report exactly which fields moved after a recompute.

mod core;

pub use self::core::{LayoutField, LayoutRecord};
