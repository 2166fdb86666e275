//! Area map builders.
//!
//! Each template shape owns a pure builder turning a slot occupancy and the
//! merge policy into a grid template, the ordered visible slots and the
//! track sizes. Shared vocabulary lives in the private `core` module.

pub mod app;
mod core;
pub mod two_by_two;

pub use app::AppSlot;
pub use self::core::{AreaMap, GridTemplate, Placement, SlotName, SlotSet, Tracks};
pub use two_by_two::TwoByTwoSlot;
