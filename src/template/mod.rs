//! Template containers.
//!
//! A [`TemplateBox`] pairs a [`Template`] shape with slot assignments and
//! style options, and keeps the derived layout descriptor, visible child
//! list and area tags consistent with them after every mutation.

mod builder;
mod config;
mod core;
mod shape;
mod state;


pub use self::builder::TemplateBuilder;
pub use self::config::TemplateConfig;
pub use self::core::{AppLayout, TemplateBox, TwoByTwoLayout};
pub use self::shape::{AppTemplate, Template, TwoByTwoTemplate};
pub use self::state::TemplateState;
