//! Error module orchestrator.
//!
//! Every fallible template operation reports through [`TemplateError`]; the
//! variants live in the private `types` module.

mod types;

pub use types::{Result, TemplateError};
