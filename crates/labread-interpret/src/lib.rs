//! labread-interpret
//!
//! The report interpretation engine. Turns free-form `term: value unit`
//! text into sections of classified, explained items plus follow-up
//! questions, and folds an externally generated narrative back into the
//! result. Synchronous and pure: the only shared state is the read-only
//! [`labread_catalog::Catalog`] handed to [`Interpreter::new`].

pub mod aggregate;
pub mod classify;
pub mod engine;
pub mod error;
pub mod explain;
pub mod narrative;
pub mod options;
pub mod parser;
pub mod questions;

pub use engine::Interpreter;
pub use options::{InterpretOptions, UnmatchedPolicy};
