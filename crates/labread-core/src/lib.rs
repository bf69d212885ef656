//! labread-core
//!
//! Pure domain types for lab report interpretation: parsed lines, resolved
//! items, sections, and the request/response vocabulary shared by every
//! other crate. No I/O, no AWS dependency.

pub mod error;
pub mod models;
