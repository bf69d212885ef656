//! labread-bedrock
//!
//! Narrative generation via the Bedrock Converse API. The interpreter
//! treats this as an opaque `(prompt) → text | failure` collaborator.

pub mod client;
pub mod error;
pub mod narrative;
