//! revai-spec
//!
//! Domain types and the error taxonomy shared by every Rev AI job client.
//!
//! This crate intentionally contains only *spec-level* types (jobs, results,
//! transcripts, submission options, and HTTP configuration). Request
//! execution, headers, transports, and the concrete clients live in
//! `revai-core` and `revai`.
#![deny(unsafe_code)]

pub mod error;
pub mod types;

pub use error::RevAiError;
