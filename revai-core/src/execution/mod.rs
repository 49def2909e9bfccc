//! Request execution primitives: HTTP plumbing, URL building, payloads, and
//! error classification.

pub mod errors;
pub mod http;
pub mod payload;
pub mod url;
