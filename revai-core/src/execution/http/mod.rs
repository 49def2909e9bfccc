//! HTTP Utilities
//!
//! This module contains HTTP-related utilities:
//! - HTTP client configuration
//! - Header management
//! - The injectable transport

pub mod client;
pub mod headers;
pub mod transport;

pub use client::*;
pub use headers::*;
pub use transport::*;

pub use reqwest::Method;
pub use reqwest::header::HeaderMap;
