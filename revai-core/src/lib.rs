//! revai-core
//!
//! Domain-agnostic runtime shared by every Rev AI job client: the generic
//! [`client::ApiClient`], header construction, URL/query helpers, the
//! injectable HTTP transport, and HTTP error classification.
#![deny(unsafe_code)]

pub mod client;
pub mod defaults;
pub mod execution;
pub mod observability;
pub mod utils;

pub use revai_spec::{error, types};

pub use client::{ApiClient, ApiClientBuilder, JobDeserializer, ResultDeserializer};
pub use error::RevAiError;
