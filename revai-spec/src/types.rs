//! Core Data Type Definitions
//!
//! Plain value objects exchanged with the Rev AI job APIs. Everything here
//! round-trips through JSON; none of it holds shared mutable state.
//!
//! ## Module Organization
//!
//! - **`job`** - Job records and lifecycle status
//! - **`transcript`** - Transcript / monologue / element input structures
//! - **`sentiment`** - Sentiment analysis results
//! - **`language`** - Language identification results
//! - **`topic`** - Topic extraction results
//! - **`options`** - Optional submission fields shared by all job kinds
//! - **`http`** - HTTP configuration (`HttpConfig` and builder)

mod wire;

pub mod http;
pub mod job;
pub mod language;
pub mod options;
pub mod sentiment;
pub mod topic;
pub mod transcript;

pub use http::*;
pub use job::*;
pub use language::*;
pub use options::*;
pub use sentiment::*;
pub use topic::*;
pub use transcript::*;
pub use wire::from_json_value;
