//! # revai - typed client for the Rev AI job APIs
//!
//! Submit language identification, sentiment analysis and topic extraction
//! jobs, poll them, and fetch their results either as raw JSON or as typed
//! values.
//!
#![deny(unsafe_code)]

//! ## Quick Start
//!
//! ```rust,no_run
//! use revai::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SentimentAnalysisClient::new("your-access-token")?;
//!
//!     let job = client
//!         .submit_job_from_text(
//!             "The support team was fantastic.",
//!             &InsightsJobOptions::new().with_language("en"),
//!         )
//!         .await?;
//!
//!     let job = client.get_job_details(&job.id).await?;
//!     if job.status == JobStatus::Complete {
//!         let result = client
//!             .get_result_object(&job.id, Some(SentimentValue::Positive))
//!             .await?;
//!         for message in result.messages {
//!             println!("{} ({})", message.content, message.score);
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! Every client is a thin configuration of [`ApiClient`]: it fixes the api
//! name/version and the job/result deserializers, and shapes the submission
//! payload. Transport, host, and HTTP settings are customized through
//! [`ApiClientBuilder`] and the clients' `with_builder` constructors.

/// Clients compiled into this build, comma separated.
pub const ENABLED_CLIENTS: &str = env!("REVAI_ENABLED_CLIENTS");

pub use revai_core::{
    ApiClient, ApiClientBuilder, JobDeserializer, ResultDeserializer, RevAiError, defaults,
    error, execution, observability, types,
};

pub mod clients;

#[cfg(feature = "language-identification")]
pub use clients::LanguageIdentificationClient;
#[cfg(feature = "sentiment-analysis")]
pub use clients::SentimentAnalysisClient;
#[cfg(feature = "topic-extraction")]
pub use clients::TopicExtractionClient;

/// Commonly used types.
pub mod prelude {
    pub use crate::clients::*;
    pub use crate::execution::url::QueryParams;
    pub use crate::types::*;
    pub use crate::{ApiClient, ApiClientBuilder, RevAiError};
}
