//! Concrete API clients.
//!
//! Each client fixes the api name/version and the deserializer pair for
//! [`ApiClient`](crate::ApiClient) and adds the submission entry points and
//! result query parameters specific to its API.

#[cfg(any(feature = "sentiment-analysis", feature = "topic-extraction"))]
mod insights;

#[cfg(feature = "language-identification")]
pub mod language_identification;
#[cfg(feature = "sentiment-analysis")]
pub mod sentiment_analysis;
#[cfg(feature = "topic-extraction")]
pub mod topic_extraction;

#[cfg(feature = "language-identification")]
pub use language_identification::LanguageIdentificationClient;
#[cfg(feature = "sentiment-analysis")]
pub use sentiment_analysis::SentimentAnalysisClient;
#[cfg(feature = "topic-extraction")]
pub use topic_extraction::TopicExtractionClient;
