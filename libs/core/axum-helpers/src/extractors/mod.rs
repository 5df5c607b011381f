//! Extractors whose rejections use the shared error envelope.

pub mod query;
pub mod validated_json;

pub use query::QueryParams;
pub use validated_json::ValidatedJson;
