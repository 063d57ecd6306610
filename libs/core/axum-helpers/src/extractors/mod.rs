//! Request extractors and (de)serialization helpers for handler payloads.

pub mod double_option;
pub mod uuid_path;
pub mod validated_json;

pub use uuid_path::{UuidPath, UuidPathPair};
pub use validated_json::ValidatedJson;
