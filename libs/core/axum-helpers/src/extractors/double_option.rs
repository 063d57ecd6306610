//! Distinguishes an absent JSON key from an explicit `null`.
//!
//! Use on `Option<Option<T>>` fields of partial-update payloads together
//! with `#[serde(default)]`:
//!
//! - key absent: `None` (leave the column alone)
//! - `null`: `Some(None)` (clear the column)
//! - a value: `Some(Some(v))`
//!
//! ```ignore
//! #[derive(Deserialize)]
//! struct UpdateBrand {
//!     #[serde(default, deserialize_with = "double_option::deserialize")]
//!     website: Option<Option<String>>,
//! }
//! ```

use serde::{Deserialize, Deserializer};

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
