//! Typed substring search over query parameters.
//!
//! A query string such as `?name=acme&is_visible=1&page=2` becomes a
//! [`SearchParams`]: the pagination keys are split off, `id` is discarded and
//! the rest stay as raw `field -> value` pairs. Each entity declares its
//! searchable columns as an enum implementing [`SearchField`]; the raw pairs
//! are then resolved against that enum, either strictly (collection listing)
//! or through the entity's lookup allow-list (single-record lookup).
//!
//! Every resolved [`Filter`] means "column contains value, ignoring case".
//! The Postgres rendition does not escape the value, so `%` and `_` inside
//! it keep their LIKE meaning there.

use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;

use crate::pagination::PageRequest;

/// Identifier key, never used as a filter.
pub const ID_KEY: &str = "id";
pub const PAGE_KEY: &str = "page";
pub const PER_PAGE_KEY: &str = "per_page";

/// A searchable column of some entity.
pub trait SearchField: Copy + FromStr + AsRef<str> + Send + Sync + 'static {
    /// Whether single-record lookups may narrow on this field.
    fn lookup_allowed(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter<F> {
    pub field: F,
    pub value: String,
}

impl<F: SearchField> Filter<F> {
    pub fn new(field: F, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }

    /// In-memory evaluation against the column's text form.
    pub fn matches(&self, text: Option<&str>) -> bool {
        text.is_some_and(|t| contains_ci(t, &self.value))
    }
}

/// Text form of a boolean column: `1` or `0`.
///
/// Flags are searched as numbers, so `?is_visible=1` selects the set ones.
pub fn flag_text(value: bool) -> String {
    u8::from(value).to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown filter field: {0}")]
pub struct UnknownField(pub String);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub page: PageRequest,
    /// Remaining `field -> value` pairs, ordered by key.
    pub filters: BTreeMap<String, String>,
}

impl SearchParams {
    pub fn from_query(mut query: BTreeMap<String, String>) -> Self {
        let page = PageRequest::from_params(
            query.remove(PAGE_KEY).as_deref(),
            query.remove(PER_PAGE_KEY).as_deref(),
        );
        query.remove(ID_KEY);
        Self {
            page,
            filters: query,
        }
    }

    /// Resolves every pair; an unknown field is an error.
    pub fn resolve<F: SearchField>(&self) -> Result<Vec<Filter<F>>, UnknownField> {
        self.filters
            .iter()
            .map(|(key, value)| {
                F::from_str(key)
                    .map(|field| Filter::new(field, value.clone()))
                    .map_err(|_| UnknownField(key.clone()))
            })
            .collect()
    }
}

/// Resolves lookup parameters, silently dropping anything outside the
/// allow-list (including `id` and the pagination keys).
pub fn lookup_filters<F: SearchField>(params: &BTreeMap<String, String>) -> Vec<Filter<F>> {
    params
        .iter()
        .filter_map(|(key, value)| {
            let field = F::from_str(key).ok()?;
            field
                .lookup_allowed()
                .then(|| Filter::new(field, value.clone()))
        })
        .collect()
}

/// Case-insensitive substring test.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
