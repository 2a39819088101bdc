//! Filter engine — equality and substring matching over loaded datasets.
//!
//! Every function here is pure: it borrows a [`Dataset`], never mutates it,
//! and returns matching [`Record`]s in file order, optionally truncated.
//! There is no ranking; order is the order of the source file.

use serde_json::Value;

use crate::types::{Dataset, Record, Resource};

/// A match criterion evaluated against a single record.
///
/// Missing fields compare as the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Criterion {
    /// `record[field] == value`, exact.
    Equals { field: &'static str, value: String },
    /// `lower(record[field]) == value`; `value` is stored lowercased.
    EqualsIgnoreCase { field: &'static str, value: String },
    /// `needle` is a substring of `lower(record[f])` for some `f` in `fields`;
    /// `needle` is stored lowercased.
    Contains {
        fields: &'static [&'static str],
        needle: String,
    },
    /// The record's `type` is the national sentinel.
    National,
    /// Any of the inner criteria holds. An empty list matches nothing.
    AnyOf(Vec<Criterion>),
}

impl Criterion {
    pub fn equals(field: &'static str, value: impl Into<String>) -> Self {
        Criterion::Equals {
            field,
            value: value.into(),
        }
    }

    pub fn equals_ignore_case(field: &'static str, value: &str) -> Self {
        Criterion::EqualsIgnoreCase {
            field,
            value: value.to_lowercase(),
        }
    }

    pub fn contains(fields: &'static [&'static str], query: &str) -> Self {
        Criterion::Contains {
            fields,
            needle: query.to_lowercase(),
        }
    }

    pub fn matches(&self, record: &Record<'_>) -> bool {
        match self {
            Criterion::Equals { field, value } => record.field(field) == value.as_str(),
            Criterion::EqualsIgnoreCase { field, value } => {
                record.field(field).to_lowercase() == *value
            }
            Criterion::Contains { fields, needle } => fields
                .iter()
                .any(|field| record.field(field).to_lowercase().contains(needle.as_str())),
            Criterion::National => record.is_national(),
            Criterion::AnyOf(criteria) => criteria.iter().any(|c| c.matches(record)),
        }
    }
}

/// Keep the records matching `criterion`, in order, at most `limit` of them.
pub fn select<'a, I>(records: I, criterion: &Criterion, limit: Option<usize>) -> Vec<Record<'a>>
where
    I: IntoIterator<Item = Record<'a>>,
{
    records
        .into_iter()
        .filter(|record| criterion.matches(record))
        .take(limit.unwrap_or(usize::MAX))
        .collect()
}

/// First city whose `name` equals `name` ignoring case.
///
/// With duplicate names the earliest in file order wins.
pub fn find_city<'a>(cities: &'a Dataset, name: &str) -> Option<Record<'a>> {
    let criterion = Criterion::equals_ignore_case("name", name);
    cities
        .collection(Resource::Cities)
        .find(|city| criterion.matches(city))
}

/// Schemes for `state`, plus every national scheme.
pub fn schemes_for_state<'a>(
    schemes: &'a Dataset,
    state: &str,
    limit: Option<usize>,
) -> Vec<Record<'a>> {
    let criterion = Criterion::AnyOf(vec![
        Criterion::equals("state", state),
        Criterion::National,
    ]);
    select(schemes.collection(Resource::Schemes), &criterion, limit)
}

/// Schemes relevant to `city`, joined through the city's `state`.
///
/// `None` when `city` is not in `cities`.
pub fn schemes_for_city<'a>(
    cities: &Dataset,
    schemes: &'a Dataset,
    city: &str,
    limit: Option<usize>,
) -> Option<Vec<Record<'a>>> {
    let city = find_city(cities, city)?;
    Some(schemes_for_state(schemes, city.state(), limit))
}

/// Events held in `city` (ignoring case), plus every national event.
pub fn events_for_city<'a>(events: &'a Dataset, city: &str) -> Vec<Record<'a>> {
    let criterion = Criterion::AnyOf(vec![
        Criterion::equals_ignore_case("city", city),
        Criterion::National,
    ]);
    select(events.collection(Resource::Events), &criterion, None)
}

/// Help centers listed under the lowercased `city` key.
pub fn help_centers_for<'a>(help_centers: &'a Dataset, city: &str) -> Vec<Record<'a>> {
    help_centers.records(&city.to_lowercase()).collect()
}

/// The value stored under the lowercased `city` key, as it appears in the
/// file. Unlike [`help_centers_for`] nothing is dropped.
pub fn help_centers_entry<'a>(help_centers: &'a Dataset, city: &str) -> Option<&'a Value> {
    help_centers.get(&city.to_lowercase())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
