//! Search — case-insensitive substring search across schemes and help centers.
//!
//! Schemes are searched on `name` and `description`. Help centers are only
//! searched when a city is given, and only that city's centers, on `name` and
//! `type`. Hits are concatenated schemes first, then help centers, and the
//! whole list is cut at the requested limit. An empty query matches every
//! record.

use serde::{Deserialize, Serialize};

use crate::{
    filter::{help_centers_for, Criterion},
    types::{Dataset, Record, Resource},
};

pub const SCHEME_FIELDS: &[&str] = &["name", "description"];
pub const HELP_CENTER_FIELDS: &[&str] = &["name", "type"];

/// Query parameters of a search request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub city: String,
}

impl SearchRequest {
    pub fn new(q: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            city: city.into(),
        }
    }
}

/// Which dataset a [`SearchHit`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HitKind {
    Scheme,
    HelpCenter,
}

/// One search result as returned by the search API.
///
/// `title` and `description` are `None` (JSON `null`) when the source record
/// lacks the field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    #[serde(rename = "type")]
    pub kind: HitKind,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: String,
}

impl SearchHit {
    fn scheme(record: &Record<'_>, city: &str) -> Self {
        Self {
            kind: HitKind::Scheme,
            title: record.text("name").map(str::to_owned),
            description: record.text("description").map(str::to_owned),
            url: format!("/schemes?city={city}"),
        }
    }

    fn help_center(record: &Record<'_>, city: &str) -> Self {
        Self {
            kind: HitKind::HelpCenter,
            title: record.text("name").map(str::to_owned),
            description: record.text("type").map(str::to_owned),
            url: format!("/city/{city}"),
        }
    }
}

/// Run `request` against the loaded datasets, returning at most `limit` hits.
pub fn search(
    schemes: &Dataset,
    help_centers: &Dataset,
    request: &SearchRequest,
    limit: usize,
) -> Vec<SearchHit> {
    let city = request.city.as_str();
    let scheme_criterion = Criterion::contains(SCHEME_FIELDS, &request.q);
    let center_criterion = Criterion::contains(HELP_CENTER_FIELDS, &request.q);

    let scheme_hits = schemes
        .collection(Resource::Schemes)
        .filter(|record| scheme_criterion.matches(record))
        .map(|record| SearchHit::scheme(&record, city));

    let centers = if city.is_empty() {
        Vec::new()
    } else {
        help_centers_for(help_centers, city)
    };
    let center_hits = centers
        .iter()
        .filter(|record| center_criterion.matches(record))
        .map(|record| SearchHit::help_center(record, city));

    scheme_hits.chain(center_hits).take(limit).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
