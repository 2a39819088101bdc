//! Core types for cityhub-core.
//!
//! This module defines the data structures shared across all layers: the
//! [`Resource`] discriminant naming each flat file, the loaded [`Dataset`]
//! container, and the borrowed [`Record`] view over one of its entries.
//!
//! Records carry no schema. Each accessor documents the default it returns
//! when a field is absent, so callers never branch on missing data.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Value of a record's `type` field meaning "applies to every city and state".
pub const NATIONAL: &str = "national";

/// One of the fixed set of JSON resources in the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Cities,
    HelpCenters,
    Schemes,
    Events,
}

impl Resource {
    pub const ALL: [Resource; 4] = [
        Resource::Cities,
        Resource::HelpCenters,
        Resource::Schemes,
        Resource::Events,
    ];

    /// File name of the resource inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Resource::Cities => "cities.json",
            Resource::HelpCenters => "help_centers.json",
            Resource::Schemes => "schemes.json",
            Resource::Events => "events.json",
        }
    }

    /// Top-level key holding the record array.
    ///
    /// `None` for help centers, which are keyed by lowercased city name.
    pub fn collection(self) -> Option<&'static str> {
        match self {
            Resource::Cities => Some("cities"),
            Resource::HelpCenters => None,
            Resource::Schemes => Some("schemes"),
            Resource::Events => Some("events"),
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Cities => write!(f, "cities"),
            Resource::HelpCenters => write!(f, "help_centers"),
            Resource::Schemes => write!(f, "schemes"),
            Resource::Events => write!(f, "events"),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset
// ---------------------------------------------------------------------------

/// In-memory contents of one JSON resource: always a top-level object.
///
/// A resource that failed to load is represented by [`Dataset::empty`], never
/// by an absent value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    root: Map<String, Value>,
}

impl Dataset {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_map(root: Map<String, Value>) -> Self {
        Self { root }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.root.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.root
    }

    /// Records of the array stored under `key`, in file order.
    ///
    /// Yields nothing when the key is absent or not an array. Elements that
    /// are not objects are skipped.
    pub fn records<'a>(&'a self, key: &str) -> impl Iterator<Item = Record<'a>> + 'a {
        self.root
            .get(key)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(|value| value.as_object().map(Record::new))
    }

    /// Records of a resource's standard collection (`cities`, `schemes`,
    /// `events`). Yields nothing for help centers.
    pub fn collection<'a>(&'a self, resource: Resource) -> impl Iterator<Item = Record<'a>> + 'a {
        resource
            .collection()
            .into_iter()
            .flat_map(move |key| self.records(key))
    }
}

// ---------------------------------------------------------------------------
// Record
// ---------------------------------------------------------------------------

/// Borrowed view over one flat record inside a [`Dataset`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Record<'a> {
    fields: &'a Map<String, Value>,
}

impl<'a> Record<'a> {
    pub fn new(fields: &'a Map<String, Value>) -> Self {
        Self { fields }
    }

    /// String value of `field`; `None` when absent or not a string.
    pub fn text(&self, field: &str) -> Option<&'a str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    /// String value of `field`, defaulting to `""`.
    pub fn field(&self, field: &str) -> &'a str {
        self.text(field).unwrap_or_default()
    }

    pub fn name(&self) -> &'a str {
        self.field("name")
    }

    pub fn state(&self) -> &'a str {
        self.field("state")
    }

    pub fn city(&self) -> &'a str {
        self.field("city")
    }

    pub fn description(&self) -> &'a str {
        self.field("description")
    }

    /// The `type` field (`"national"` for schemes and events that apply
    /// everywhere, a category for help centers). Defaults to `""`.
    pub fn kind(&self) -> &'a str {
        self.field("type")
    }

    pub fn is_national(&self) -> bool {
        self.kind() == NATIONAL
    }
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
