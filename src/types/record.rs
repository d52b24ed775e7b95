//! Catalog record type

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One catalog entry.
///
/// Text fields absent from the dataset are stored as `""` so string
/// operations never have to deal with a missing marker. `year` is an
/// integer or unknown; unknown serializes as `""`, like the text fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub year: Year,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub description: String,
}

impl Record {
    /// Create a record with only an id and a category
    pub fn new(id: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Lowercased category, the form every containment match runs against
    pub fn category_lower(&self) -> String {
        self.category.to_lowercase()
    }
}

/// Release year: a number, or unknown when the dataset has none
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Year {
    Known(i32),
    #[default]
    Unknown,
}

impl Year {
    /// Parse a dataset cell. Empty or non-numeric cells are unknown.
    pub fn parse(raw: &str) -> Self {
        raw.trim().parse().map(Year::Known).unwrap_or(Year::Unknown)
    }

    pub fn value(&self) -> Option<i32> {
        match self {
            Year::Known(year) => Some(*year),
            Year::Unknown => None,
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Year::Known(year) => write!(f, "{}", year),
            Year::Unknown => Ok(()),
        }
    }
}

impl Serialize for Year {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Year::Known(year) => serializer.serialize_i32(*year),
            Year::Unknown => serializer.serialize_str(""),
        }
    }
}

impl<'de> Deserialize<'de> for Year {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawYear {
            Number(i32),
            Text(String),
        }

        Ok(match RawYear::deserialize(deserializer)? {
            RawYear::Number(year) => Year::Known(year),
            RawYear::Text(text) => Year::parse(&text),
        })
    }
}
