//! Annotation records produced by structural annotation tools

pub mod location;

pub use location::{Location, Strand};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Annotation records grouped by the sequence they were predicted on.
///
/// Sequences keep the order in which they were first seen and each list
/// keeps the order its records were added in.
pub type FeatureMap = IndexMap<String, Vec<Feature>>;

/// One predicted feature on a sequence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub id: String,
    pub seq_id: String,
    #[serde(rename = "type")]
    pub feature_type: String,
    pub location: Location,
    #[serde(default)]
    pub annotations: IndexMap<String, String>,
    #[serde(default)]
    pub qualifiers: IndexMap<String, Vec<String>>,
}

impl Feature {
    pub fn new(
        location: Location,
        feature_type: impl Into<String>,
        id: impl Into<String>,
        seq_id: impl Into<String>,
        annotations: IndexMap<String, String>,
    ) -> Self {
        Self {
            id: id.into(),
            seq_id: seq_id.into(),
            feature_type: feature_type.into(),
            location,
            annotations,
            qualifiers: IndexMap::new(),
        }
    }

    /// Append a value to a qualifier, creating it on first use
    pub fn add_qualifier(&mut self, key: &str, value: impl Into<String>) {
        self.qualifiers
            .entry(key.to_string())
            .or_default()
            .push(value.into());
    }

    pub fn qualifier(&self, key: &str) -> Option<&[String]> {
        self.qualifiers.get(key).map(Vec::as_slice)
    }

    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations.get(key).map(String::as_str)
    }
}

/// Total number of records across all sequences
pub fn feature_count(features: &FeatureMap) -> usize {
    features.values().map(Vec::len).sum()
}

/// Append a record to its sequence's list, creating the list on first use
pub fn insert_feature(features: &mut FeatureMap, feature: Feature) {
    features
        .entry(feature.seq_id.clone())
        .or_default()
        .push(feature);
}
