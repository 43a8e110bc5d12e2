//! Feature model and formats for structural annotation

pub mod feature;
pub mod formats;

// Re-export commonly used types
pub use feature::{feature_count, insert_feature, Feature, FeatureMap, Location, Strand};
pub use formats::{write_gff3, write_gff3_to_writer};
