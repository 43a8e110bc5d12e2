pub mod annotator;

pub use annotator::StructuralAnnotator;
