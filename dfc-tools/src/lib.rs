//! Adapters for external structural annotation tools
//!
//! Each adapter builds the command line for one program and parses the
//! file it writes into features grouped by sequence.

pub mod annotators;
pub mod command;
pub mod context;
pub mod traits;
pub mod version;

// Re-exports for convenience
pub use annotators::TrnaScan;
pub use command::ToolCommand;
pub use context::ToolContext;
pub use traits::StructuralAnnotator;
pub use version::{detect_version, extract_version, VersionCheck};
