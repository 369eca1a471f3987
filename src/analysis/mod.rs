//! Structural analysis of frameworks.

mod property_analyzer;
pub use property_analyzer::FrameworkProperties;
pub use property_analyzer::PropertyAnalyzer;

mod semantics_relationships;
pub use semantics_relationships::SemanticsRelationships;
