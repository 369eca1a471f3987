//! Generators of frameworks: canonical examples and seeded random frameworks.

mod classic_examples;
pub use classic_examples::classic_example;
pub use classic_examples::classic_example_names;
pub use classic_examples::classic_examples;

mod random_generator;
pub use random_generator::random_framework;
pub use random_generator::random_framework_with_source;
pub use random_generator::RandomSource;
