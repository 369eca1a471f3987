//! Solvers dedicated to Abstract Argumentation frameworks.
//!
//! The computations are handled by a [SemanticsEngine], parameterized by a [SelfAttackPolicy].
//! Solvers dedicated to a single semantics expose them through the [SingleExtensionComputer], [ExtensionEnumerator],
//! [CredulousAcceptanceComputer] and [SkepticalAcceptanceComputer] traits.

mod acceptance;
pub use acceptance::Acceptance;

mod complete_semantics_solver;
pub use complete_semantics_solver::CompleteSemanticsSolver;

mod enumeration;
pub use enumeration::Enumeration;
pub use enumeration::EnumerationLimits;

mod grounded_semantics_solver;
pub use grounded_semantics_solver::GroundedSemanticsSolver;

mod labelling_search;

mod preferred_semantics_solver;
pub use preferred_semantics_solver::PreferredSemanticsSolver;

mod self_attack_policy;
pub use self_attack_policy::SelfAttackPolicy;

mod semantics_engine;
pub use semantics_engine::SemanticsEngine;

mod specs;
pub use specs::CredulousAcceptanceComputer;
pub use specs::ExtensionEnumerator;
pub use specs::SingleExtensionComputer;
pub use specs::SkepticalAcceptanceComputer;

mod stable_semantics_solver;
pub use stable_semantics_solver::StableSemanticsSolver;

mod utils;
