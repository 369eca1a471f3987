//! Dungsem is a reasoner for Dung's abstract argumentation semantics.
//!
//! It computes the grounded, complete, preferred and stable extensions of argumentation frameworks,
//! under the classical handling of self-attacking arguments or an enhanced one that neutralizes their outgoing attacks.
//!
//! The [solvers] module gives one solver per semantics, while the [reasoner] module
//! gives a stateful entry point that caches the extensions of a framework being edited.
//! Frameworks can be read and written in JSON and TGF (and exported to DOT) thanks to the [io] module,
//! analyzed with the [analysis] module and built from the [generators].

#![warn(missing_docs)]

pub mod aa;

pub mod analysis;

pub mod generators;

pub mod io;

pub mod reasoner;

pub mod solvers;

pub mod utils;
