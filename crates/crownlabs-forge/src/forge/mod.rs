//! Derivation of the labels CrownLabs attaches to instances and the objects
//! they own.
//!
//! All functions in here are pure: they only read their arguments and return
//! freshly allocated label sets, hence they can be called concurrently from
//! any number of reconcilers.

mod labels;

pub use labels::*;
