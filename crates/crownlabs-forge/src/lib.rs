//! Forging of the labels the CrownLabs operators attach to the objects they
//! manage.
//!
//! The crate is a set of pure functions: given the live custom resources
//! (see [`crd`]) it computes which labels an object must carry. It never
//! talks to the API server, the caller decides whether a write is needed.
//!
//! - [`forge::instance_labels`] merges the labels an [`Instance`](crd::Instance)
//!   inherits from its [`Template`](crd::Template) and reports whether
//!   anything changed.
//! - [`forge::instance_object_labels`] computes the identity labels of the
//!   objects owned by an instance.
//! - [`forge::instance_selector_labels`] computes the subset of identity
//!   labels used to select those objects again.

pub mod crd;
pub mod forge;
pub mod kvp;

// External re-exports
pub use k8s_openapi;
pub use kube;
