//! Plain Kubernetes labels and the merge discipline used to keep the
//! CrownLabs-owned ones up to date.
//!
//! Labels are stored as the same `BTreeMap<String, String>` used by
//! [`ObjectMeta::labels`], so they can be moved in and out of objects without
//! conversion. Keys and values are not validated here.
use std::{collections::BTreeMap, fmt::Display};

#[cfg(doc)]
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

pub mod consts;
mod selector;

pub use selector::*;

/// A set of Kubernetes labels. Keys are unique, ordering carries no meaning.
pub type Labels = BTreeMap<String, String>;

/// A single Kubernetes label.
///
/// ```
/// # use crownlabs_forge::kvp::Label;
/// let label = Label::from(("crownlabs.polito.it/tenant", "tester"));
/// assert_eq!(label.to_string(), "crownlabs.polito.it/tenant=tester");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Label {
    pub key: String,
    pub value: String,
}

impl Label {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl<K, V> From<(K, V)> for Label
where
    K: Into<String>,
    V: Into<String>,
{
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl From<Label> for (String, String) {
    fn from(Label { key, value }: Label) -> Self {
        (key, value)
    }
}

impl Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Helpers for [`Labels`].
pub trait LabelsExt {
    /// Enforces the `managed` labels on `self`.
    ///
    /// Every managed label whose key is missing, or present with a different
    /// value, is (over)written. All other keys are left untouched and no key is
    /// ever removed. Returns `true` if at least one label was written.
    fn merge_managed<I>(&mut self, managed: I) -> bool
    where
        I: IntoIterator<Item = Label>;

    /// Returns whether every key/value pair of `self` is also present in
    /// `other`.
    fn is_subset_of(&self, other: &Labels) -> bool;
}

impl LabelsExt for Labels {
    fn merge_managed<I>(&mut self, managed: I) -> bool
    where
        I: IntoIterator<Item = Label>,
    {
        let mut updated = false;

        for Label { key, value } in managed {
            if self.get(&key) != Some(&value) {
                self.insert(key, value);
                updated = true;
            }
        }

        updated
    }

    fn is_subset_of(&self, other: &Labels) -> bool {
        self.iter()
            .all(|(key, value)| other.get(key).is_some_and(|other| other == value))
    }
}
