//! The subset of the CrownLabs custom resources the label forge reads.
//!
//! Only the fields needed to derive labels are modelled here, everything
//! else in the real resources is ignored during deserialization.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

mod instance;
mod template;

pub use instance::*;
pub use template::*;

/// The API group shared by all CrownLabs custom resources.
pub const GROUP: &str = "crownlabs.polito.it";

/// A reference to another (possibly namespaced) object.
#[derive(Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericRef {
    /// The name of the referenced object.
    pub name: String,

    /// The namespace of the referenced object, if it is namespaced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl GenericRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
        }
    }

    pub fn namespaced(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: Some(namespace.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_ref_namespace_is_optional() {
        let reference: GenericRef = serde_json::from_str(r#"{"name":"tester"}"#).unwrap();
        assert_eq!(reference, GenericRef::new("tester"));

        let reference: GenericRef =
            serde_json::from_str(r#"{"name":"kubernetes","namespace":"workspace-netgroup"}"#)
                .unwrap();
        assert_eq!(
            reference,
            GenericRef::namespaced("kubernetes", "workspace-netgroup")
        );
    }

    #[test]
    fn generic_ref_skips_missing_namespace() {
        let serialized = serde_json::to_string(&GenericRef::new("tester")).unwrap();
        assert_eq!(serialized, r#"{"name":"tester"}"#);
    }
}
