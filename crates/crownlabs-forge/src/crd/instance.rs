use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::crd::GenericRef;

/// A running copy of a [`Template`](crate::crd::Template) owned by a tenant.
#[derive(
    CustomResource, Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Eq, Serialize,
)]
#[kube(
    group = "crownlabs.polito.it",
    version = "v1alpha2",
    kind = "Instance",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct InstanceSpec {
    /// The template this instance was spawned from.
    #[serde(rename = "template.crownlabs.polito.it/TemplateRef")]
    pub template: GenericRef,

    /// The tenant owning this instance.
    #[serde(rename = "tenant.crownlabs.polito.it/TenantRef")]
    pub tenant: GenericRef,
}
