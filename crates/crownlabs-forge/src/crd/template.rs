use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::crd::GenericRef;

/// Describes an environment users can spawn [`Instance`](crate::crd::Instance)s
/// from. Templates live in the namespace of the workspace they belong to.
#[derive(
    CustomResource, Clone, Debug, Default, Deserialize, JsonSchema, PartialEq, Eq, Serialize,
)]
#[kube(
    group = "crownlabs.polito.it",
    version = "v1alpha2",
    kind = "Template",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct TemplateSpec {
    /// The workspace this template belongs to.
    #[serde(rename = "workspace.crownlabs.polito.it/WorkspaceRef")]
    pub workspace_ref: GenericRef,
}
