use const_format::concatcp;

use crate::crd::GROUP;

/// The prefix shared by every label key owned by the CrownLabs operators.
/// Keys outside of this prefix belong to users and are never touched.
pub const CROWNLABS_KEY_PREFIX: &str = concatcp!(GROUP, "/");

/// The `crownlabs.polito.it/managed-by` key. It is used to indicate which
/// kind of CrownLabs resource manages the labelled object.
pub const MANAGED_BY_KEY: &str = concatcp!(CROWNLABS_KEY_PREFIX, "managed-by");

/// The `crownlabs.polito.it/workspace` key, holding the name of the workspace
/// the labelled object belongs to, e.g. `netgroup`.
pub const WORKSPACE_KEY: &str = concatcp!(CROWNLABS_KEY_PREFIX, "workspace");

/// The `crownlabs.polito.it/template` key, holding the name of the template
/// the labelled object was derived from, e.g. `kubernetes`.
pub const TEMPLATE_KEY: &str = concatcp!(CROWNLABS_KEY_PREFIX, "template");

/// The `crownlabs.polito.it/instance` key, holding the name of the owning
/// instance, e.g. `kubernetes-0000`.
pub const INSTANCE_KEY: &str = concatcp!(CROWNLABS_KEY_PREFIX, "instance");

/// The `crownlabs.polito.it/tenant` key, holding the name of the tenant the
/// owning instance belongs to.
pub const TENANT_KEY: &str = concatcp!(CROWNLABS_KEY_PREFIX, "tenant");

/// The value of [`MANAGED_BY_KEY`] for objects managed by the instance
/// controller.
pub const MANAGED_BY_INSTANCE_VALUE: &str = "instance";
