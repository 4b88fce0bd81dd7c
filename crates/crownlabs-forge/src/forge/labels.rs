use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::ResourceExt;
use tracing::instrument;

use crate::{
    crd::{Instance, Template},
    kvp::{Label, Labels, LabelsExt},
};

/// Constructors for the labels owned by CrownLabs.
pub mod well_known {
    use crate::kvp::{
        Label,
        consts::{
            INSTANCE_KEY, MANAGED_BY_INSTANCE_VALUE, MANAGED_BY_KEY, TEMPLATE_KEY, TENANT_KEY,
            WORKSPACE_KEY,
        },
    };

    /// Creates the `crownlabs.polito.it/managed-by` label marking objects
    /// managed by the instance controller.
    pub fn managed_by_instance() -> Label {
        Label::new(MANAGED_BY_KEY, MANAGED_BY_INSTANCE_VALUE)
    }

    pub fn workspace(workspace: &str) -> Label {
        Label::new(WORKSPACE_KEY, workspace)
    }

    pub fn template(template: &str) -> Label {
        Label::new(TEMPLATE_KEY, template)
    }

    pub fn instance(instance: &str) -> Label {
        Label::new(INSTANCE_KEY, instance)
    }

    pub fn tenant(tenant: &str) -> Label {
        Label::new(TENANT_KEY, tenant)
    }
}

/// Merges the labels an [`Instance`] inherits from its `template` into
/// `labels`.
///
/// The managed labels are `managed-by`, `workspace` and `template`, all other
/// keys are preserved. An absent `labels` map is treated as empty. The returned
/// flag is `true` if at least one managed label was missing or stale, in which
/// case the caller has to persist the returned set.
pub fn instance_labels(labels: Option<&Labels>, template: &Template) -> (Labels, bool) {
    let template_name = template.name_any();

    let mut labels = labels.cloned().unwrap_or_default();
    let updated = labels.merge_managed([
        well_known::managed_by_instance(),
        well_known::workspace(&template.spec.workspace_ref.name),
        well_known::template(&template_name),
    ]);

    if updated {
        tracing::debug!(template = %template_name, "managed instance labels updated");
    }

    (labels, updated)
}

/// Returns the identity labels of the objects owned by `instance`, merged on
/// top of `labels`.
///
/// The identity labels are `managed-by`, `instance`, `template` and `tenant`
/// and always carry their current values, all other keys are preserved. An
/// absent `labels` map is treated as empty.
pub fn instance_object_labels(labels: Option<&Labels>, instance: &Instance) -> Labels {
    let mut labels = labels.cloned().unwrap_or_default();
    labels.merge_managed(identity_labels(instance));
    labels
}

/// Returns the labels required to select the objects owned by `instance`.
///
/// The set contains the `instance`, `template` and `tenant` labels and is
/// always a subset of [`instance_object_labels`] for the same instance.
pub fn instance_selector_labels(instance: &Instance) -> Labels {
    selector_labels(instance)
        .into_iter()
        .map(<(String, String)>::from)
        .collect()
}

/// Wraps [`instance_selector_labels`] into a [`LabelSelector`], ready to be
/// used in owned object specs or list calls.
pub fn instance_label_selector(instance: &Instance) -> LabelSelector {
    LabelSelector {
        match_labels: Some(instance_selector_labels(instance)),
        match_expressions: None,
    }
}

/// Updates the labels of `instance` itself with the ones inherited from
/// `template`, see [`instance_labels`]. Returns `true` if the instance has been
/// modified and needs to be written back.
#[instrument(skip_all, fields(instance = %instance.name_any()))]
pub fn apply_instance_labels(instance: &mut Instance, template: &Template) -> bool {
    let (labels, updated) = instance_labels(instance.metadata.labels.as_ref(), template);

    if updated {
        instance.metadata.labels = Some(labels);
    }

    updated
}

fn identity_labels(instance: &Instance) -> impl Iterator<Item = Label> {
    std::iter::once(well_known::managed_by_instance()).chain(selector_labels(instance))
}

fn selector_labels(instance: &Instance) -> [Label; 3] {
    [
        well_known::instance(&instance.name_any()),
        well_known::template(&instance.spec.template.name),
        well_known::tenant(&instance.spec.tenant.name),
    ]
}
