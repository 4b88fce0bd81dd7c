use std::str::FromStr;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, LabelSelectorRequirement};
use snafu::{ResultExt, Snafu, ensure};

type Result<T, E = SelectorError> = std::result::Result<T, E>;

#[derive(Debug, PartialEq, Snafu)]
pub enum SelectorError {
    #[snafu(display("label selector with binary operator {operator} must have values"))]
    BinaryOperatorWithoutValues { operator: Operator },

    #[snafu(display("label selector with unary operator {operator} must not have values"))]
    UnaryOperatorWithValues { operator: Operator },

    #[snafu(display("label selector has an invalid operator {operator:?}"))]
    InvalidOperator {
        source: strum::ParseError,
        operator: String,
    },
}

/// The operators a [`LabelSelectorRequirement`] can use.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::EnumString)]
pub enum Operator {
    In,
    NotIn,
    Exists,
    DoesNotExist,
}

/// This trait extends the functionality of [`LabelSelector`].
pub trait LabelSelectorExt {
    /// Renders the selector as the string accepted by the `labelSelector`
    /// query parameter of list and watch calls, e.g.
    /// `crownlabs.polito.it/instance=kubernetes-0000,env notin (dev)`.
    ///
    /// Match labels come first, followed by the match expressions in order.
    fn to_query_string(&self) -> Result<String>;
}

impl LabelSelectorExt for LabelSelector {
    fn to_query_string(&self) -> Result<String> {
        let match_labels = self
            .match_labels
            .iter()
            .flatten()
            .map(|(key, value)| Ok(format!("{key}={value}")));

        let match_expressions = self
            .match_expressions
            .iter()
            .flatten()
            .map(requirement_to_query);

        let parts = match_labels
            .chain(match_expressions)
            .collect::<Result<Vec<_>>>()?;

        Ok(parts.join(","))
    }
}

fn requirement_to_query(requirement: &LabelSelectorRequirement) -> Result<String> {
    let LabelSelectorRequirement {
        key,
        operator,
        values,
    } = requirement;

    let operator = Operator::from_str(operator).context(InvalidOperatorSnafu { operator })?;
    let values = values.as_deref().unwrap_or_default();

    match operator {
        Operator::In | Operator::NotIn => {
            ensure!(
                !values.is_empty(),
                BinaryOperatorWithoutValuesSnafu { operator }
            );
            Ok(format!(
                "{key} {operator} ({values})",
                operator = operator.to_string().to_ascii_lowercase(),
                values = values.join(", ")
            ))
        }
        Operator::Exists | Operator::DoesNotExist => {
            ensure!(values.is_empty(), UnaryOperatorWithValuesSnafu { operator });
            match operator {
                Operator::DoesNotExist => Ok(format!("!{key}")),
                _ => Ok(key.clone()),
            }
        }
    }
}
