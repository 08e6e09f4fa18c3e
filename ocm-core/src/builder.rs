//! Building immutable values out of mutable builders
use std::{collections::BTreeMap, fmt::Debug};

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Failure to turn a builder into a value.
///
/// Builders of nested values are built recursively, so an error raised deep inside
/// a cluster description surfaces unchanged from the outermost [`build`](crate::model::ClusterBuilder::build).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// A builder marked as a link has nothing to link to.
    #[error("{kind} link needs an id or an href")]
    UnresolvableLink {
        /// Kind of the offending object
        kind: &'static str,
    },
}

/// A value that is assembled through a builder.
///
/// Every model type implements this, as do the scalars and collections that
/// model types are made of. Scalars are their own builders.
pub trait Buildable: Sized {
    /// The mutable accumulator for this type
    type Builder: Clone + Debug;

    /// Build a value from the current state of a builder.
    fn build_from(builder: &Self::Builder) -> Result<Self, BuildError>;

    /// A builder holding the state of this value.
    ///
    /// Building the returned builder yields a value equal to `self`.
    fn to_builder(&self) -> Self::Builder;
}

macro_rules! identity_buildable {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Buildable for $ty {
                type Builder = $ty;

                fn build_from(builder: &$ty) -> Result<Self, BuildError> {
                    Ok(builder.clone())
                }

                fn to_builder(&self) -> $ty {
                    self.clone()
                }
            }
        )*
    };
}

identity_buildable!(String, bool, i32, i64, f64, DateTime<Utc>, serde_json::Value);

impl<T: Buildable> Buildable for Vec<T> {
    type Builder = Vec<T::Builder>;

    fn build_from(builder: &Self::Builder) -> Result<Self, BuildError> {
        builder.iter().map(T::build_from).collect()
    }

    fn to_builder(&self) -> Self::Builder {
        self.iter().map(T::to_builder).collect()
    }
}

impl<T: Buildable> Buildable for BTreeMap<String, T> {
    type Builder = BTreeMap<String, T::Builder>;

    fn build_from(builder: &Self::Builder) -> Result<Self, BuildError> {
        builder
            .iter()
            .map(|(key, value)| Ok((key.clone(), T::build_from(value)?)))
            .collect()
    }

    fn to_builder(&self) -> Self::Builder {
        self.iter()
            .map(|(key, value)| (key.clone(), value.to_builder()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalars_are_their_own_builders() {
        let name = String::from("mycluster");
        assert_eq!(String::build_from(&name.to_builder()).unwrap(), name);
        assert!(bool::build_from(&true).unwrap());
    }

    #[test]
    fn collections_build_every_element() {
        let subnets: Vec<String> = vec!["subnet-1".into(), "subnet-2".into()];
        assert_eq!(Vec::<String>::build_from(&subnets.to_builder()).unwrap(), subnets);

        let mut tags = BTreeMap::new();
        tags.insert("owner".to_string(), "sre".to_string());
        assert_eq!(BTreeMap::<String, String>::build_from(&tags).unwrap(), tags);
    }
}
