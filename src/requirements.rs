//! Static inventory of the tags a type graph uses.
//!
//! [`Requirements::of`] walks a type (not a value) through
//! [`DeepCopy::requirements`] and records every tagged field it can reach,
//! along with the type the field's transformer must work on. The registry
//! checks this list up front, turning a missing or mistyped transformer into
//! a construction-time error instead of a failure halfway through a copy.
//!
//! Recursive types are walked once: a struct that has already been entered
//! is not entered again.

use core::any::{type_name, TypeId};
use std::collections::HashSet;

use crate::copy::DeepCopy;

/// One tagged field reachable from the root type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TagRequirement {
    /// Type that declares the field.
    pub owner: &'static str,
    /// Field name.
    pub field: &'static str,
    /// Tag the field is bound to.
    pub tag: String,
    /// Type the transformer must accept and return.
    pub type_name: &'static str,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) type_id: TypeId,
}

/// Every tag requirement reachable from a root type, in declaration order.
#[derive(Clone, Debug, Default)]
pub struct Requirements {
    items: Vec<TagRequirement>,
    visited: HashSet<TypeId>,
}

impl Requirements {
    /// An empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect the requirements of `T`.
    pub fn of<T: DeepCopy>() -> Self {
        let mut reqs = Self::new();
        reqs.nested::<T>();
        reqs
    }

    /// Mark struct `S` as entered. Returns `false` if it already was, in
    /// which case the caller must not list its fields again.
    pub fn enter<S: 'static>(&mut self) -> bool {
        self.visited.insert(TypeId::of::<S>())
    }

    /// Record the requirements of a child type.
    pub fn nested<T: DeepCopy>(&mut self) {
        T::requirements(self);
    }

    /// Record that field `field` of `S` is tagged `tag` and holds an `F`.
    pub fn tag<S: 'static, F: 'static>(&mut self, field: &'static str, tag: &str) {
        self.items.push(TagRequirement {
            owner: type_name::<S>(),
            field,
            tag: tag.to_owned(),
            type_name: type_name::<F>(),
            type_id: TypeId::of::<F>(),
        });
    }

    /// Iterate over the recorded requirements.
    pub fn iter(&self) -> impl Iterator<Item = &TagRequirement> {
        self.items.iter()
    }

    /// Distinct tag names, in first-seen order.
    pub fn tags(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .map(|r| r.tag.as_str())
            .filter(|t| seen.insert(*t))
            .collect()
    }

    /// Number of recorded requirements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` if nothing reachable is tagged.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> IntoIterator for &'a Requirements {
    type Item = &'a TagRequirement;
    type IntoIter = core::slice::Iter<'a, TagRequirement>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Helpers used by the code `deep_copy_struct!` expands to. The accessor
/// closures only exist to let the compiler infer field types.
#[doc(hidden)]
pub mod __private {
    use super::Requirements;
    use crate::copy::DeepCopy;

    /// Forward to an untagged field's type.
    pub fn nested_field<S, F, A>(reqs: &mut Requirements, _accessor: A)
    where
        F: DeepCopy,
        A: Fn(&S) -> &F,
    {
        reqs.nested::<F>();
    }

    /// Record a tagged field.
    pub fn tagged_field<S, F, A>(reqs: &mut Requirements, field: &'static str, tag: &str, _accessor: A)
    where
        S: 'static,
        F: 'static,
        A: Fn(&S) -> &F,
    {
        reqs.tag::<S, F>(field, tag);
    }
}
