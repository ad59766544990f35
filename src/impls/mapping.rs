//! Key → value associations and sets.
//!
//! Keys and values are copied independently and inserted into a fresh map
//! sized for the original's length. Sets are treated as maps to `()`.

use core::hash::{BuildHasher, Hash};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::copy::{Copier, DeepCopy};
use crate::error::CopyError;
use crate::requirements::Requirements;
use crate::shape::Shape;

macro_rules! impl_hash_map {
    ($map:ident) => {
        impl<K, V, S> DeepCopy for $map<K, V, S>
        where
            K: DeepCopy + Eq + Hash,
            V: DeepCopy,
            S: BuildHasher + Default,
        {
            const SHAPE: Shape = Shape::Mapping;

            fn deep_copy(&self, cx: &mut Copier<'_>) -> Result<Self, CopyError> {
                let mut out = $map::with_capacity_and_hasher(self.len(), S::default());
                for (key, value) in self {
                    let key = cx.copy(key)?;
                    let value = cx.copy(value)?;
                    out.insert(key, value);
                }
                Ok(out)
            }

            fn requirements(reqs: &mut Requirements) {
                reqs.nested::<K>();
                reqs.nested::<V>();
            }
        }
    };
}

macro_rules! impl_hash_set {
    ($set:ident) => {
        impl<T, S> DeepCopy for $set<T, S>
        where
            T: DeepCopy + Eq + Hash,
            S: BuildHasher + Default,
        {
            const SHAPE: Shape = Shape::Mapping;

            fn deep_copy(&self, cx: &mut Copier<'_>) -> Result<Self, CopyError> {
                let mut out = $set::with_capacity_and_hasher(self.len(), S::default());
                for item in self {
                    out.insert(cx.copy(item)?);
                }
                Ok(out)
            }

            fn requirements(reqs: &mut Requirements) {
                reqs.nested::<T>();
            }
        }
    };
}

impl_hash_map!(HashMap);
impl_hash_set!(HashSet);

mod hashbrown_impls {
    use hashbrown::{HashMap, HashSet};

    use super::*;

    impl_hash_map!(HashMap);
    impl_hash_set!(HashSet);
}

impl<K, V> DeepCopy for BTreeMap<K, V>
where
    K: DeepCopy + Ord,
    V: DeepCopy,
{
    const SHAPE: Shape = Shape::Mapping;

    fn deep_copy(&self, cx: &mut Copier<'_>) -> Result<Self, CopyError> {
        let mut out = BTreeMap::new();
        for (key, value) in self {
            let key = cx.copy(key)?;
            let value = cx.copy(value)?;
            out.insert(key, value);
        }
        Ok(out)
    }

    fn requirements(reqs: &mut Requirements) {
        reqs.nested::<K>();
        reqs.nested::<V>();
    }
}

impl<T: DeepCopy + Ord> DeepCopy for BTreeSet<T> {
    const SHAPE: Shape = Shape::Mapping;

    fn deep_copy(&self, cx: &mut Copier<'_>) -> Result<Self, CopyError> {
        let mut out = BTreeSet::new();
        for item in self {
            out.insert(cx.copy(item)?);
        }
        Ok(out)
    }

    fn requirements(reqs: &mut Requirements) {
        reqs.nested::<T>();
    }
}
