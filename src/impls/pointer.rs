//! Owning pointers and optional values.
//!
//! A pointer copy allocates a new cell and fills it with the copy of the
//! pointee, so the result never shares the original's allocation. `None`
//! stays `None`: an absent pointer, slice or map never turns into an empty
//! one.
//!
//! Neither wrapper is a nesting level of its own: both forward to the
//! pointee's `deep_copy` within the level of the value that holds them, so a
//! linked list costs one level per node.

use std::rc::Rc;
use std::sync::Arc;

use crate::copy::{Copier, DeepCopy};
use crate::error::CopyError;
use crate::requirements::Requirements;
use crate::shape::Shape;

impl<T: DeepCopy> DeepCopy for Option<T> {
    const SHAPE: Shape = T::SHAPE;

    fn deep_copy(&self, cx: &mut Copier<'_>) -> Result<Self, CopyError> {
        match self {
            Some(value) => value.deep_copy(cx).map(Some),
            None => Ok(None),
        }
    }

    fn requirements(reqs: &mut Requirements) {
        reqs.nested::<T>();
    }
}

macro_rules! impl_owning_pointer {
    ($($ptr:ident),+) => {
        $(
            impl<T: DeepCopy> DeepCopy for $ptr<T> {
                const SHAPE: Shape = Shape::Pointer;

                fn deep_copy(&self, cx: &mut Copier<'_>) -> Result<Self, CopyError> {
                    (**self).deep_copy(cx).map($ptr::new)
                }

                fn requirements(reqs: &mut Requirements) {
                    reqs.nested::<T>();
                }
            }
        )+
    };
}

impl_owning_pointer!(Box, Rc, Arc);
