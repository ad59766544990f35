//! Ordered sequences: growable slices and fixed-length arrays.

use std::collections::VecDeque;

use crate::copy::{Copier, DeepCopy};
use crate::error::CopyError;
use crate::requirements::Requirements;
use crate::shape::Shape;

impl<T: DeepCopy> DeepCopy for Vec<T> {
    const SHAPE: Shape = Shape::Slice;

    fn deep_copy(&self, cx: &mut Copier<'_>) -> Result<Self, CopyError> {
        let mut out = Vec::with_capacity(self.len());
        for item in self {
            out.push(cx.copy(item)?);
        }
        Ok(out)
    }

    fn requirements(reqs: &mut Requirements) {
        reqs.nested::<T>();
    }
}

impl<T: DeepCopy> DeepCopy for VecDeque<T> {
    const SHAPE: Shape = Shape::Slice;

    fn deep_copy(&self, cx: &mut Copier<'_>) -> Result<Self, CopyError> {
        let mut out = VecDeque::with_capacity(self.len());
        for item in self {
            out.push_back(cx.copy(item)?);
        }
        Ok(out)
    }

    fn requirements(reqs: &mut Requirements) {
        reqs.nested::<T>();
    }
}

impl<T: DeepCopy, const N: usize> DeepCopy for [T; N] {
    const SHAPE: Shape = Shape::Array;

    fn deep_copy(&self, cx: &mut Copier<'_>) -> Result<Self, CopyError> {
        let mut items = Vec::with_capacity(N);
        for item in self {
            items.push(cx.copy(item)?);
        }
        // Exactly N items were pushed, so this never fails. Any length
        // mismatch would mean the source was not a well-formed array.
        <[T; N]>::try_from(items).map_err(|_| CopyError::InvalidValue)
    }

    fn requirements(reqs: &mut Requirements) {
        reqs.nested::<T>();
    }
}
