//! Handles that are aliased, never duplicated.
//!
//! A copy of a channel sender must keep feeding the same channel, and a copy
//! of a function pointer must call the same function. [`Shared`] extends the
//! same treatment to any value the caller wants aliased rather than copied.

use core::fmt;
use core::ops::Deref;
use std::sync::mpsc::{Sender, SyncSender};
use std::sync::Arc;

use crate::copy::{Copier, DeepCopy};
use crate::error::CopyError;
use crate::shape::Shape;

macro_rules! impl_fn_pointer {
    ($($arg:ident),*) => {
        impl<$($arg,)* R> DeepCopy for fn($($arg),*) -> R {
            const SHAPE: Shape = Shape::Opaque;

            fn deep_copy(&self, _cx: &mut Copier<'_>) -> Result<Self, CopyError> {
                Ok(*self)
            }
        }
    };
}

impl_fn_pointer!();
impl_fn_pointer!(A);
impl_fn_pointer!(A, B);
impl_fn_pointer!(A, B, C);
impl_fn_pointer!(A, B, C, D);

impl<T> DeepCopy for Sender<T> {
    const SHAPE: Shape = Shape::Opaque;

    fn deep_copy(&self, _cx: &mut Copier<'_>) -> Result<Self, CopyError> {
        Ok(self.clone())
    }
}

impl<T> DeepCopy for SyncSender<T> {
    const SHAPE: Shape = Shape::Opaque;

    fn deep_copy(&self, _cx: &mut Copier<'_>) -> Result<Self, CopyError> {
        Ok(self.clone())
    }
}

/// A value that copies alias instead of duplicating.
///
/// Unlike `Arc<T>`, which the copy treats as an owning pointer and
/// re-allocates, `Shared<T>` keeps every copy pointing at the same
/// allocation. `T` needs no `DeepCopy` implementation.
pub struct Shared<T: ?Sized>(Arc<T>);

impl<T> Shared<T> {
    /// Wrap `value` in a new shared allocation.
    pub fn new(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl<T: ?Sized> Shared<T> {
    /// `true` if both handles point at the same allocation.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }

    /// The underlying reference-counted pointer.
    pub fn as_arc(&self) -> &Arc<T> {
        &self.0
    }
}

impl<T: ?Sized> From<Arc<T>> for Shared<T> {
    fn from(inner: Arc<T>) -> Self {
        Self(inner)
    }
}

impl<T: ?Sized> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Shared<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shared").field(&&*self.0).finish()
    }
}

impl<T: ?Sized + PartialEq> PartialEq for Shared<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized> DeepCopy for Shared<T> {
    const SHAPE: Shape = Shape::Opaque;

    fn deep_copy(&self, _cx: &mut Copier<'_>) -> Result<Self, CopyError> {
        Ok(self.clone())
    }
}
