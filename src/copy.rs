//! The recursive copy dispatcher.
//!
//! [`DeepCopy`] attaches a copy strategy and a [`Shape`] to a type.
//! [`Copier`] is the state threaded through one copy: the registry it
//! consults and the current nesting depth. Implementations recurse into
//! children through [`Copier::copy`], which enforces the depth limit and
//! traces every dispatched value. `Option` and the owning pointers are the
//! exception: they call the pointee's `deep_copy` directly and share the
//! level of the value that holds them.
//!
//! Raw pointers have no implementation, so a graph exposing one does not
//! compile:
//!
//! ```rust,compile_fail
//! let registry = ccopy::Registry::new();
//! let value: *const u8 = core::ptr::null();
//! let _ = registry.copy(&value);
//! ```

use core::any::type_name;

use tracing::{debug, trace};

use crate::error::CopyError;
use crate::registry::Registry;
use crate::requirements::Requirements;
use crate::shape::Shape;

/// A type that can be deep-copied under a [`Registry`].
pub trait DeepCopy: Sized {
    /// The shape this type is classified as.
    const SHAPE: Shape;

    /// Produce an independent copy of `self`.
    ///
    /// Child values must be copied through `cx` ([`Copier::copy`],
    /// [`Copier::field`] or [`Copier::tagged`]).
    fn deep_copy(&self, cx: &mut Copier<'_>) -> Result<Self, CopyError>;

    /// Record every tag this type can reach.
    ///
    /// Containers forward to their element types; structs list their tagged
    /// fields and forward to untagged ones. Leaves keep the default.
    ///
    /// A hand-written impl that calls [`Copier::tagged`] must override this
    /// and record each tag with [`Requirements::tag`], and forward untagged
    /// fields with [`Requirements::nested`]. The default records nothing, so
    /// [`Registry::validate`] would accept a registry missing those tags.
    /// Recursive types should start with [`Requirements::enter`].
    fn requirements(_reqs: &mut Requirements) {}
}

/// State of one copy operation.
#[derive(Debug)]
pub struct Copier<'r> {
    registry: &'r Registry,
    depth: usize,
}

impl<'r> Copier<'r> {
    pub(crate) fn new(registry: &'r Registry) -> Self {
        Self { registry, depth: 0 }
    }

    /// The registry this copy consults.
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Nesting depth of the value currently being copied (root = 1).
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Classify `value` by its shape and copy it.
    pub fn copy<T: DeepCopy>(&mut self, value: &T) -> Result<T, CopyError> {
        let depth = self.enter()?;
        trace!(shape = %T::SHAPE, ty = type_name::<T>(), depth, "copy");
        let result = value.deep_copy(self);
        self.depth -= 1;
        result
    }

    /// Copy an untagged struct field.
    pub fn field<T: DeepCopy>(&mut self, name: &'static str, value: &T) -> Result<T, CopyError> {
        trace!(field = name, "untagged field");
        self.copy(value)
    }

    /// Produce a tagged struct field through its registered transformer.
    ///
    /// The transformer's result is used as is; it is not copied again.
    pub fn tagged<T: 'static>(
        &mut self,
        name: &'static str,
        tag: &str,
        value: &T,
    ) -> Result<T, CopyError> {
        let transform = self.registry.transformer::<T>(tag)?;
        debug!(field = name, tag, ty = type_name::<T>(), "applying copy customiser");
        Ok(transform(value))
    }

    fn enter(&mut self) -> Result<usize, CopyError> {
        if let Some(limit) = self.registry.max_depth() {
            if self.depth >= limit {
                return Err(CopyError::DepthExceeded { limit });
            }
        }
        self.depth += 1;
        Ok(self.depth)
    }
}
