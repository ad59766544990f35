//! The registry of named copy customisers.
//!
//! A [`Registry`] maps a tag name to a transformer: a function that receives
//! a reference to the tagged field's current value and returns the value the
//! copy should hold instead. Transformers are stored type-erased together with
//! the type they work on, so a lookup can tell "no such tag" apart from "tag
//! registered for another type".
//!
//! ```rust
//! use ccopy::{deep_copy_struct, Registry};
//!
//! #[derive(Debug, PartialEq)]
//! struct User {
//!     id: u32,
//!     name: String,
//! }
//!
//! deep_copy_struct!(User {
//!     id,
//!     #[copy("anonymise_name")]
//!     name,
//! });
//!
//! let registry = Registry::new().with("anonymise_name", |_: &String| "john doe".to_string());
//! let copy = registry.copy(&User { id: 2, name: "Secret name".into() }).unwrap();
//! assert_eq!(copy, User { id: 2, name: "john doe".into() });
//! ```

use core::any::{type_name, Any, TypeId};
use core::fmt;
use std::sync::Arc;

use hashbrown::HashMap;
use tracing::{debug, warn};

use crate::copy::{Copier, DeepCopy};
use crate::dynamic::DynDeepCopy;
use crate::error::CopyError;
use crate::requirements::Requirements;

/// Default bound on how deeply nested a copied value may be.
pub const DEFAULT_MAX_DEPTH: usize = 4096;

/// Signature of a transformer for values of type `T`.
pub type TransformFn<T> = dyn Fn(&T) -> T + Send + Sync;

/// A type-erased transformer and the type it was registered for.
#[derive(Clone)]
struct Transformer {
    func: Arc<dyn Any + Send + Sync>,
    type_id: TypeId,
    type_name: &'static str,
}

impl Transformer {
    fn new<T, F>(func: F) -> Self
    where
        T: 'static,
        F: Fn(&T) -> T + Send + Sync + 'static,
    {
        let boxed: Box<TransformFn<T>> = Box::new(func);
        Self {
            func: Arc::new(boxed),
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
        }
    }

    fn downcast<T: 'static>(&self) -> Option<&TransformFn<T>> {
        (*self.func)
            .downcast_ref::<Box<TransformFn<T>>>()
            .map(|f| f.as_ref())
    }
}

/// Mapping from tag name to transformer, plus the options of a copy.
///
/// Immutable while a copy runs; a single registry may serve any number of
/// concurrent copies through shared references.
#[derive(Clone)]
pub struct Registry {
    transformers: HashMap<String, Transformer>,
    max_depth: Option<usize>,
}

impl Registry {
    /// An empty registry with the default depth limit.
    pub fn new() -> Self {
        Self {
            transformers: HashMap::new(),
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }

    /// Builder form of [`Registry::insert`].
    pub fn with<T, F>(mut self, tag: impl Into<String>, transformer: F) -> Self
    where
        T: 'static,
        F: Fn(&T) -> T + Send + Sync + 'static,
    {
        self.insert(tag, transformer);
        self
    }

    /// Register `transformer` under `tag`.
    ///
    /// Returns `true` if a transformer was already registered under that tag
    /// and has been replaced.
    pub fn insert<T, F>(&mut self, tag: impl Into<String>, transformer: F) -> bool
    where
        T: 'static,
        F: Fn(&T) -> T + Send + Sync + 'static,
    {
        let tag = tag.into();
        let replaced = self
            .transformers
            .insert(tag.clone(), Transformer::new(transformer));
        if let Some(previous) = &replaced {
            warn!(
                tag = %tag,
                previous = previous.type_name,
                current = type_name::<T>(),
                "replacing copy customiser"
            );
        }
        replaced.is_some()
    }

    /// Remove the transformer registered under `tag`.
    pub fn remove(&mut self, tag: &str) -> bool {
        self.transformers.remove(tag).is_some()
    }

    /// `true` if a transformer is registered under `tag`.
    pub fn contains(&self, tag: &str) -> bool {
        self.transformers.contains_key(tag)
    }

    /// Number of registered transformers.
    pub fn len(&self) -> usize {
        self.transformers.len()
    }

    /// `true` if no transformer is registered.
    pub fn is_empty(&self) -> bool {
        self.transformers.is_empty()
    }

    /// Registered tag names, in no particular order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.transformers.keys().map(String::as_str)
    }

    /// Name of the type the transformer under `tag` works on.
    pub fn transformer_type(&self, tag: &str) -> Option<&'static str> {
        self.transformers.get(tag).map(|t| t.type_name)
    }

    /// Limit the nesting depth of copied values.
    ///
    /// A copy that goes deeper fails with [`CopyError::DepthExceeded`]
    /// instead of exhausting the stack.
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    /// Remove the nesting depth limit.
    pub fn without_depth_limit(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// The configured nesting depth limit, if any.
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Resolve the transformer for a field of type `T` tagged `tag`.
    pub fn transformer<T: 'static>(&self, tag: &str) -> Result<&TransformFn<T>, CopyError> {
        let entry = self
            .transformers
            .get(tag)
            .ok_or_else(|| CopyError::missing(tag))?;
        if entry.type_id != TypeId::of::<T>() {
            return Err(CopyError::TransformerTypeMismatch {
                tag: tag.to_owned(),
                expected: type_name::<T>(),
                registered: entry.type_name,
            });
        }
        entry.downcast::<T>().ok_or_else(|| CopyError::TransformerTypeMismatch {
            tag: tag.to_owned(),
            expected: type_name::<T>(),
            registered: entry.type_name,
        })
    }

    /// Check every tag `T` can reach against this registry.
    ///
    /// Reports the first requirement, in field declaration order, that has
    /// no transformer or a transformer for the wrong type. Requirements behind
    /// dynamic containers are not visible statically and are only checked
    /// when the copy reaches them.
    pub fn validate<T: DeepCopy>(&self) -> Result<(), CopyError> {
        self.check(&Requirements::of::<T>())
    }

    /// Check an already collected set of requirements.
    pub fn check(&self, requirements: &Requirements) -> Result<(), CopyError> {
        for req in requirements.iter() {
            let entry = self
                .transformers
                .get(req.tag.as_str())
                .ok_or_else(|| CopyError::missing(req.tag.as_str()))?;
            if entry.type_id != req.type_id {
                return Err(CopyError::TransformerTypeMismatch {
                    tag: req.tag.clone(),
                    expected: req.type_name,
                    registered: entry.type_name,
                });
            }
        }
        Ok(())
    }

    /// Construction-time form of [`Registry::validate`].
    pub fn validated_for<T: DeepCopy>(self) -> Result<Self, CopyError> {
        self.validate::<T>()?;
        debug!(
            root = type_name::<T>(),
            transformers = self.len(),
            "registry validated"
        );
        Ok(self)
    }

    /// Deep-copy `value`, applying the registered transformers to tagged
    /// fields.
    pub fn copy<T: DeepCopy>(&self, value: &T) -> Result<T, CopyError> {
        let mut cx = Copier::new(self);
        cx.copy(value).map_err(|err| {
            debug!(root = type_name::<T>(), error = %err, "copy aborted");
            err
        })
    }

    /// Deep-copy a value only known as a trait object.
    ///
    /// `None` stands for an uninitialised value and is reported as
    /// [`CopyError::InvalidValue`]. A held `Box<dyn DynDeepCopy>` is looked
    /// through, so the result boxes the concrete value, not the box.
    pub fn copy_dynamic(
        &self,
        value: Option<&dyn DynDeepCopy>,
    ) -> Result<Box<dyn DynDeepCopy>, CopyError> {
        let value = value.ok_or(CopyError::InvalidValue)?.innermost();
        let mut cx = Copier::new(self);
        value.dyn_deep_copy(&mut cx).map_err(|err| {
            debug!(root = value.type_name(), error = %err, "copy aborted");
            err
        })
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<(&str, &str)> = self
            .transformers
            .iter()
            .map(|(tag, t)| (tag.as_str(), t.type_name))
            .collect();
        tags.sort_unstable();
        f.debug_struct("Registry")
            .field("transformers", &tags)
            .field("max_depth", &self.max_depth)
            .finish()
    }
}
