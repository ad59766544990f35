//! Dynamic containers: values whose concrete type is only known at runtime.
//!
//! [`DynDeepCopy`] is the object-safe face of [`DeepCopy`]. It is
//! implemented for every `'static` `DeepCopy` type, so any such value can be
//! boxed as `Box<dyn DynDeepCopy>` and copied without knowing its type. The
//! copy is a new box holding the copy of the concrete value.
//!
//! Trait objects of your own traits are supported by giving the trait a
//! `deep_copy_boxed` method and invoking [`deep_copy_boxed!`]:
//!
//! ```rust
//! use ccopy::{deep_copy_boxed, deep_copy_struct, Copier, CopyError, Registry};
//!
//! trait Animal {
//!     fn name(&self) -> &str;
//!     fn deep_copy_boxed(&self, cx: &mut Copier<'_>) -> Result<Box<dyn Animal>, CopyError>;
//! }
//!
//! struct Dog {
//!     name: String,
//! }
//!
//! deep_copy_struct!(Dog { name });
//!
//! impl Animal for Dog {
//!     fn name(&self) -> &str {
//!         &self.name
//!     }
//!
//!     fn deep_copy_boxed(&self, cx: &mut Copier<'_>) -> Result<Box<dyn Animal>, CopyError> {
//!         Ok(Box::new(cx.copy(self)?))
//!     }
//! }
//!
//! deep_copy_boxed!(Animal);
//!
//! let pet: Box<dyn Animal> = Box::new(Dog { name: "rex".into() });
//! let copy = Registry::new().copy(&pet).unwrap();
//! assert_eq!(copy.name(), "rex");
//! ```
//!
//! [`deep_copy_boxed!`]: crate::deep_copy_boxed

use core::any::{type_name, Any};
use core::fmt;

use crate::copy::{Copier, DeepCopy};
use crate::error::CopyError;
use crate::shape::Shape;

/// Object-safe deep copy.
pub trait DynDeepCopy: Any {
    /// Copy the concrete value into a new box.
    fn dyn_deep_copy(&self, cx: &mut Copier<'_>) -> Result<Box<dyn DynDeepCopy>, CopyError>;

    /// Shape of the concrete value.
    fn shape(&self) -> Shape;

    /// Name of the concrete type.
    fn type_name(&self) -> &'static str;

    /// Borrow as `Any`, for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Convert into `Box<dyn Any>`, for downcasting by value.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: DeepCopy + Any> DynDeepCopy for T {
    fn dyn_deep_copy(&self, cx: &mut Copier<'_>) -> Result<Box<dyn DynDeepCopy>, CopyError> {
        let copy: Box<dyn DynDeepCopy> = Box::new(cx.copy(self)?);
        Ok(copy)
    }

    fn shape(&self) -> Shape {
        T::SHAPE
    }

    fn type_name(&self) -> &'static str {
        type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl dyn DynDeepCopy {
    /// `true` if the concrete value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Borrow the concrete value as a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    /// Take the concrete value out as a `T`.
    pub fn downcast<T: Any>(self: Box<Self>) -> Option<Box<T>> {
        self.into_any().downcast::<T>().ok()
    }

    /// Look through `Box<dyn DynDeepCopy>` layers to the concrete value.
    ///
    /// A boxed trait object is itself `DynDeepCopy`, so `&boxed` coerces to a
    /// trait object whose concrete type is the box.
    pub(crate) fn innermost(&self) -> &dyn DynDeepCopy {
        let mut value = self;
        while let Some(inner) = value.downcast_ref::<Box<dyn DynDeepCopy>>() {
            value = &**inner;
        }
        value
    }
}

impl fmt::Debug for dyn DynDeepCopy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynDeepCopy")
            .field("type", &self.type_name())
            .field("shape", &self.shape())
            .finish()
    }
}

impl DeepCopy for Box<dyn DynDeepCopy> {
    const SHAPE: Shape = Shape::Dynamic;

    fn deep_copy(&self, cx: &mut Copier<'_>) -> Result<Self, CopyError> {
        (**self).dyn_deep_copy(cx)
    }
}

/// Implement `DeepCopy` for `Box<dyn Trait>` of your own traits.
///
/// Each trait must declare
/// `fn deep_copy_boxed(&self, cx: &mut Copier<'_>) -> Result<Box<dyn Trait>, CopyError>`.
/// See the [`dynamic`](crate::dynamic) module for an example.
#[macro_export]
macro_rules! deep_copy_boxed {
    ($($tr:path),+ $(,)?) => {
        $(
            impl $crate::DeepCopy for ::std::boxed::Box<dyn $tr> {
                const SHAPE: $crate::Shape = $crate::Shape::Dynamic;

                fn deep_copy(
                    &self,
                    cx: &mut $crate::Copier<'_>,
                ) -> ::core::result::Result<Self, $crate::CopyError> {
                    (**self).deep_copy_boxed(cx)
                }
            }
        )+
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Registry;

    #[test]
    fn test_boxed_value_copies_to_new_box_of_same_type() {
        let original: Box<dyn DynDeepCopy> = Box::new(vec![1u16, 2]);
        let copy = Registry::new().copy(&original).unwrap();
        assert_eq!((*copy).shape(), Shape::Slice);
        assert_eq!(copy.downcast_ref::<Vec<u16>>(), Some(&vec![1, 2]));
        let original_ptr = original.downcast_ref::<Vec<u16>>().unwrap().as_ptr();
        let copy_ptr = copy.downcast_ref::<Vec<u16>>().unwrap().as_ptr();
        assert_ne!(original_ptr, copy_ptr);
    }

    #[test]
    fn test_nil_dynamic_field_stays_nil() {
        let original: Option<Box<dyn DynDeepCopy>> = None;
        assert!(Registry::new().copy(&original).unwrap().is_none());
    }

    #[test]
    fn test_uninitialised_top_level_value_is_invalid() {
        let err = Registry::new().copy_dynamic(None).unwrap_err();
        assert_eq!(err, CopyError::InvalidValue);
    }

    #[test]
    fn test_copy_dynamic_of_concrete_value() {
        let value = String::from("held");
        let copy = Registry::new().copy_dynamic(Some(&value)).unwrap();
        assert!(copy.is::<String>());
        assert_eq!(*copy.downcast::<String>().unwrap(), "held");
    }

    #[test]
    fn test_copy_dynamic_looks_through_held_box() {
        let held: Box<dyn DynDeepCopy> = Box::new(String::from("held"));
        let copy = Registry::new().copy_dynamic(Some(&held)).unwrap();
        assert!(copy.is::<String>());
        assert_eq!((*copy).shape(), Shape::Scalar);
        assert_eq!(*copy.downcast::<String>().unwrap(), "held");
    }

    #[test]
    fn test_innermost_strips_nested_boxes() {
        let inner: Box<dyn DynDeepCopy> = Box::new(7u8);
        let outer: Box<dyn DynDeepCopy> = Box::new(inner);
        let value: &dyn DynDeepCopy = &outer;
        assert!(value.is::<Box<dyn DynDeepCopy>>());
        assert_eq!(value.innermost().downcast_ref::<u8>(), Some(&7));
    }

    #[test]
    fn test_downcast_to_wrong_type_is_none() {
        let boxed: Box<dyn DynDeepCopy> = Box::new(1u8);
        assert!(boxed.downcast_ref::<u16>().is_none());
        assert!(boxed.downcast::<i8>().is_none());
    }
}
