//! Value-semantic leaves.

use core::marker::PhantomData;
use core::num::{
    NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroU8,
    NonZeroUsize,
};
use core::time::Duration;

use super::impl_deep_copy_by_clone;
use crate::copy::{Copier, DeepCopy};
use crate::error::CopyError;
use crate::shape::Shape;

impl_deep_copy_by_clone!(Scalar =>
    bool, char, (),
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    NonZeroI8, NonZeroI16, NonZeroI32, NonZeroI64,
    NonZeroU8, NonZeroU16, NonZeroU32, NonZeroU64, NonZeroUsize,
    String, &'static str,
    Duration,
);

impl<T: ?Sized> DeepCopy for PhantomData<T> {
    const SHAPE: Shape = Shape::Scalar;

    fn deep_copy(&self, _cx: &mut Copier<'_>) -> Result<Self, CopyError> {
        Ok(PhantomData)
    }
}

#[cfg(test)]
mod tests {
    use crate::Registry;

    #[test]
    fn test_numbers_and_text_copy_by_value() {
        let registry = Registry::new();
        assert_eq!(registry.copy(&42i32).unwrap(), 42);
        assert_eq!(registry.copy(&-1.5f64).unwrap(), -1.5);
        assert!(registry.copy(&true).unwrap());
        assert_eq!(registry.copy(&'x').unwrap(), 'x');
        assert_eq!(registry.copy(&u128::MAX).unwrap(), u128::MAX);
    }

    #[test]
    fn test_string_copy_is_a_new_allocation() {
        let registry = Registry::new();
        let original = String::from("Secret name");
        let copy = registry.copy(&original).unwrap();
        assert_eq!(copy, original);
        assert_ne!(copy.as_ptr(), original.as_ptr());
    }
}
