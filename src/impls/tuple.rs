//! Tuples, copied as anonymous structs with positional fields.

use crate::copy::{Copier, DeepCopy};
use crate::error::CopyError;
use crate::requirements::Requirements;
use crate::shape::Shape;

macro_rules! impl_tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: DeepCopy),+> DeepCopy for ($($name,)+) {
            const SHAPE: Shape = Shape::Struct;

            fn deep_copy(&self, cx: &mut Copier<'_>) -> Result<Self, CopyError> {
                Ok(($(cx.field(stringify!($idx), &self.$idx)?,)+))
            }

            fn requirements(reqs: &mut Requirements) {
                $(reqs.nested::<$name>();)+
            }
        }
    };
}

impl_tuple!(A: 0);
impl_tuple!(A: 0, B: 1);
impl_tuple!(A: 0, B: 1, C: 2);
impl_tuple!(A: 0, B: 1, C: 2, D: 3);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);

#[cfg(test)]
mod tests {
    use crate::Registry;

    #[test]
    fn test_tuple_fields_copy_in_place() {
        let original = (1u8, String::from("two"), vec![3.0f32]);
        let mut copy = Registry::new().copy(&original).unwrap();
        assert_eq!(copy, original);
        copy.2.push(4.0);
        assert_eq!(original.2.len(), 1);
    }
}
