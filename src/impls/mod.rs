//! `DeepCopy` implementations for standard and third-party types, grouped by
//! shape.

mod mapping;
mod opaque;
mod pointer;
mod scalar;
mod sequence;
mod time;
mod tuple;

pub use opaque::Shared;

// ─── passthrough helper ─────────────────────────────────────────────────────

/// Implement `DeepCopy` for types whose copy is a plain `Clone`.
macro_rules! impl_deep_copy_by_clone {
    ($shape:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::copy::DeepCopy for $ty {
                const SHAPE: $crate::shape::Shape = $crate::shape::Shape::$shape;

                #[inline]
                fn deep_copy(
                    &self,
                    _cx: &mut $crate::copy::Copier<'_>,
                ) -> Result<Self, $crate::error::CopyError> {
                    Ok(::core::clone::Clone::clone(self))
                }
            }
        )+
    };
}

pub(crate) use impl_deep_copy_by_clone;
