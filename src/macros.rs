//! `deep_copy_struct!`: declare how a struct is copied and which fields are
//! tagged.

/// Implement [`DeepCopy`](crate::DeepCopy) for a struct with named fields.
///
/// List every field of the struct, in declaration order. Each field takes
/// one of three forms:
///
/// - `field` — copied recursively (the field type must be `DeepCopy`);
/// - `#[copy("tag")] field` — produced by the transformer registered under
///   `"tag"`, called once with a reference to the original value;
/// - `#[skip] field` — never read; the copy holds `Default::default()`.
///   Use it for private state that must not leak into copies.
///
/// ```rust
/// use ccopy::{deep_copy_struct, Registry};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Inner {
///     data: Vec<String>,
/// }
///
/// #[derive(Debug, PartialEq)]
/// struct Outer {
///     inner: Inner,
///     count: u32,
///     cache: Vec<u8>,
/// }
///
/// deep_copy_struct!(Inner {
///     #[copy("first_only")]
///     data,
/// });
///
/// deep_copy_struct!(Outer {
///     inner,
///     count,
///     #[skip]
///     cache,
/// });
///
/// let registry = Registry::new().with("first_only", |data: &Vec<String>| {
///     data.iter().take(1).cloned().collect::<Vec<_>>()
/// });
///
/// let original = Outer {
///     inner: Inner { data: vec!["1".into(), "2".into()] },
///     count: 1,
///     cache: vec![0xff],
/// };
/// let copy = registry.copy(&original).unwrap();
/// assert_eq!(copy.inner.data, vec!["1"]);
/// assert_eq!(copy.count, 1);
/// assert!(copy.cache.is_empty());
/// ```
///
/// Generic structs, tuple structs and enums implement the trait by hand
/// with [`Copier::field`](crate::Copier::field) and
/// [`Copier::tagged`](crate::Copier::tagged), and list their tags in
/// [`DeepCopy::requirements`](crate::DeepCopy::requirements) so that
/// validation sees them.
#[macro_export]
macro_rules! deep_copy_struct {
    (@copy $cx:ident, $src:ident, $field:ident, []) => {
        $cx.field(::core::stringify!($field), &$src.$field)?
    };
    (@copy $cx:ident, $src:ident, $field:ident, [copy ($tag:literal)]) => {
        $cx.tagged(::core::stringify!($field), $tag, &$src.$field)?
    };
    (@copy $cx:ident, $src:ident, $field:ident, [skip]) => {
        ::core::default::Default::default()
    };

    (@require $reqs:ident, $field:ident, []) => {
        $crate::requirements::__private::nested_field($reqs, |s: &Self| &s.$field)
    };
    (@require $reqs:ident, $field:ident, [copy ($tag:literal)]) => {
        $crate::requirements::__private::tagged_field(
            $reqs,
            ::core::stringify!($field),
            $tag,
            |s: &Self| &s.$field,
        )
    };
    (@require $reqs:ident, $field:ident, [skip]) => {
        ()
    };

    ($ty:ident { $( $(#[$attr:ident $(($tag:literal))?])? $field:ident ),* $(,)? }) => {
        impl $crate::DeepCopy for $ty {
            const SHAPE: $crate::Shape = $crate::Shape::Struct;

            fn deep_copy(
                &self,
                cx: &mut $crate::Copier<'_>,
            ) -> ::core::result::Result<Self, $crate::CopyError> {
                ::core::result::Result::Ok(Self {
                    $(
                        $field: $crate::deep_copy_struct!(
                            @copy cx, self, $field, [$($attr $(($tag))?)?]
                        ),
                    )*
                })
            }

            fn requirements(reqs: &mut $crate::Requirements) {
                if !reqs.enter::<Self>() {
                    return;
                }
                $(
                    $crate::deep_copy_struct!(@require reqs, $field, [$($attr $(($tag))?)?]);
                )*
            }
        }
    };
}
