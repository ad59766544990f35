//! The closed set of value shapes the dispatcher knows how to copy.
//!
//! Each [`DeepCopy`](crate::DeepCopy) implementation declares exactly one
//! shape through its `SHAPE` constant. The shape decides the copy strategy:
//!
//! | Shape | Strategy |
//! |-------|----------|
//! | [`Shape::Scalar`] | returned by value |
//! | [`Shape::Opaque`] | aliased, never duplicated (function pointers, channel senders) |
//! | [`Shape::Timestamp`] | immutable calendar value, returned unchanged |
//! | [`Shape::Pointer`] | fresh allocation holding a copy of the pointee |
//! | [`Shape::Struct`] | field by field, honouring tags |
//! | [`Shape::Slice`] | new sequence, elements copied in order |
//! | [`Shape::Array`] | element-wise, length fixed by the type |
//! | [`Shape::Mapping`] | new map, keys and values copied independently |
//! | [`Shape::Dynamic`] | new box holding a copy of the concrete value |

use core::fmt;

/// Structural category of a copyable type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Shape {
    /// Value-semantic leaf: numbers, booleans, characters, strings.
    Scalar,
    /// Handle that must keep pointing at the same underlying resource.
    Opaque,
    /// Calendar or clock value treated as immutable.
    Timestamp,
    /// Owning pointer (`Box`, `Rc`, `Arc`).
    Pointer,
    /// Record with named fields.
    Struct,
    /// Growable ordered sequence.
    Slice,
    /// Fixed-length sequence.
    Array,
    /// Key → value association.
    Mapping,
    /// Trait object whose concrete type is only known at runtime.
    Dynamic,
}

impl Shape {
    /// Every shape, in declaration order.
    pub const ALL: [Shape; 9] = [
        Shape::Scalar,
        Shape::Opaque,
        Shape::Timestamp,
        Shape::Pointer,
        Shape::Struct,
        Shape::Slice,
        Shape::Array,
        Shape::Mapping,
        Shape::Dynamic,
    ];

    /// Lower-case name used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Scalar => "scalar",
            Shape::Opaque => "opaque",
            Shape::Timestamp => "timestamp",
            Shape::Pointer => "pointer",
            Shape::Struct => "struct",
            Shape::Slice => "slice",
            Shape::Array => "array",
            Shape::Mapping => "mapping",
            Shape::Dynamic => "dynamic",
        }
    }

    /// `true` when a copy of this shape may share state with the original.
    pub fn is_passthrough(self) -> bool {
        matches!(self, Shape::Opaque | Shape::Timestamp)
    }

    /// `true` when the copy recurses into child values.
    pub fn is_composite(self) -> bool {
        matches!(
            self,
            Shape::Pointer
                | Shape::Struct
                | Shape::Slice
                | Shape::Array
                | Shape::Mapping
                | Shape::Dynamic
        )
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_and_composite_are_disjoint() {
        for shape in Shape::ALL {
            let leaf = matches!(shape, Shape::Scalar) || shape.is_passthrough();
            assert_ne!(leaf, shape.is_composite(), "{shape}");
        }
    }

    #[test]
    fn test_only_opaque_and_timestamp_alias() {
        let aliasing: Vec<Shape> = Shape::ALL.into_iter().filter(|s| s.is_passthrough()).collect();
        assert_eq!(aliasing, vec![Shape::Opaque, Shape::Timestamp]);
    }

    #[test]
    fn test_display_matches_as_str() {
        assert_eq!(Shape::Mapping.to_string(), "mapping");
        assert_eq!(format!("{}", Shape::Dynamic), Shape::Dynamic.as_str());
    }
}
