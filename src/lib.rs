//! # ccopy
//!
//! Customisable deep copy — clone an object graph while rewriting selected
//! fields on the way.
//!
//! ---
//!
//! A copy walks the value recursively. Every type is classified into one of a
//! fixed set of [`Shape`]s, and each shape has one copy rule: scalars are
//! copied by value, owning pointers get a fresh allocation, sequences and maps
//! are rebuilt element by element, structs field by field. Channel senders,
//! function pointers and [`Shared`] handles are aliased instead of copied, and
//! timestamps are returned unchanged.
//!
//! A struct field can carry a **tag**. Instead of being copied, a tagged field
//! is produced by the transformer registered under that tag in the
//! [`Registry`] — the hook for anonymising, redacting or recomputing data
//! while taking a snapshot.
//!
//! ```rust
//! use ccopy::{deep_copy_struct, Registry};
//!
//! #[derive(Debug, PartialEq)]
//! struct T {
//!     a: i32,
//!     name: String,
//! }
//!
//! deep_copy_struct!(T {
//!     a,
//!     #[copy("anonymise_name")]
//!     name,
//! });
//!
//! let registry = Registry::new().with("anonymise_name", |_: &String| "john doe".to_string());
//! let copy = registry.copy(&T { a: 2, name: "Secret name".into() }).unwrap();
//! assert_eq!(copy, T { a: 2, name: "john doe".into() });
//! ```
//!
//! ## Module overview
//!
//! | Module | Key types | What it does |
//! |--------|-----------|--------------|
//! | [`registry`] | [`Registry`] | Tag → transformer map, copy options, entry points |
//! | [`copy`] | [`DeepCopy`], [`Copier`] | Shape dispatch and the per-copy state |
//! | [`shape`] | [`Shape`] | The closed set of copy strategies |
//! | [`dynamic`] | [`DynDeepCopy`] | Trait-object values copied through their concrete type |
//! | [`requirements`] | [`Requirements`], [`TagRequirement`] | Static tag inventory for eager validation |
//! | [`error`] | [`CopyError`] | Recoverable copy failures |
//!
//! ## Validation
//!
//! Tags are resolved when the copy reaches them. To fail before any data is
//! touched, validate the registry against the root type once:
//!
//! ```rust
//! # use ccopy::{deep_copy_struct, CopyError, Registry};
//! # struct User { name: String }
//! # deep_copy_struct!(User { #[copy("anonymise_name")] name });
//! let err = Registry::new().validated_for::<User>().unwrap_err();
//! assert_eq!(err, CopyError::missing("anonymise_name"));
//! ```
//!
//! ## Features
//!
//! - `chrono` (default): chrono date and time types copy as timestamps.
//! - `serde`: [`Shape`] and [`TagRequirement`] implement `Serialize`.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod copy;
pub mod dynamic;
pub mod error;
mod impls;
mod macros;
pub mod registry;
pub mod requirements;
pub mod shape;

pub use copy::{Copier, DeepCopy};
pub use dynamic::DynDeepCopy;
pub use error::CopyError;
pub use impls::Shared;
pub use registry::{Registry, TransformFn, DEFAULT_MAX_DEPTH};
pub use requirements::{Requirements, TagRequirement};
pub use shape::Shape;
