//! End-to-end copies of tagged structs.
//!
//! Covers the anonymisation scenarios: a tagged field is replaced by its
//! transformer's output, untagged fields are copied verbatim, and a tag with
//! no registered transformer aborts the whole copy.

use std::collections::HashMap;

use ccopy::{deep_copy_struct, CopyError, Registry};

// ── Fixtures ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, Default, PartialEq)]
struct A {
    data: Vec<String>,
}

#[derive(Clone, Debug, PartialEq)]
struct T {
    data: A,
    name: String,
    c: i32,
    d: Option<Box<A>>,
}

deep_copy_struct!(A {
    #[copy("AnonymiseData")]
    data,
});

deep_copy_struct!(T {
    data,
    #[copy("AnonymiseName")]
    name,
    c,
    d,
});

fn anonymise_name(_: &String) -> String {
    "not important".to_string()
}

fn anonymise_data(data: &Vec<String>) -> Vec<String> {
    data.iter().take(1).cloned().collect()
}

fn registry() -> Registry {
    Registry::new()
        .with("AnonymiseName", anonymise_name)
        .with("AnonymiseData", anonymise_data)
}

// ── Scenarios ────────────────────────────────────────────────────────────────

#[test]
fn test_name_is_replaced_by_transformer() {
    #[derive(Debug, PartialEq)]
    struct Person {
        a: i32,
        name: String,
    }

    deep_copy_struct!(Person {
        a,
        #[copy("anonymiseName")]
        name,
    });

    let registry = Registry::new().with("anonymiseName", |_: &String| "john doe".to_string());
    let copy = registry
        .copy(&Person {
            a: 2,
            name: "Secret name".into(),
        })
        .unwrap();
    assert_eq!(
        copy,
        Person {
            a: 2,
            name: "john doe".into()
        }
    );
}

#[test]
fn test_nested_tags_apply_at_every_level() {
    let original = T {
        name: "important".into(),
        c: 1,
        data: A {
            data: vec!["1".into(), "2".into()],
        },
        d: None,
    };
    let copy = registry().copy(&original).unwrap();

    assert_eq!(copy.name, anonymise_name(&original.name));
    assert_eq!(copy.data.data, vec!["1"]);

    // Everything apart from the tagged fields matches the original.
    let mut restored = copy.clone();
    restored.name = original.name.clone();
    restored.data.data = original.data.data.clone();
    assert_eq!(restored, original);
}

#[test]
fn test_tags_behind_pointers_apply() {
    let original = T {
        name: "n".into(),
        c: 0,
        data: A::default(),
        d: Some(Box::new(A {
            data: vec!["x".into(), "y".into(), "z".into()],
        })),
    };
    let copy = registry().copy(&original).unwrap();
    assert_eq!(copy.d.unwrap().data, vec!["x"]);
    assert_eq!(original.d.as_ref().unwrap().data.len(), 3);
}

#[test]
fn test_nil_pointer_copies_to_nil() {
    let x: Option<Box<i32>> = None;
    let copy = Registry::new().copy(&x).unwrap();
    assert!(copy.is_none());
}

#[test]
fn test_transformer_may_fill_a_nil_field() {
    #[derive(Debug)]
    struct Holder {
        a: Option<Box<i32>>,
    }

    deep_copy_struct!(Holder {
        #[copy("fn")]
        a,
    });

    let registry = Registry::new().with("fn", |_: &Option<Box<i32>>| Some(Box::new(1)));
    let copy = registry.copy(&Holder { a: None }).unwrap();
    assert_eq!(copy.a.as_deref(), Some(&1));
}

#[test]
fn test_missing_transformer_is_reported_by_tag() {
    #[derive(Debug)]
    struct Tagged {
        a: i32,
    }

    deep_copy_struct!(Tagged {
        #[copy("A")]
        a,
    });

    let err = Registry::new().copy(&Tagged { a: 1 }).unwrap_err();
    assert_eq!(err, CopyError::missing("A"));
    assert_eq!(err.to_string(), "missing copy customiser for: A");
}

#[test]
fn test_missing_transformer_deep_in_a_collection_aborts_the_copy() {
    let registry = Registry::new().with("AnonymiseName", anonymise_name);
    let items = vec![
        T {
            name: "a".into(),
            c: 1,
            data: A::default(),
            d: None,
        };
        3
    ];
    let err = registry.copy(&items).unwrap_err();
    assert_eq!(err, CopyError::missing("AnonymiseData"));
}

#[test]
fn test_transformer_for_wrong_type_is_rejected() {
    let registry = Registry::new()
        .with("AnonymiseName", |n: &u64| n + 1)
        .with("AnonymiseData", anonymise_data);
    let original = T {
        name: "n".into(),
        c: 0,
        data: A::default(),
        d: None,
    };
    match registry.copy(&original) {
        Err(CopyError::TransformerTypeMismatch {
            tag,
            expected,
            registered,
        }) => {
            assert_eq!(tag, "AnonymiseName");
            assert!(expected.ends_with("String"), "{expected}");
            assert_eq!(registered, "u64");
        }
        other => panic!("expected a type mismatch, got {other:?}"),
    }
}

#[test]
fn test_transformer_runs_exactly_once_per_field() {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let registry = Registry::new()
        .with("AnonymiseName", move |n: &String| {
            counter.fetch_add(1, Ordering::SeqCst);
            n.clone()
        })
        .with("AnonymiseData", anonymise_data);

    let original = T {
        name: "once".into(),
        c: 0,
        data: A::default(),
        d: None,
    };
    registry.copy(&original).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_map_of_structs_is_copied_with_tags() {
    let mut original = HashMap::new();
    original.insert(
        "k1".to_string(),
        A {
            data: vec!["a".into(), "b".into()],
        },
    );
    original.insert("k2".to_string(), A { data: vec![] });

    let copy = registry().copy(&original).unwrap();
    assert_eq!(copy.len(), 2);
    assert_eq!(copy["k1"].data, vec!["a"]);
    assert!(copy["k2"].data.is_empty());
    assert_eq!(original["k1"].data.len(), 2);
}

#[test]
fn test_skipped_fields_are_reset() {
    #[derive(Debug)]
    struct Session {
        user: String,
        token: String,
        retries: u8,
    }

    deep_copy_struct!(Session {
        user,
        #[skip]
        token,
        retries,
    });

    let copy = Registry::new()
        .copy(&Session {
            user: "ada".into(),
            token: "s3cr3t".into(),
            retries: 2,
        })
        .unwrap();
    assert_eq!(copy.user, "ada");
    assert_eq!(copy.token, "");
    assert_eq!(copy.retries, 2);
}
