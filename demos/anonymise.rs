//! # Anonymised snapshot
//!
//! Copies a small customer database while replacing names and e-mail
//! addresses, then shows that the original is untouched.
//!
//! ```bash
//! RUST_LOG=ccopy=debug cargo run --example anonymise
//! ```

use std::collections::BTreeMap;

use ccopy::{deep_copy_struct, CopyError, Registry};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Debug)]
struct Customer {
    name: String,
    email: Option<String>,
    orders: Vec<u32>,
    password_hash: String,
}

#[derive(Debug)]
struct Database {
    customers: BTreeMap<u32, Customer>,
}

deep_copy_struct!(Customer {
    #[copy("anonymise_name")]
    name,
    #[copy("anonymise_email")]
    email,
    orders,
    #[skip]
    password_hash,
});

deep_copy_struct!(Database { customers });

/// Reads `RUST_LOG`; defaults to `warn`. Output goes to stderr.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn main() -> Result<(), CopyError> {
    init_tracing();

    let registry = Registry::new()
        .with("anonymise_name", |_: &String| "john doe".to_string())
        .with("anonymise_email", |email: &Option<String>| {
            email.as_ref().map(|e| match e.split_once('@') {
                Some((_, domain)) => format!("***@{domain}"),
                None => "***".to_string(),
            })
        })
        .validated_for::<Database>()?;

    let mut customers = BTreeMap::new();
    customers.insert(
        1,
        Customer {
            name: "Ada Lovelace".into(),
            email: Some("ada@example.com".into()),
            orders: vec![10, 11],
            password_hash: "$argon2id$...".into(),
        },
    );
    customers.insert(
        2,
        Customer {
            name: "Charles Babbage".into(),
            email: None,
            orders: vec![],
            password_hash: "$argon2id$...".into(),
        },
    );
    let original = Database { customers };

    let snapshot = registry.copy(&original)?;

    println!("original: {original:#?}");
    println!("snapshot: {snapshot:#?}");
    Ok(())
}
