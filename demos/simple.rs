//! Struct fields, annotations and nesting.
//!
//! Run with: cargo run --example simple
//!
//! Set `RUST_LOG=serde_human=trace` to see which fields are skipped.

use serde_human::{to_string, Field, Human, Struct, Value};
use std::error::Error;
use tracing_subscriber::EnvFilter;

struct Child {
    name: String,
    internal_id: u64,
    score: f64,
}

impl Human for Child {
    fn describe(&self) -> Value {
        Struct::new()
            .with(Field::new("Name", &self.name))
            .with(Field::new("InternalId", &self.internal_id).tag("human", "-"))
            .with(Field::new("Score", &self.score).tag("human", ",omitempty"))
            .into()
    }
}

struct Parent {
    title: String,
    count: i32,
    child: Child,
}

impl Human for Parent {
    fn describe(&self) -> Value {
        Struct::new()
            .with(Field::new("Title", &self.title))
            .with(Field::new("Count", &self.count).tag("human", "item_count"))
            .with(Field::new("Child", &self.child))
            .into()
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let parent = Parent {
        title: "report".to_string(),
        count: 2,
        child: Child {
            name: "theChild".to_string(),
            internal_id: 3,
            score: 0.0,
        },
    };
    println!("Empty score omitted:\n{}", to_string(&parent)?);

    let parent = Parent {
        child: Child {
            score: 4.5,
            ..parent.child
        },
        ..parent
    };
    println!("With score:\n{}", to_string(&parent)?);

    Ok(())
}
