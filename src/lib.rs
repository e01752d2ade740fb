//! # serde_human
//!
//! A human-readable, YAML-like text encoder for logs, CLI output and
//! debugging.
//!
//! ## What does it produce?
//!
//! Given any value, the encoder walks its structure and renders every struct
//! field as `name: value` on its own line. Nested structs, lists and maps are
//! indented below their label; list elements and map entries get a bullet:
//!
//! ```text
//! Var1: v1
//! variable_2: 2
//! Child:
//!   Name: theChild
//!   Tags:
//!     * a
//!     * b
//! ```
//!
//! ## Key Features
//!
//! - **Field annotations**: rename a field, skip it with `-` or omit it when
//!   empty with `,omitempty`
//! - **Embedded fields**: flattened into their parent without a label
//! - **Deterministic maps**: entries sorted by the text of their keys
//! - **Custom text**: types may render themselves as one line of text
//! - **Error aggregation**: every failing field is reported, keyed by its path
//! - **Atomic output**: nothing reaches the writer unless the whole value encoded
//! - **Serde Compatible**: any `#[derive(Serialize)]` type can be encoded
//!
//! ## Quick Start
//!
//! Describe a type's structure by implementing [`Human`]:
//!
//! ```rust
//! use serde_human::{to_string, Field, Human, Struct, Value};
//!
//! struct SimpleChild {
//!     name: String,
//!     property1: u64,
//!     property2: f64,
//! }
//!
//! impl Human for SimpleChild {
//!     fn describe(&self) -> Value {
//!         Struct::new()
//!             .with(Field::new("Name", &self.name))
//!             .with(Field::new("Property1", &self.property1).tag("human", "-"))
//!             .with(Field::new("Property2", &self.property2).tag("human", ",omitempty"))
//!             .into()
//!     }
//! }
//!
//! struct SimpleTest {
//!     var1: String,
//!     var2: i32,
//!     child: SimpleChild,
//! }
//!
//! impl Human for SimpleTest {
//!     fn describe(&self) -> Value {
//!         Struct::new()
//!             .with(Field::new("Var1", &self.var1))
//!             .with(Field::new("Var2", &self.var2).tag("human", "variable_2"))
//!             .with(Field::new("Child", &self.child))
//!             .into()
//!     }
//! }
//!
//! let test = SimpleTest {
//!     var1: "v1".to_string(),
//!     var2: 2,
//!     child: SimpleChild { name: "theChild".to_string(), property1: 3, property2: 0.0 },
//! };
//!
//! assert_eq!(
//!     to_string(&test).unwrap(),
//!     "Var1: v1\nvariable_2: 2\nChild:\n  Name: theChild\n"
//! );
//! ```
//!
//! ### Serde Types
//!
//! ```rust
//! use serde::Serialize;
//! use serde_human::to_value;
//!
//! #[derive(Serialize)]
//! struct User {
//!     id: u32,
//!     roles: Vec<String>,
//! }
//!
//! let user = User { id: 1, roles: vec!["admin".into()] };
//! let text = serde_human::to_string(&to_value(&user).unwrap()).unwrap();
//! assert_eq!(text, "id: 1\nroles:\n  * admin\n");
//! ```
//!
//! ### Dynamic Values with human! Macro
//!
//! ```rust
//! use serde_human::{human, to_string};
//!
//! let value = human!({ "test0": "0", "test1": 1, "test2": 2.9 });
//! assert_eq!(to_string(&value).unwrap(), "\n* test0: 0\n* test1: 1\n* test2: 2.9\n");
//! ```
//!
//! ## Logging
//!
//! The encoder emits `tracing` events: `debug` for each encode and commit,
//! `trace` for every skipped field. No subscriber is installed by the crate.
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Struct fields, annotations and nesting
//! - **`collections.rs`** - Lists, maps and embedded fields
//! - **`custom_options.rs`** - Tag name, list symbols and indentation
//! - **`serde_types.rs`** - Encoding `#[derive(Serialize)]` types
//!
//! Run any example with: `cargo run --example <name>`

pub mod encoder;
pub mod error;
pub mod field;
pub mod human;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod sink;
pub mod tag;
pub mod value;

pub use encoder::Encoder;
pub use error::{Error, ErrorList, ErrorTree, MarshalError, Result};
pub use field::{Field, Struct};
pub use human::{classify, Human};
pub use map::Map;
pub use options::{HumanOptions, DEFAULT_INDENT, DEFAULT_LIST_SYMBOL, DEFAULT_TAG_NAME};
pub use ser::{to_value, ValueSerializer};
pub use sink::FlushableBuffer;
pub use value::{Number, Shape, Value};

use std::io;

/// Encode any `T: Human` to a string.
///
/// # Examples
///
/// ```rust
/// use serde_human::to_string;
/// use std::collections::BTreeMap;
///
/// let mut scores = BTreeMap::new();
/// scores.insert("bob", 2);
/// scores.insert("alice", 1);
/// assert_eq!(to_string(&scores).unwrap(), "\n* alice: 1\n* bob: 2\n");
/// ```
///
/// # Errors
///
/// Returns the aggregated field errors if any part of the value fails to
/// encode.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Human,
{
    to_string_with_options(value, HumanOptions::default())
}

/// Encode any `T: Human` to a string with custom options.
///
/// # Examples
///
/// ```rust
/// use serde_human::{to_string_with_options, HumanOptions};
///
/// let options = HumanOptions::new().with_list_symbols(["-"]).with_indent(4);
/// let text = to_string_with_options(&[[1, 2]], options).unwrap();
/// assert_eq!(text, "\n-\n    - 1\n    - 2\n");
/// ```
///
/// # Errors
///
/// Returns [`Error::Config`] if the options are invalid, or the aggregated
/// field errors if any part of the value fails to encode.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: HumanOptions) -> Result<String>
where
    T: ?Sized + Human,
{
    let mut encoder = Encoder::with_options(Vec::with_capacity(256), options)?;
    encoder.encode(value)?;
    String::from_utf8(encoder.into_inner()).map_err(|e| Error::custom(e.to_string()))
}

/// Encode any `T: Human` to a writer.
///
/// # Examples
///
/// ```rust
/// use serde_human::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &vec!["a", "b"]).unwrap();
/// assert_eq!(buffer, b"\n* a\n* b\n");
/// ```
///
/// # Errors
///
/// Returns an error if encoding fails or writing to the writer fails. The
/// writer receives nothing on error.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Human,
{
    to_writer_with_options(writer, value, HumanOptions::default())
}

/// Encode any `T: Human` to a writer with custom options.
///
/// # Errors
///
/// Returns an error if the options are invalid, encoding fails or writing to
/// the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(writer: W, value: &T, options: HumanOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Human,
{
    let mut encoder = Encoder::with_options(writer, options)?;
    encoder.encode(value)
}
