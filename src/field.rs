//! Struct-like values and their field descriptors.
//!
//! A [`Struct`] is an ordered list of [`Field`]s. Each field carries what the
//! encoder needs to decide how (and whether) to render it:
//!
//! - its identifier
//! - whether it is exported (private fields are never rendered)
//! - whether it is embedded (its fields are flattened into the parent)
//! - annotations keyed by tag name, e.g. `human` -> `variable_2,omitempty`
//! - its current value
//!
//! ## Examples
//!
//! ```rust
//! use serde_human::{to_string, Field, Struct};
//!
//! let base = Struct::new().with(Field::new("Id", &7));
//! let record = Struct::new()
//!     .with(Field::embedded("Base", &base))
//!     .with(Field::new("Var2", &2).tag("human", "variable_2"))
//!     .with(Field::new("hidden", "x").private())
//!     .with(Field::new("Extra", "").tag("human", ",omitempty"));
//!
//! assert_eq!(to_string(&record).unwrap(), "Id: 7\nvariable_2: 2\n");
//! ```

use crate::{classify, Human, Value};
use indexmap::IndexMap;

/// A composite value with a fixed, ordered set of named fields.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Struct {
    fields: Vec<Field>,
}

impl Struct {
    #[must_use]
    pub fn new() -> Self {
        Struct { fields: Vec::new() }
    }

    /// Appends a field, keeping declaration order.
    #[must_use]
    pub fn with(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Fields in declaration order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the first field with the given identifier.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<Field> for Struct {
    fn from_iter<T: IntoIterator<Item = Field>>(iter: T) -> Self {
        Struct {
            fields: iter.into_iter().collect(),
        }
    }
}

/// Describes one field of a [`Struct`].
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    name: String,
    exported: bool,
    embedded: bool,
    annotations: IndexMap<String, String>,
    value: Value,
}

impl Field {
    /// Creates an exported field, introspecting `value` with [`classify`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_human::{Field, Value};
    ///
    /// let field = Field::new("Name", "theChild");
    /// assert_eq!(field.name(), "Name");
    /// assert!(field.is_exported());
    /// assert_eq!(field.value(), &Value::from("theChild"));
    /// ```
    pub fn new<T: Human + ?Sized>(name: impl Into<String>, value: &T) -> Self {
        Field::from_value(name, classify(value))
    }

    /// Creates an exported field that takes ownership of an already built value.
    ///
    /// Unlike [`Field::new`], nothing is cloned or reclassified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_human::{Field, Struct, Value};
    ///
    /// let inner = Struct::new().with(Field::new("Id", &1));
    /// let field = Field::from_value("Inner", Value::from(inner));
    /// assert!(field.value().is_struct());
    /// ```
    pub fn from_value(name: impl Into<String>, value: Value) -> Self {
        Field {
            name: name.into(),
            exported: true,
            embedded: false,
            annotations: IndexMap::new(),
            value,
        }
    }

    /// Creates an embedded field whose own fields are flattened into the parent.
    pub fn embedded<T: Human + ?Sized>(name: impl Into<String>, value: &T) -> Self {
        Field {
            embedded: true,
            ..Field::new(name, value)
        }
    }

    /// Marks the field as private; private fields are never encoded.
    #[must_use]
    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }

    /// Attaches a raw annotation under `key`, replacing any previous one.
    #[must_use]
    pub fn tag(mut self, key: impl Into<String>, raw: impl Into<String>) -> Self {
        self.annotations.insert(key.into(), raw.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn is_exported(&self) -> bool {
        self.exported
    }

    #[must_use]
    pub fn is_embedded(&self) -> bool {
        self.embedded
    }

    /// Returns the raw annotation stored under `key`.
    #[must_use]
    pub fn annotation(&self, key: &str) -> Option<&str> {
        self.annotations.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }
}
