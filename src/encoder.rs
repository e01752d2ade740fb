//! The recursive value-to-text encoder.
//!
//! [`Encoder`] walks a [`Value`] tree and renders it as indented, YAML-like
//! text. Output is buffered in a [`FlushableBuffer`] and committed to the
//! destination only when the whole value encoded without error.
//!
//! ## Layout
//!
//! - struct fields render as `name: value`, one per line
//! - nested structs, sequences and maps start on the line after their label
//!   and are indented one level deeper
//! - sequence elements and map entries are prefixed with a list symbol that
//!   cycles with nesting depth
//! - a struct inside a list starts on the bullet's line
//! - map entries are sorted by the text of their keys
//!
//! ```rust
//! use serde_human::{Encoder, Field, Struct};
//!
//! let child = Struct::new()
//!     .with(Field::new("Name", "Person1"))
//!     .with(Field::new("Property2", &4.5));
//! let root = Struct::new()
//!     .with(Field::new("IntSlice", &vec![1, 2]))
//!     .with(Field::new("StructSlice", &vec![child]));
//!
//! let mut encoder = Encoder::new(Vec::new());
//! encoder.encode(&root).unwrap();
//! assert_eq!(
//!     String::from_utf8(encoder.into_inner()).unwrap(),
//!     "IntSlice:\n  * 1\n  * 2\nStructSlice:\n  * Name: Person1\n    Property2: 4.5\n"
//! );
//! ```
//!
//! ## Errors
//!
//! Field-level failures (malformed annotations, failing custom text) do not
//! stop the walk: they are collected in an [`ErrorTree`] keyed by field name
//! and returned together. Any error discards the buffered output.

use crate::tag::tag_for_field;
use crate::{
    classify, to_value, ErrorTree, FlushableBuffer, Human, HumanOptions, Map, Result, Shape,
    Struct, Value,
};
use serde::Serialize;
use std::io;
use tracing::{debug, trace};

/// Where the encoder currently is in the tree.
#[derive(Clone, Copy, Debug)]
struct EncodeContext {
    /// Nesting depth; also selects the list symbol.
    level: usize,
    /// The next struct field starts on a bullet line.
    in_list: bool,
    /// Levels subtracted from `level` when indenting.
    outdent: usize,
}

impl EncodeContext {
    fn root() -> Self {
        EncodeContext {
            level: 0,
            in_list: false,
            outdent: 0,
        }
    }

    /// Context for a non-struct root, whose entries start at column zero.
    fn outdented_root() -> Self {
        EncodeContext {
            outdent: 1,
            ..EncodeContext::root()
        }
    }

    fn nested(self) -> Self {
        EncodeContext {
            level: self.level + 1,
            ..self
        }
    }

    fn with_in_list(self, in_list: bool) -> Self {
        EncodeContext { in_list, ..self }
    }

    fn indent_level(&self) -> usize {
        self.level.saturating_sub(self.outdent)
    }
}

/// Writes the human encoding of values to an output stream.
///
/// # Examples
///
/// ```rust
/// use serde_human::{Encoder, HumanOptions};
///
/// let options = HumanOptions::new().with_list_symbols(["-"]);
/// let mut encoder = Encoder::with_options(Vec::new(), options).unwrap();
/// encoder.encode(&vec!["a", "b"]).unwrap();
/// assert_eq!(encoder.get_ref(), b"\n- a\n- b\n");
/// ```
#[derive(Debug)]
pub struct Encoder<W> {
    sink: FlushableBuffer<W>,
    options: HumanOptions,
}

impl<W: io::Write> Encoder<W> {
    /// Creates an encoder with the default options.
    pub fn new(writer: W) -> Self {
        Encoder {
            sink: FlushableBuffer::new(writer),
            options: HumanOptions::default(),
        }
    }

    /// Creates an encoder with custom options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) listing every invalid
    /// option; no encoder is produced.
    pub fn with_options(writer: W, options: HumanOptions) -> Result<Self> {
        options.validate()?;
        Ok(Encoder {
            sink: FlushableBuffer::new(writer),
            options,
        })
    }

    #[must_use]
    pub fn options(&self) -> &HumanOptions {
        &self.options
    }

    pub fn get_ref(&self) -> &W {
        self.sink.get_ref()
    }

    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }

    /// Encodes a value implementing [`Human`].
    ///
    /// A struct renders as its fields starting at column zero. Any other
    /// value renders the way it would after a field label, so a root
    /// sequence or map starts with a newline.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Fields`](crate::Error::Fields) with every field-level
    /// failure, [`Error::Marshal`](crate::Error::Marshal) if a non-struct
    /// root's custom text fails, or [`Error::Io`](crate::Error::Io) if the
    /// destination rejects the output. Nothing is written on error.
    pub fn encode<T: Human + ?Sized>(&mut self, value: &T) -> Result<()> {
        let value = classify(value);
        self.encode_root(&value)
    }

    /// Encodes a value implementing `Serialize`.
    ///
    /// ```rust
    /// use serde::Serialize;
    /// use serde_human::Encoder;
    ///
    /// #[derive(Serialize)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let mut encoder = Encoder::new(Vec::new());
    /// encoder.encode_serialize(&Point { x: 1, y: 2 }).unwrap();
    /// assert_eq!(encoder.get_ref(), b"x: 1\ny: 2\n");
    /// ```
    ///
    /// # Errors
    ///
    /// As [`Encoder::encode`], plus any error raised by the `Serialize`
    /// implementation.
    pub fn encode_serialize<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let value = to_value(value)?;
        self.encode_root(&value)
    }

    fn encode_root(&mut self, root: &Value) -> Result<()> {
        debug!(
            tag_name = %self.options.tag_name,
            indent = self.options.indent,
            "encoding value"
        );
        let encoded = match root {
            Value::Struct(s) => self.encode_struct(s, EncodeContext::root()),
            other => self.encode_value(other, EncodeContext::outdented_root()),
        };
        let result = encoded.and_then(|()| {
            let written = self.sink.commit()?;
            debug!(bytes = written, "committed encoded value");
            Ok(())
        });
        if result.is_err() {
            debug!(discarded = self.sink.len(), "encoding failed, discarding output");
        }
        self.sink.reset();
        result
    }

    fn encode_value(&mut self, value: &Value, ctx: EncodeContext) -> Result<()> {
        let Some(value) = value.unwrap_nullable() else {
            return Ok(());
        };

        match value.shape() {
            Shape::Absent => {}
            Shape::Text(Ok(text)) => self.write_inline(text),
            Shape::Text(Err(e)) => return Err(e.clone().into()),
            Shape::Struct(s) => {
                if !ctx.in_list {
                    self.sink.write("\n");
                }
                self.encode_struct(s, ctx.nested())?;
            }
            Shape::Sequence(items) => {
                self.sink.write("\n");
                self.encode_sequence(items, ctx.nested())?;
            }
            Shape::Associative(map) => {
                self.sink.write("\n");
                self.encode_associative(map, ctx.nested())?;
            }
            Shape::Scalar(scalar) => self.write_inline(&scalar.to_string()),
        }
        Ok(())
    }

    fn encode_struct(&mut self, s: &Struct, ctx: EncodeContext) -> Result<()> {
        let mut errors = ErrorTree::new();
        let mut ctx = ctx;
        self.encode_fields(s, &mut ctx, &mut errors);
        errors.into_result()
    }

    /// Encodes the fields of `s`, flattening embedded structs into the same
    /// error tree and context.
    fn encode_fields(&mut self, s: &Struct, ctx: &mut EncodeContext, errors: &mut ErrorTree) {
        for field in s.fields() {
            if field.is_embedded() {
                match field.value().unwrap_nullable() {
                    Some(Value::Struct(inner)) => self.encode_fields(inner, ctx, errors),
                    _ => trace!(field = field.name(), "skipping non-struct embedded field"),
                }
                continue;
            }

            if !field.is_exported() {
                trace!(field = field.name(), "skipping private field");
                continue;
            }

            let tag = match tag_for_field(field, &self.options.tag_name) {
                Ok(tag) => tag,
                Err(e) => {
                    errors.insert(field.name(), e);
                    continue;
                }
            };

            let value = field.value();
            if tag.is_skip() {
                trace!(field = field.name(), "skipping ignored field");
                continue;
            }
            if value.is_null() {
                trace!(field = field.name(), "skipping absent field");
                continue;
            }
            if tag.omit_empty && value.is_zero() {
                trace!(field = field.name(), "omitting empty field");
                continue;
            }

            if ctx.in_list {
                self.sink.write(" ");
                ctx.in_list = false;
            } else {
                self.sink.write(&self.options.indentation(ctx.indent_level()));
            }
            self.sink.write(&tag.name);
            self.sink.write(":");

            if let Err(e) = self.encode_value(value, *ctx) {
                errors.insert(&tag.name, e);
            }
        }
    }

    fn encode_sequence(&mut self, items: &[Value], ctx: EncodeContext) -> Result<()> {
        let prefix = self.bullet_prefix(ctx);
        for item in items {
            self.sink.write(&prefix);
            self.encode_value(item, ctx.with_in_list(true))?;
        }
        Ok(())
    }

    fn encode_associative(&mut self, map: &Map, ctx: EncodeContext) -> Result<()> {
        let prefix = self.bullet_prefix(ctx);
        for (key, value) in map.sorted_entries() {
            self.sink.write(&prefix);
            self.sink.write(" ");
            self.sink.write(&key);
            self.sink.write(":");
            self.encode_value(value, ctx.with_in_list(true))?;
        }
        Ok(())
    }

    fn bullet_prefix(&self, ctx: EncodeContext) -> String {
        let mut prefix = self.options.indentation(ctx.indent_level());
        prefix.push_str(self.options.list_symbol(ctx.level));
        prefix
    }

    fn write_inline(&mut self, text: &str) {
        self.sink.write(" ");
        self.sink.write(text);
        self.sink.write("\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Field, MarshalError};

    fn encode<T: Human + ?Sized>(value: &T) -> Result<String> {
        encode_with(value, HumanOptions::default())
    }

    fn encode_with<T: Human + ?Sized>(value: &T, options: HumanOptions) -> Result<String> {
        let mut encoder = Encoder::with_options(Vec::new(), options)?;
        encoder.encode(value)?;
        Ok(String::from_utf8(encoder.into_inner()).unwrap())
    }

    fn child(name: &str, property2: f64) -> Struct {
        Struct::new()
            .with(Field::new("Name", name))
            .with(Field::new("Property1", &0u64).tag("human", "-"))
            .with(Field::new("Property2", &property2).tag("human", ",omitempty"))
    }

    #[test]
    fn test_nested_struct() {
        let root = Struct::new()
            .with(Field::new("Var1", "v1"))
            .with(Field::new("Var2", &2).tag("human", "variable_2"))
            .with(Field::new("Child", &child("theChild", 4.5)));
        assert_eq!(
            encode(&root).unwrap(),
            "Var1: v1\nvariable_2: 2\nChild:\n  Name: theChild\n  Property2: 4.5\n"
        );
    }

    #[test]
    fn test_struct_in_list_starts_on_bullet_line() {
        let root = Struct::new().with(Field::new(
            "Map",
            &vec![("One", child("Person1", 4.5)), ("Two", child("Person2", 0.0))]
                .into_iter()
                .collect::<std::collections::BTreeMap<_, _>>(),
        ));
        assert_eq!(
            encode(&root).unwrap(),
            "Map:\n  * One: Name: Person1\n    Property2: 4.5\n  * Two: Name: Person2\n"
        );
    }

    #[test]
    fn test_list_symbols_cycle_with_depth() {
        let nested = vec![vec![vec![1]]];
        let options = HumanOptions::new().with_list_symbols(["+", "-"]);
        assert_eq!(
            encode_with(&nested, options).unwrap(),
            "\n+\n  -\n    + 1\n"
        );
    }

    #[test]
    fn test_custom_indent() {
        let root = Struct::new().with(Field::new("List", &[1, 2]));
        let options = HumanOptions::new().with_indent(4);
        assert_eq!(
            encode_with(&root, options).unwrap(),
            "List:\n    * 1\n    * 2\n"
        );
    }

    #[test]
    fn test_null_values() {
        let root = Struct::new()
            .with(Field::new("Missing", &None::<i32>))
            .with(Field::new("Items", &vec![Some(1), None]));
        assert_eq!(encode(&root).unwrap(), "Items:\n  * 1\n  *");
        assert_eq!(encode(&None::<i32>).unwrap(), "");
    }

    #[test]
    fn test_embedded_flattening() {
        let inner = Struct::new()
            .with(Field::new("Id", &1))
            .with(Field::new("Kind", "a"));
        let root = Struct::new()
            .with(Field::embedded("Base", &inner))
            .with(Field::embedded("Skipped", &3))
            .with(Field::embedded("Absent", &None::<Struct>))
            .with(Field::new("Text", "t"));
        assert_eq!(encode(&root).unwrap(), "Id: 1\nKind: a\nText: t\n");
    }

    #[test]
    fn test_embedded_in_list_clears_flag_for_parent() {
        let inner = Struct::new().with(Field::new("Id", &1));
        let element = Struct::new()
            .with(Field::embedded("Base", &inner))
            .with(Field::new("Name", "n"));
        let root = Struct::new().with(Field::new("Items", &vec![element]));
        assert_eq!(encode(&root).unwrap(), "Items:\n  * Id: 1\n    Name: n\n");
    }

    #[test]
    fn test_errors_are_keyed_and_atomic() {
        let failing = Value::Text(Err(MarshalError::new("boom")));
        let inner = Struct::new()
            .with(Field::new("Ok", &1))
            .with(Field::new("Bad", &failing));
        let root = Struct::new()
            .with(Field::new("Broken", &1).tag("human", "a b"))
            .with(Field::new("Inner", &inner))
            .with(Field::new("After", &2));

        let mut encoder = Encoder::new(Vec::new());
        let err = encoder.encode(&root).unwrap_err();
        assert!(encoder.get_ref().is_empty());

        let Error::Fields(tree) = err else {
            panic!("expected field errors, got {:?}", err);
        };
        assert!(tree.get("Broken").is_some_and(Error::is_invalid_tag));
        assert!(matches!(tree.get("Inner.Bad"), Some(Error::Marshal(_))));
        assert!(tree.get("Inner.Ok").is_none());
        assert!(tree.get("After").is_none());
    }

    #[test]
    fn test_sequence_fails_fast() {
        let items = vec![
            Value::Text(Err(MarshalError::new("first"))),
            Value::Text(Err(MarshalError::new("second"))),
        ];
        let root = Struct::new().with(Field::new("Items", &items));
        let err = encode(&root).unwrap_err();
        let Error::Fields(tree) = err else {
            panic!("expected field errors");
        };
        assert_eq!(
            tree.get("Items"),
            Some(&Error::Marshal(MarshalError::new("first")))
        );
    }

    #[test]
    fn test_map_fails_fast_in_key_order() {
        let mut lookup = Map::new();
        lookup.insert("b", Value::Text(Err(MarshalError::new("second"))));
        lookup.insert("a", Value::Text(Err(MarshalError::new("first"))));
        let root = Struct::new()
            .with(Field::new("Before", &1))
            .with(Field::new("Lookup", &lookup));

        let mut encoder = Encoder::new(Vec::new());
        let err = encoder.encode(&root).unwrap_err();
        assert!(encoder.get_ref().is_empty());

        let Error::Fields(tree) = err else {
            panic!("expected field errors, got {:?}", err);
        };
        assert_eq!(tree.flatten().len(), 1);
        assert_eq!(
            tree.get("Lookup"),
            Some(&Error::Marshal(MarshalError::new("first")))
        );
    }

    #[test]
    fn test_absent_struct_field_has_no_label() {
        let root = Struct::new()
            .with(Field::new("Child", &None::<Struct>))
            .with(Field::new("Name", "n"));
        assert_eq!(encode(&root).unwrap(), "Name: n\n");

        let only = Struct::new().with(Field::new("Child", &None::<Struct>));
        assert_eq!(encode(&only).unwrap(), "");
    }

    #[test]
    fn test_f32_fields_print_shortest_form() {
        let root = Struct::new()
            .with(Field::new("Ratio", &0.1f32))
            .with(Field::new("Scale", &2.9f32));
        assert_eq!(encode(&root).unwrap(), "Ratio: 0.1\nScale: 2.9\n");
    }

    #[test]
    fn test_encoder_is_reusable_after_failure() {
        let mut encoder = Encoder::new(Vec::new());
        let bad = Struct::new().with(Field::new("X", &1).tag("human", "!"));
        assert!(encoder.encode(&bad).is_err());

        let good = Struct::new().with(Field::new("X", &1));
        encoder.encode(&good).unwrap();
        assert_eq!(encoder.get_ref(), b"X: 1\n");
    }
}
