//! Dynamic value representation for human encoding.
//!
//! This module provides the [`Value`] enum, the structural view the
//! [`Encoder`](crate::Encoder) walks. Host values become a `Value` either
//! through the [`Human`](crate::Human) trait or through serde via
//! [`to_value`](crate::to_value).
//!
//! ## Core Types
//!
//! - [`Value`]: null, bool, number, string, custom text, struct, sequence or map
//! - [`Number`]: signed, unsigned or floating point numbers (32 or 64 bit)
//! - [`Shape`]: the classification the encoder dispatches on
//!
//! ## Classification
//!
//! ```rust
//! use serde_human::{Shape, Value};
//!
//! assert!(matches!(Value::from(42).shape(), Shape::Scalar(_)));
//! assert!(matches!(Value::Seq(vec![]).shape(), Shape::Sequence(_)));
//! assert!(matches!(Value::Null.shape(), Shape::Absent));
//! ```
//!
//! ## Zero Values
//!
//! Fields annotated with `omitempty` are skipped when their value is zero:
//!
//! ```rust
//! use serde_human::Value;
//!
//! assert!(Value::from("").is_zero());
//! assert!(Value::from(0.0).is_zero());
//! assert!(!Value::from("x").is_zero());
//! ```

use crate::{Map, MarshalError, Struct};
use std::fmt;

/// A dynamically-typed view of any value the encoder can render.
///
/// # Examples
///
/// ```rust
/// use serde_human::{Number, Value};
///
/// let null = Value::Null;
/// let num = Value::Number(Number::Int(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(null.is_null());
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// An absent optional value
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// A value that rendered itself to a single line of text
    Text(Result<String, MarshalError>),
    Struct(Struct),
    Seq(Vec<Value>),
    Map(Map),
}

/// A numeric value.
///
/// # Examples
///
/// ```rust
/// use serde_human::Number;
///
/// assert_eq!(Number::Int(-3).to_string(), "-3");
/// assert_eq!(Number::UInt(u64::MAX).to_string(), "18446744073709551615");
/// assert_eq!(Number::Float(2.9).to_string(), "2.9");
/// assert!(Number::Float(0.0).is_zero());
/// assert_eq!(Number::Float32(0.1).to_string(), "0.1");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Int(i64),
    UInt(u64),
    /// A single-precision float, kept at its own width so it prints in its
    /// shortest `f32` form
    Float32(f32),
    Float(f64),
}

impl Number {
    /// Returns `true` if this is the zero value of its kind.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Number::Int(i) => *i == 0,
            Number::UInt(u) => *u == 0,
            Number::Float32(f) => *f == 0.0,
            Number::Float(f) => *f == 0.0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float32(_) | Number::Float(_))
    }

    /// Converts this number to an `i64` if it fits without loss.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Int(i) => Some(*i),
            Number::UInt(u) => i64::try_from(*u).ok(),
            Number::Float32(f) => Number::Float(f64::from(*f)).as_i64(),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(i) => *i as f64,
            Number::UInt(u) => *u as f64,
            Number::Float32(f) => f64::from(*f),
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::UInt(u) => write!(f, "{}", u),
            Number::Float32(fl) if !fl.is_finite() => {
                write!(f, "{}", Number::Float(f64::from(*fl)))
            }
            Number::Float32(fl) => write!(f, "{}", fl),
            Number::Float(fl) if fl.is_nan() => write!(f, "NaN"),
            Number::Float(fl) if fl.is_infinite() && *fl > 0.0 => write!(f, "+Inf"),
            Number::Float(fl) if fl.is_infinite() => write!(f, "-Inf"),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

macro_rules! number_from {
    ($variant:ident as $target:ty: $($source:ty),*) => {
        $(
            impl From<$source> for Number {
                fn from(value: $source) -> Self {
                    Number::$variant(value as $target)
                }
            }

            impl From<$source> for Value {
                fn from(value: $source) -> Self {
                    Value::Number(Number::from(value))
                }
            }
        )*
    };
}

number_from!(Int as i64: i8, i16, i32, i64, isize);
number_from!(UInt as u64: u8, u16, u32, u64, usize);
number_from!(Float32 as f32: f32);
number_from!(Float as f64: f64);

/// How the encoder renders a value.
///
/// Produced by [`Value::shape`]; each variant borrows the part of the value
/// the encoder needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape<'a> {
    /// Null: produces no output at all
    Absent,
    /// Custom text, or the failure to produce it
    Text(&'a Result<String, MarshalError>),
    Struct(&'a Struct),
    Sequence(&'a [Value]),
    Associative(&'a Map),
    /// Anything else, rendered through its default text form
    Scalar(&'a Value),
}

impl Value {
    /// Classifies this value for encoding.
    #[must_use]
    pub fn shape(&self) -> Shape<'_> {
        match self {
            Value::Null => Shape::Absent,
            Value::Text(text) => Shape::Text(text),
            Value::Struct(s) => Shape::Struct(s),
            Value::Seq(items) => Shape::Sequence(items),
            Value::Map(map) => Shape::Associative(map),
            Value::Bool(_) | Value::Number(_) | Value::String(_) => Shape::Scalar(self),
        }
    }

    /// Unwraps an optional value: `None` for null, the value itself otherwise.
    ///
    /// Every code path that looks at a value's kind goes through this first.
    #[inline]
    #[must_use]
    pub fn unwrap_nullable(&self) -> Option<&Value> {
        match self {
            Value::Null => None,
            other => Some(other),
        }
    }

    /// Returns `true` if the value is null or equal to the zero value of its kind.
    ///
    /// A struct is zero when every field (exported or not) is zero; empty
    /// sequences and maps are zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_human::{Field, Struct, Value};
    ///
    /// let empty = Value::from(Struct::new().with(Field::new("Name", "")));
    /// assert!(empty.is_zero());
    ///
    /// let filled = Value::from(Struct::new().with(Field::new("Name", "x")));
    /// assert!(!filled.is_zero());
    /// ```
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Number(n) => n.is_zero(),
            Value::String(s) => s.is_empty(),
            Value::Text(Ok(text)) => text.is_empty(),
            Value::Text(Err(_)) => false,
            Value::Struct(s) => s.fields().iter().all(|f| f.value().is_zero()),
            Value::Seq(items) => items.is_empty(),
            Value::Map(map) => map.is_empty(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_struct(&self) -> bool {
        matches!(self, Value::Struct(_))
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Text(Ok(s)) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_struct(&self) -> Option<&Struct> {
        match self {
            Value::Struct(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_seq(&self) -> Option<&[Value]> {
        match self {
            Value::Seq(items) => Some(items),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }
}

/// The default text form: what a scalar renders as and what map keys sort by.
///
/// Composite values use a compact single-line form: structs as
/// `{v1 v2}`, sequences as `[v1 v2]` and maps as `map[k1:v1 k2:v2]` with
/// sorted keys.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "<nil>"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::Text(Ok(text)) => f.write_str(text),
            Value::Text(Err(e)) => write!(f, "<error: {}>", e),
            Value::Struct(s) => {
                let parts: Vec<String> = s
                    .fields()
                    .iter()
                    .map(|field| field.value().to_string())
                    .collect();
                write!(f, "{{{}}}", parts.join(" "))
            }
            Value::Seq(items) => {
                let parts: Vec<String> = items.iter().map(|v| v.to_string()).collect();
                write!(f, "[{}]", parts.join(" "))
            }
            Value::Map(map) => {
                let parts: Vec<String> = map
                    .sorted_entries()
                    .into_iter()
                    .map(|(k, v)| format!("{}:{}", k, v))
                    .collect();
                write!(f, "map[{}]", parts.join(" "))
            }
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::String(value.to_string())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Value::Number(value)
    }
}

impl From<Struct> for Value {
    fn from(value: Struct) -> Self {
        Value::Struct(value)
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Map(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Seq(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
