//! Structural introspection.
//!
//! The [`Human`] trait is how a host type tells the encoder what it looks
//! like. A type either renders itself as one line of text, or describes its
//! structure as a [`Value`]:
//!
//! 1. [`Human::marshal_text`]: fallible custom text, checked first
//! 2. [`Human::to_text`]: infallible custom text, checked second
//! 3. [`Human::describe`]: the structural view, used when neither applies
//!
//! [`classify`] applies that precedence. Implementations are provided for
//! primitives, strings, options, smart pointers, std collections,
//! [`IndexMap`], IP addresses, `chrono` dates and `num_bigint::BigInt`.
//!
//! ## Implementing `Human`
//!
//! ```rust
//! use serde_human::{to_string, Field, Human, Struct, Value};
//!
//! struct Child {
//!     name: String,
//!     property1: u64,
//!     property2: f64,
//! }
//!
//! impl Human for Child {
//!     fn describe(&self) -> Value {
//!         Struct::new()
//!             .with(Field::new("Name", &self.name))
//!             .with(Field::new("Property1", &self.property1).tag("human", "-"))
//!             .with(Field::new("Property2", &self.property2).tag("human", ",omitempty"))
//!             .into()
//!     }
//! }
//!
//! let child = Child { name: "theChild".into(), property1: 3, property2: 0.0 };
//! assert_eq!(to_string(&child).unwrap(), "Name: theChild\n");
//! ```
//!
//! ## Custom Text
//!
//! ```rust
//! use serde_human::{classify, Human, MarshalError, Value};
//!
//! struct Celsius(f64);
//!
//! impl Human for Celsius {
//!     fn marshal_text(&self) -> Option<Result<String, MarshalError>> {
//!         if self.0 < -273.15 {
//!             return Some(Err(MarshalError::new("below absolute zero")));
//!         }
//!         Some(Ok(format!("{}°C", self.0)))
//!     }
//!
//!     fn describe(&self) -> Value {
//!         Value::from(self.0)
//!     }
//! }
//!
//! assert_eq!(classify(&Celsius(21.5)), Value::Text(Ok("21.5°C".to_string())));
//! assert!(matches!(classify(&Celsius(-300.0)), Value::Text(Err(_))));
//! ```

use crate::{Map, MarshalError, Struct, Value};
use chrono::{DateTime, NaiveDate, TimeZone};
use indexmap::IndexMap;
use num_bigint::BigInt;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;
use std::hash::BuildHasher;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::rc::Rc;
use std::sync::Arc;

/// A value the encoder can introspect.
pub trait Human {
    /// Renders the value as one line of text, possibly failing.
    ///
    /// Takes precedence over [`Human::to_text`] and [`Human::describe`].
    fn marshal_text(&self) -> Option<Result<String, MarshalError>> {
        None
    }

    /// Renders the value as one line of text.
    ///
    /// Takes precedence over [`Human::describe`].
    fn to_text(&self) -> Option<String> {
        None
    }

    /// Describes the structure of the value.
    fn describe(&self) -> Value;
}

/// Introspects a value, applying custom-text precedence.
///
/// # Examples
///
/// ```rust
/// use serde_human::{classify, Value};
/// use std::net::Ipv4Addr;
///
/// assert_eq!(classify(&Some(5)), Value::from(5));
/// assert_eq!(classify(&None::<i32>), Value::Null);
/// assert_eq!(
///     classify(&Ipv4Addr::LOCALHOST),
///     Value::Text(Ok("127.0.0.1".to_string()))
/// );
/// ```
pub fn classify<T: Human + ?Sized>(value: &T) -> Value {
    if let Some(result) = value.marshal_text() {
        return Value::Text(result);
    }
    if let Some(text) = value.to_text() {
        return Value::Text(Ok(text));
    }
    value.describe()
}

macro_rules! human_scalar {
    ($($ty:ty),*) => {
        $(
            impl Human for $ty {
                fn describe(&self) -> Value {
                    Value::from(*self)
                }
            }
        )*
    };
}

human_scalar!(bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl Human for str {
    fn describe(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl Human for String {
    fn describe(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Human for Value {
    fn describe(&self) -> Value {
        self.clone()
    }
}

impl Human for Struct {
    fn describe(&self) -> Value {
        Value::Struct(self.clone())
    }
}

impl Human for Map {
    fn describe(&self) -> Value {
        Value::Map(self.clone())
    }
}

impl<T: Human> Human for Option<T> {
    fn describe(&self) -> Value {
        match self {
            Some(value) => classify(value),
            None => Value::Null,
        }
    }
}

macro_rules! human_deref {
    ($($ptr:ty),*) => {
        $(
            impl<T: Human + ?Sized> Human for $ptr {
                fn marshal_text(&self) -> Option<Result<String, MarshalError>> {
                    (**self).marshal_text()
                }

                fn to_text(&self) -> Option<String> {
                    (**self).to_text()
                }

                fn describe(&self) -> Value {
                    (**self).describe()
                }
            }
        )*
    };
}

human_deref!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

fn sequence<'a, T, I>(items: I) -> Value
where
    T: Human + 'a,
    I: IntoIterator<Item = &'a T>,
{
    Value::Seq(items.into_iter().map(classify).collect())
}

fn associative<'a, K, V, I>(entries: I) -> Value
where
    K: Human + 'a,
    V: Human + 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    Value::Map(Map::from_entries(
        entries
            .into_iter()
            .map(|(k, v)| (classify(k), classify(v)))
            .collect(),
    ))
}

impl<T: Human> Human for [T] {
    fn describe(&self) -> Value {
        sequence(self)
    }
}

impl<T: Human, const N: usize> Human for [T; N] {
    fn describe(&self) -> Value {
        sequence(self)
    }
}

impl<T: Human> Human for Vec<T> {
    fn describe(&self) -> Value {
        sequence(self)
    }
}

impl<T: Human> Human for VecDeque<T> {
    fn describe(&self) -> Value {
        sequence(self)
    }
}

impl<K: Human, V: Human, S: BuildHasher> Human for HashMap<K, V, S> {
    fn describe(&self) -> Value {
        associative(self)
    }
}

impl<K: Human, V: Human> Human for BTreeMap<K, V> {
    fn describe(&self) -> Value {
        associative(self)
    }
}

impl<K: Human, V: Human, S: BuildHasher> Human for IndexMap<K, V, S> {
    fn describe(&self) -> Value {
        associative(self)
    }
}

macro_rules! human_marshal_display {
    ($($ty:ty),*) => {
        $(
            impl Human for $ty {
                fn marshal_text(&self) -> Option<Result<String, MarshalError>> {
                    Some(Ok(self.to_string()))
                }

                fn describe(&self) -> Value {
                    Value::String(self.to_string())
                }
            }
        )*
    };
}

human_marshal_display!(IpAddr, Ipv4Addr, Ipv6Addr);

/// Timestamps marshal to RFC 3339.
impl<Tz> Human for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    fn marshal_text(&self) -> Option<Result<String, MarshalError>> {
        Some(Ok(self.to_rfc3339()))
    }

    fn describe(&self) -> Value {
        Value::String(self.to_rfc3339())
    }
}

impl Human for NaiveDate {
    fn to_text(&self) -> Option<String> {
        Some(self.to_string())
    }

    fn describe(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl Human for BigInt {
    fn to_text(&self) -> Option<String> {
        Some(self.to_string())
    }

    fn describe(&self) -> Value {
        Value::String(self.to_string())
    }
}
