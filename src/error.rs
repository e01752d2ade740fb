//! Error types for human encoding.
//!
//! Encoding never aborts on the first problem inside a struct. Instead, errors
//! are collected into one of two containers:
//!
//! - [`ErrorList`]: an order-preserving list, used when an encoder is built
//!   from invalid [`HumanOptions`](crate::HumanOptions)
//! - [`ErrorTree`]: a tree keyed by field name, used for per-field failures so
//!   that `Child.Address` and `Child.Name` stay distinguishable
//!
//! ## Examples
//!
//! ```rust
//! use serde_human::{Encoder, Error, HumanOptions};
//!
//! let options = HumanOptions::new()
//!     .with_tag_name("")
//!     .with_list_symbols(Vec::<String>::new());
//!
//! match Encoder::with_options(Vec::<u8>::new(), options) {
//!     Err(Error::Config(errors)) => assert_eq!(errors.len(), 2),
//!     _ => panic!("expected a configuration error"),
//! }
//! ```

use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Failure reported by a value's own text marshaling.
///
/// Returned from [`Human::marshal_text`](crate::Human::marshal_text) when a
/// value cannot produce its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct MarshalError(String);

impl MarshalError {
    /// Creates a marshal error from any displayable message.
    pub fn new<T: fmt::Display>(msg: T) -> Self {
        MarshalError(msg.to_string())
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.0
    }
}

/// Represents all possible errors that can occur while building an encoder or encoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The configured tag name is empty
    #[error("invalid tag name")]
    InvalidTagName,

    /// No list symbols were configured
    #[error("no list symbols provided")]
    ListSymbolsEmpty,

    /// A field annotation could not be parsed
    #[error("Invalid tag: '{tag}'")]
    InvalidTag { tag: String },

    /// A value failed to marshal itself to text
    #[error("marshal text: {0}")]
    Marshal(#[from] MarshalError),

    /// IO error while committing output to the destination
    #[error("IO error: {0}")]
    Io(String),

    /// One or more configuration problems
    #[error("{0}")]
    Config(ErrorList),

    /// Several errors recorded against the same field
    #[error("{0}")]
    Multiple(ErrorList),

    /// Per-field failures keyed by field name
    #[error("{0}")]
    Fields(ErrorTree),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid tag error carrying the raw annotation string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_human::Error;
    ///
    /// let err = Error::invalid_tag("testing error");
    /// assert_eq!(err.to_string(), "Invalid tag: 'testing error'");
    /// ```
    pub fn invalid_tag(tag: &str) -> Self {
        Error::InvalidTag {
            tag: tag.to_string(),
        }
    }

    /// Creates an I/O error for destination write failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `true` if this is an [`Error::InvalidTag`].
    #[must_use]
    pub fn is_invalid_tag(&self) -> bool {
        matches!(self, Error::InvalidTag { .. })
    }

    /// Returns the offending raw tag if this is an [`Error::InvalidTag`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_human::Error;
    ///
    /// let err = Error::invalid_tag("&");
    /// assert_eq!(err.as_invalid_tag(), Some("&"));
    /// assert_eq!(Error::ListSymbolsEmpty.as_invalid_tag(), None);
    /// ```
    #[must_use]
    pub fn as_invalid_tag(&self) -> Option<&str> {
        match self {
            Error::InvalidTag { tag } => Some(tag),
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// An order-preserving list of errors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrorList(Vec<Error>);

impl ErrorList {
    #[must_use]
    pub fn new() -> Self {
        ErrorList(Vec::new())
    }

    pub fn push(&mut self, error: Error) {
        self.0.push(error);
    }

    /// Appends every error of `other`, keeping its order.
    pub fn extend(&mut self, other: ErrorList) {
        self.0.extend(other.0);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.0.iter()
    }

    /// Returns `Ok(())` when empty, otherwise wraps the list with `wrap`.
    pub fn into_result(self, wrap: fn(ErrorList) -> Error) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(wrap(self))
        }
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self.0.iter().map(|e| format!("* {}", e)).collect();
        write_multi(f, &lines)
    }
}

impl IntoIterator for ErrorList {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// A tree of errors keyed by field name.
///
/// A nested struct that fails contributes an [`Error::Fields`] subtree under
/// its own field name, so [`ErrorTree::flatten`] yields dotted paths such as
/// `Child.Address`.
///
/// # Examples
///
/// ```rust
/// use serde_human::{Error, ErrorTree};
///
/// let mut child = ErrorTree::new();
/// child.insert("Address", Error::invalid_tag("a b"));
///
/// let mut root = ErrorTree::new();
/// root.insert("Child", Error::Fields(child));
///
/// assert!(root.get("Child.Address").is_some());
/// assert!(root.get("Child.Name").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrorTree(BTreeMap<String, Error>);

impl ErrorTree {
    #[must_use]
    pub fn new() -> Self {
        ErrorTree(BTreeMap::new())
    }

    /// Records `error` under `key`.
    ///
    /// A second error for an existing key is combined with the first into an
    /// [`Error::Multiple`].
    pub fn insert(&mut self, key: &str, error: Error) {
        match self.0.remove(key) {
            None => {
                self.0.insert(key.to_string(), error);
            }
            Some(Error::Multiple(mut list)) => {
                list.push(error);
                self.0.insert(key.to_string(), Error::Multiple(list));
            }
            Some(existing) => {
                let mut list = ErrorList::new();
                list.push(existing);
                list.push(error);
                self.0.insert(key.to_string(), Error::Multiple(list));
            }
        }
    }

    /// Moves every entry of `other` into this tree.
    pub fn merge(&mut self, other: ErrorTree) {
        for (key, error) in other.0 {
            self.insert(&key, error);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up an error by dotted path, descending into nested trees.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Error> {
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };
        let error = self.0.get(head)?;
        match (rest, error) {
            (None, _) => Some(error),
            (Some(rest), Error::Fields(subtree)) => subtree.get(rest),
            (Some(_), _) => None,
        }
    }

    /// Returns every leaf error with its dotted path, sorted by path.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, &Error)> {
        let mut out = Vec::new();
        self.flatten_into("", &mut out);
        out
    }

    fn flatten_into<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a Error)>) {
        for (key, error) in &self.0 {
            let path = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{}.{}", prefix, key)
            };
            match error {
                Error::Fields(subtree) => subtree.flatten_into(&path, out),
                _ => out.push((path, error)),
            }
        }
    }

    /// Returns `Ok(())` when empty, otherwise [`Error::Fields`].
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(Error::Fields(self))
        }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<String> = self
            .flatten()
            .into_iter()
            .map(|(path, e)| format!("* {}: {}", path, e))
            .collect();
        write_multi(f, &lines)
    }
}

fn write_multi(f: &mut fmt::Formatter<'_>, lines: &[String]) -> fmt::Result {
    if lines.len() == 1 {
        write!(f, "1 error occurred:\n\t{}\n\n", lines[0])
    } else {
        write!(
            f,
            "{} errors occurred:\n\t{}\n\n",
            lines.len(),
            lines.join("\n\t")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_tag_display() {
        let err = Error::invalid_tag("testing error");
        assert_eq!(err.to_string(), "Invalid tag: 'testing error'");
        assert!(err.is_invalid_tag());
        assert_eq!(err.as_invalid_tag(), Some("testing error"));
    }

    #[test]
    fn test_error_list_display() {
        let mut list = ErrorList::new();
        list.push(Error::ListSymbolsEmpty);
        assert_eq!(
            list.to_string(),
            "1 error occurred:\n\t* no list symbols provided\n\n"
        );

        list.push(Error::InvalidTagName);
        assert_eq!(
            list.to_string(),
            "2 errors occurred:\n\t* no list symbols provided\n\t* invalid tag name\n\n"
        );
    }

    #[test]
    fn test_error_list_into_result() {
        assert!(ErrorList::new().into_result(Error::Config).is_ok());

        let mut list = ErrorList::new();
        list.push(Error::InvalidTagName);
        assert!(matches!(
            list.into_result(Error::Config),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_error_tree_nested_paths() {
        let mut child = ErrorTree::new();
        child.insert("Name", Error::invalid_tag("&"));
        child.insert("Address", Error::Marshal(MarshalError::new("bad address")));

        let mut root = ErrorTree::new();
        root.insert("Child", Error::Fields(child));
        root.insert("Other", Error::invalid_tag("a b"));

        let paths: Vec<String> = root.flatten().into_iter().map(|(p, _)| p).collect();
        assert_eq!(paths, vec!["Child.Address", "Child.Name", "Other"]);

        assert!(matches!(root.get("Child.Name"), Some(Error::InvalidTag { .. })));
        assert!(matches!(root.get("Child.Address"), Some(Error::Marshal(_))));
        assert!(root.get("Other.Name").is_none());
        assert!(root.get("Missing").is_none());
    }

    #[test]
    fn test_error_tree_display() {
        let mut tree = ErrorTree::new();
        tree.insert("Test", Error::invalid_tag("&"));
        assert_eq!(
            tree.to_string(),
            "1 error occurred:\n\t* Test: Invalid tag: '&'\n\n"
        );
    }

    #[test]
    fn test_error_tree_collision_and_merge() {
        let mut tree = ErrorTree::new();
        tree.insert("Field", Error::invalid_tag("&"));
        tree.insert("Field", Error::custom("second"));

        match tree.get("Field") {
            Some(Error::Multiple(list)) => assert_eq!(list.len(), 2),
            other => panic!("expected combined errors, got {:?}", other),
        }

        let mut other = ErrorTree::new();
        other.insert("Another", Error::ListSymbolsEmpty);
        tree.merge(other);
        assert_eq!(tree.len(), 2);
        assert!(tree.into_result().is_err());
        assert!(ErrorTree::new().into_result().is_ok());
    }
}
