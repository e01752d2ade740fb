//! Configuration options for human encoding.
//!
//! [`HumanOptions`] holds the three tunables consumed by the
//! [`Encoder`](crate::Encoder):
//!
//! - the annotation key read from each [`Field`](crate::Field) (default `"human"`)
//! - the list symbols, cycled by nesting depth (default `["*"]`)
//! - the indent width in spaces per level (default `2`)
//!
//! ## Examples
//!
//! ```rust
//! use serde_human::{to_string_with_options, HumanOptions};
//!
//! let nested = vec![vec![1, 2], vec![3]];
//!
//! let options = HumanOptions::new().with_list_symbols(["+", "-"]);
//! let text = to_string_with_options(&nested, options).unwrap();
//! assert_eq!(text, "\n+\n  - 1\n  - 2\n+\n  - 3\n");
//! ```

use crate::{Error, ErrorList, Result};

/// Default annotation key.
pub const DEFAULT_TAG_NAME: &str = "human";

/// Default list symbol.
pub const DEFAULT_LIST_SYMBOL: &str = "*";

/// Default indentation width.
pub const DEFAULT_INDENT: usize = 2;

/// Configuration options for human encoding.
///
/// Options are plain data until they are handed to
/// [`Encoder::with_options`](crate::Encoder::with_options), which validates
/// them and reports every violation at once.
///
/// # Examples
///
/// ```rust
/// use serde_human::HumanOptions;
///
/// let options = HumanOptions::new()
///     .with_tag_name("test")
///     .with_list_symbols(["+", "-"])
///     .with_indent(4);
///
/// assert_eq!(options.tag_name, "test");
/// assert_eq!(options.list_symbols, vec!["+", "-"]);
/// assert_eq!(options.indent, 4);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HumanOptions {
    pub tag_name: String,
    pub list_symbols: Vec<String>,
    pub indent: usize,
}

impl Default for HumanOptions {
    fn default() -> Self {
        HumanOptions {
            tag_name: DEFAULT_TAG_NAME.to_string(),
            list_symbols: vec![DEFAULT_LIST_SYMBOL.to_string()],
            indent: DEFAULT_INDENT,
        }
    }
}

impl HumanOptions {
    /// Creates default options (`human` tag, `*` bullet, 2-space indent).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_human::HumanOptions;
    ///
    /// let options = HumanOptions::new();
    /// assert_eq!(options.tag_name, "human");
    /// assert_eq!(options.list_symbols, vec!["*"]);
    /// assert_eq!(options.indent, 2);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the annotation key looked up on each field.
    #[must_use]
    pub fn with_tag_name(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = tag_name.into();
        self
    }

    /// Sets the list symbols.
    ///
    /// Nesting depth `d` (starting at 1) uses `list_symbols[(d - 1) % len]`.
    #[must_use]
    pub fn with_list_symbols<I, S>(mut self, list_symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.list_symbols = list_symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the indentation size (number of spaces per level).
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Checks every invariant and aggregates all violations.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] listing [`Error::InvalidTagName`] and/or
    /// [`Error::ListSymbolsEmpty`].
    pub fn validate(&self) -> Result<()> {
        let mut errors = ErrorList::new();
        if self.tag_name.is_empty() {
            errors.push(Error::InvalidTagName);
        }
        if self.list_symbols.is_empty() {
            errors.push(Error::ListSymbolsEmpty);
        }
        errors.into_result(Error::Config)
    }

    /// Returns the list symbol for a nesting depth starting at 1.
    pub(crate) fn list_symbol(&self, depth: usize) -> &str {
        let index = depth.saturating_sub(1) % self.list_symbols.len();
        &self.list_symbols[index]
    }

    pub(crate) fn indentation(&self, level: usize) -> String {
        " ".repeat(self.indent * level)
    }
}
