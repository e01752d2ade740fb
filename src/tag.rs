//! Field annotation parsing.
//!
//! A field annotation has the form `<name>[,omitempty]` or is exactly `-`:
//!
//! | Annotation | Display name | Omit if empty |
//! |------------|--------------|---------------|
//! | *(absent)* | field identifier | no |
//! | `variable_2` | `variable_2` | no |
//! | `,omitempty` | field identifier | yes |
//! | `count,omitempty` | `count` | yes |
//! | `-` | field is never encoded | no |
//!
//! After stripping `,omitempty` the name may only contain letters, ASCII
//! digits and underscores. Numeric characters that are not decimal digits
//! (`²`, `Ⅻ`) are rejected even where Unicode counts them as alphabetic.

use crate::{Error, Field, Result};

const OMIT_EMPTY_SUFFIX: &str = ",omitempty";

/// Name that marks a field as never encoded.
pub const SKIP: &str = "-";

/// The outcome of parsing one field annotation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedTag {
    /// Display name; empty means "use the field identifier", `-` means skip.
    pub name: String,
    pub omit_empty: bool,
}

impl ParsedTag {
    /// Returns `true` if the annotation asks for the field to be skipped.
    #[must_use]
    pub fn is_skip(&self) -> bool {
        self.name == SKIP
    }
}

/// Parses a raw annotation string.
///
/// # Examples
///
/// ```rust
/// use serde_human::tag::parse_tag;
///
/// let tag = parse_tag("foo,omitempty").unwrap();
/// assert_eq!(tag.name, "foo");
/// assert!(tag.omit_empty);
///
/// let tag = parse_tag("-").unwrap();
/// assert!(tag.is_skip());
/// assert!(!tag.omit_empty);
///
/// assert!(parse_tag("a b").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidTag`] with the unmodified `raw` string when the name
/// contains anything other than letters, digits or underscores.
pub fn parse_tag(raw: &str) -> Result<ParsedTag> {
    if raw == SKIP {
        return Ok(ParsedTag {
            name: SKIP.to_string(),
            omit_empty: false,
        });
    }

    let (name, omit_empty) = match raw.strip_suffix(OMIT_EMPTY_SUFFIX) {
        Some(stripped) => (stripped, true),
        None => (raw, false),
    };

    if !name.chars().all(is_name_char) {
        return Err(Error::invalid_tag(raw));
    }

    Ok(ParsedTag {
        name: name.to_string(),
        omit_empty,
    })
}

fn is_name_char(c: char) -> bool {
    c == '_' || c.is_ascii_digit() || (c.is_alphabetic() && !c.is_numeric())
}

/// Resolves the display name and omit-empty flag of a field.
///
/// The annotation stored under `tag_name` is parsed (an absent annotation is
/// treated as empty) and an empty name is replaced by the field identifier.
///
/// # Errors
///
/// Propagates [`Error::InvalidTag`] from [`parse_tag`].
pub fn tag_for_field(field: &Field, tag_name: &str) -> Result<ParsedTag> {
    let raw = field.annotation(tag_name).unwrap_or("");
    let mut parsed = parse_tag(raw)?;
    if parsed.name.is_empty() {
        parsed.name = field.name().to_string();
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_parse_plain_name() {
        let tag = parse_tag("test").unwrap();
        assert_eq!(tag.name, "test");
        assert!(!tag.omit_empty);
    }

    #[test]
    fn test_parse_omit_empty() {
        let tag = parse_tag("foo,omitempty").unwrap();
        assert_eq!(tag.name, "foo");
        assert!(tag.omit_empty);

        let tag = parse_tag(",omitempty").unwrap();
        assert_eq!(tag.name, "");
        assert!(tag.omit_empty);
    }

    #[test]
    fn test_parse_skip() {
        let tag = parse_tag("-").unwrap();
        assert_eq!(tag.name, "-");
        assert!(!tag.omit_empty);
        assert!(tag.is_skip());
    }

    #[test]
    fn test_parse_empty() {
        let tag = parse_tag("").unwrap();
        assert_eq!(tag.name, "");
        assert!(!tag.omit_empty);
    }

    #[test]
    fn test_parse_unicode_letters_and_digits() {
        let tag = parse_tag("größe_2").unwrap();
        assert_eq!(tag.name, "größe_2");
    }

    #[test]
    fn test_parse_rejects_non_decimal_numerics() {
        for raw in ["x²", "Ⅻ", "½", "count_①,omitempty"] {
            let err = parse_tag(raw).unwrap_err();
            assert_eq!(err.as_invalid_tag(), Some(raw));
        }
        assert!(parse_tag("v1_2").is_ok());
    }

    #[test]
    fn test_parse_error_keeps_raw_tag() {
        let err = parse_tag("&").unwrap_err();
        assert_eq!(err.as_invalid_tag(), Some("&"));

        let err = parse_tag("a b,omitempty").unwrap_err();
        assert_eq!(err.as_invalid_tag(), Some("a b,omitempty"));

        // only the exact suffix is stripped
        let err = parse_tag("name,omitEmpty").unwrap_err();
        assert_eq!(err.as_invalid_tag(), Some("name,omitEmpty"));

        assert!(parse_tag("-,omitempty").is_err());
    }

    #[test]
    fn test_tag_for_field_substitutes_identifier() {
        let field = Field::new("Property2", &0.0f64).tag("human", ",omitempty");
        let tag = tag_for_field(&field, "human").unwrap();
        assert_eq!(tag.name, "Property2");
        assert!(tag.omit_empty);

        let field = Field::new("Var1", &Value::from("v1"));
        let tag = tag_for_field(&field, "human").unwrap();
        assert_eq!(tag.name, "Var1");
        assert!(!tag.omit_empty);
    }

    #[test]
    fn test_tag_for_field_uses_configured_key() {
        let field = Field::new("Var2", &2)
            .tag("human", "variable_2")
            .tag("test", "other");
        assert_eq!(tag_for_field(&field, "human").unwrap().name, "variable_2");
        assert_eq!(tag_for_field(&field, "test").unwrap().name, "other");
        assert_eq!(tag_for_field(&field, "json").unwrap().name, "Var2");
    }

    #[test]
    fn test_tag_for_field_error() {
        let field = Field::new("Test", &1).tag("human", "&§/$");
        let err = tag_for_field(&field, "human").unwrap_err();
        assert_eq!(err.as_invalid_tag(), Some("&§/$"));
    }
}
