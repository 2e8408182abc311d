use std::fmt;

use chrono::{DateTime, Utc};

/// Token text that denotes the null value inside an expression.
pub const NULL_LITERAL: &str = "NULL";

/// Format used to render datetimes without a sub-second part.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format used to render datetimes that carry microseconds.
pub const DATETIME_MICROS_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Represents a runtime value in the evaluator.
///
/// Atoms enter the stack as strings (or `Null` for the `NULL` literal);
/// operators and functions may produce booleans and datetimes. Every callable
/// matches on these variants to decide whether it accepts its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// The absence of a value.
    Null,
    /// A string, including numbers that have not been interpreted yet.
    String(String),
    /// A boolean produced by comparison or logical operators.
    Bool(bool),
    /// A point in time in UTC.
    DateTime(DateTime<Utc>),
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Self::DateTime(v)
    }
}

impl Value {
    /// Converts the text of an atom token into a value.
    ///
    /// # Example
    /// ```
    /// use strexpr::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from_atom("NULL"), Value::Null);
    /// assert_eq!(Value::from_atom("null"), Value::from("null"));
    /// ```
    #[must_use]
    pub fn from_atom(text: &str) -> Self {
        if text == NULL_LITERAL {
            Self::Null
        } else {
            Self::String(text.to_string())
        }
    }

    /// Converts the final value of an evaluation into its public form.
    ///
    /// `Null` and the empty string both become `None`.
    ///
    /// # Example
    /// ```
    /// use strexpr::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from("").into_result(), None);
    /// assert_eq!(Value::Bool(false).into_result(), Some("False".to_string()));
    /// ```
    #[must_use]
    pub fn into_result(self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::String(s) if s.is_empty() => None,
            Self::String(s) => Some(s),
            other => Some(other.to_string()),
        }
    }

    /// Returns `true` for `Value::Null` and the empty string.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Null => true,
            Self::String(s) => s.is_empty(),
            Self::Bool(_) | Self::DateTime(_) => false,
        }
    }

    /// Returns `true` for `Value::Null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the boolean, if this is one.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the string slice, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the datetime, if this is one.
    #[must_use]
    pub const fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::DateTime(d) => Some(d),
            _ => None,
        }
    }

    /// Short name of the variant, used in trace output.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::String(_) => "string",
            Self::Bool(_) => "bool",
            Self::DateTime(_) => "datetime",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::String(s) => write!(f, "{s}"),
            Self::Bool(true) => write!(f, "True"),
            Self::Bool(false) => write!(f, "False"),
            Self::DateTime(d) => {
                let format = if d.timestamp_subsec_micros() == 0 {
                    DATETIME_FORMAT
                } else {
                    DATETIME_MICROS_FORMAT
                };
                write!(f, "{}", d.format(format))
            },
        }
    }
}
