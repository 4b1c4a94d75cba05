use crate::kind::Kind;
use crate::rational::{Rational, RationalError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A dynamically-typed, owned unit of data exchanged with native functions.
///
/// Every value owns its contents outright, so `clone()` is the deep copy:
/// the result shares nothing with the original.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Value {
    Integer(i64),
    Double(f64),
    Rational(Rational),
    Bool(bool),
    Text(String),
    List(Vec<Value>),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    #[error("empty literal")]
    Empty,
    #[error(transparent)]
    Rational(#[from] RationalError),
    #[error("unterminated text literal `{0}`")]
    UnterminatedText(String),
}

impl Value {
    // --- Constructors ---

    #[inline]
    pub fn integer(n: i64) -> Self {
        Value::Integer(n)
    }

    #[inline]
    pub fn double(x: f64) -> Self {
        Value::Double(x)
    }

    pub fn rational(numer: i64, denom: i64) -> Result<Self, RationalError> {
        Rational::new(numer, denom).map(Value::Rational)
    }

    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::Bool(b)
    }

    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    #[inline]
    pub fn list(items: Vec<Value>) -> Self {
        Value::List(items)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(message.into())
    }

    // --- Checkers ---

    pub fn kind(&self) -> Kind {
        match self {
            Value::Integer(_) => Kind::Integer,
            Value::Double(_) => Kind::Double,
            Value::Rational(_) => Kind::Rational,
            Value::Bool(_) => Kind::Bool,
            Value::Text(_) => Kind::Text,
            Value::List(_) => Kind::List,
            Value::Error(_) => Kind::Error,
        }
    }

    #[inline]
    pub fn is_numeric(&self) -> bool {
        self.kind().is_numeric()
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    // --- Accessors ---

    #[inline]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    #[inline]
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(x) => Some(*x),
            _ => None,
        }
    }

    #[inline]
    pub fn as_rational(&self) -> Option<Rational> {
        match self {
            Value::Rational(r) => Some(*r),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Numeric value as a double, for any of the numeric subkinds.
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Value::Integer(n) => Some(*n as f64),
            Value::Double(x) => Some(*x),
            Value::Rational(r) => Some(r.to_f64()),
            _ => None,
        }
    }

    /// Parse a single literal as typed on a command line.
    ///
    /// Integers, `p/q` rationals, decimals, `true`/`false`, and text (quoted
    /// or bare) are recognised. A `p/q` whose parts are integers but whose
    /// denominator is zero is an error rather than text.
    pub fn parse_literal(src: &str) -> Result<Value, LiteralError> {
        let s = src.trim();
        if s.is_empty() {
            return Err(LiteralError::Empty);
        }

        if let Some(rest) = s.strip_prefix('"') {
            return rest
                .strip_suffix('"')
                .map(Value::text)
                .ok_or_else(|| LiteralError::UnterminatedText(s.to_string()));
        }

        match s {
            "true" => return Ok(Value::Bool(true)),
            "false" => return Ok(Value::Bool(false)),
            _ => {}
        }

        if let Ok(n) = s.parse::<i64>() {
            return Ok(Value::Integer(n));
        }

        if let Some((n, d)) = s.split_once('/') {
            if let (Ok(n), Ok(d)) = (n.trim().parse::<i64>(), d.trim().parse::<i64>()) {
                return Ok(Value::Rational(Rational::new(n, d)?));
            }
        }

        let looks_decimal = s
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'));
        if looks_decimal {
            if let Ok(x) = s.parse::<f64>() {
                return Ok(Value::Double(x));
            }
        }

        Ok(Value::text(s))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Double(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Rational> for Value {
    fn from(r: Rational) -> Self {
        Value::Rational(r)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Double(x) => write!(f, "{x}"),
            Value::Rational(r) => write!(f, "{r}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Text(s) => write!(f, "\"{s}\""),
            Value::List(items) => {
                f.write_str("{")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("}")
            }
            Value::Error(msg) => write!(f, "error({msg})"),
        }
    }
}
