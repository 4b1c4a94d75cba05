use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime type tag carried by every [`Value`](crate::Value), and the
/// declared type of a native-function parameter.
///
/// `Numerical` is a meta-kind: no value ever has it. It only appears in
/// parameter declarations, where it stands for "any numeric subkind" and
/// leaves the choice of representation to the entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Integer,
    Double,
    Rational,
    Bool,
    Text,
    List,
    Numerical,
    Error,
}

impl Kind {
    pub const NUMERIC_SUBKINDS: [Kind; 3] = [Kind::Integer, Kind::Double, Kind::Rational];

    /// True for the concrete numeric subkinds. The `Numerical` meta-kind is
    /// not itself a value kind and returns false.
    #[inline]
    pub fn is_numeric(self) -> bool {
        matches!(self, Kind::Integer | Kind::Double | Kind::Rational)
    }

    #[inline]
    pub fn is_meta(self) -> bool {
        self == Kind::Numerical
    }

    /// Whether a parameter declared with `self` can hold a value of kind
    /// `actual`. No conversion happens; this is a tag check only.
    pub fn accepts(self, actual: Kind) -> bool {
        match self {
            Kind::Numerical => actual.is_numeric(),
            declared => declared == actual,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Kind::Integer => "integer",
            Kind::Double => "double",
            Kind::Rational => "rational",
            Kind::Bool => "bool",
            Kind::Text => "text",
            Kind::List => "list",
            Kind::Numerical => "numerical",
            Kind::Error => "error",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::Kind;

    #[test]
    fn numerical_accepts_every_numeric_subkind() {
        for kind in Kind::NUMERIC_SUBKINDS {
            assert!(Kind::Numerical.accepts(kind), "{kind} should be accepted");
        }
        assert!(!Kind::Numerical.accepts(Kind::Text));
        assert!(!Kind::Numerical.accepts(Kind::Numerical));
    }

    #[test]
    fn concrete_kinds_accept_only_themselves() {
        assert!(Kind::Double.accepts(Kind::Double));
        assert!(!Kind::Double.accepts(Kind::Integer));
        assert!(!Kind::Error.accepts(Kind::Bool));
    }

    #[test]
    fn meta_kind_is_not_numeric() {
        assert!(!Kind::Numerical.is_numeric());
        assert!(Kind::Numerical.is_meta());
        assert!(Kind::Rational.is_numeric());
    }
}
