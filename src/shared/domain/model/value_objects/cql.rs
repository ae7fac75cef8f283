use std::fmt;

/// Already-escaped CQL text.
///
/// Values of this type are safe to splice into a statement verbatim. User input
/// must go through [`Cql::quoted_name`] or [`Cql::string_literal`] first.
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Cql(String);

impl Cql {
    /// Trusted text such as keywords or a permission already checked against a vocabulary.
    pub fn raw(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Double-quoted identifier; embedded double quotes are doubled.
    pub fn quoted_name(value: &str) -> Self {
        let mut quoted = String::with_capacity(value.len() + 2);
        quoted.push('"');
        quoted.push_str(&value.replace('"', "\"\""));
        quoted.push('"');
        Self(quoted)
    }

    /// Single-quoted string literal; embedded single quotes are doubled.
    pub fn string_literal(value: &str) -> Self {
        let mut quoted = String::with_capacity(value.len() + 2);
        quoted.push('\'');
        quoted.push_str(&value.replace('\'', "''"));
        quoted.push('\'');
        Self(quoted)
    }

    pub fn bool_literal(value: bool) -> Self {
        if value {
            Self::raw("true")
        } else {
            Self::raw("false")
        }
    }

    pub fn int_literal(value: i64) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cql {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Cql> for String {
    fn from(value: Cql) -> Self {
        value.0
    }
}
