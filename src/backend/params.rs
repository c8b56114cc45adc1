//! Positional values bound to backend statements.

/// A value bound to one `?` placeholder.
#[derive(Clone, Debug, PartialEq)]
pub enum BindValue {
    Null,
    I64(i64),
    Decimal(rust_decimal::Decimal),
    String(String),
}

impl From<i64> for BindValue {
    fn from(n: i64) -> Self {
        BindValue::I64(n)
    }
}

impl From<u64> for BindValue {
    fn from(n: u64) -> Self {
        i64::try_from(n)
            .map(BindValue::I64)
            .unwrap_or_else(|_| BindValue::Decimal(n.into()))
    }
}

impl From<rust_decimal::Decimal> for BindValue {
    fn from(d: rust_decimal::Decimal) -> Self {
        BindValue::Decimal(d)
    }
}

impl From<&str> for BindValue {
    fn from(s: &str) -> Self {
        BindValue::String(s.to_string())
    }
}

impl From<String> for BindValue {
    fn from(s: String) -> Self {
        BindValue::String(s)
    }
}

impl<T: Into<BindValue>> From<Option<T>> for BindValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(BindValue::Null)
    }
}
