use std::collections::BTreeMap;

/// Fields of a record argument
pub type Record = BTreeMap<String, Arg>;

/// A dynamically typed argument received at the host boundary
///
/// Hosts (scripting runtimes, IPC layers, the CLI shell) hand over untyped
/// values; the validator turns them into typed requests.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Bytes(Vec<u8>),
    Record(Record),
}

impl Arg {
    /// Build a record from `(field, value)` pairs
    pub fn record<K, I>(fields: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Arg)>,
    {
        Arg::Record(fields.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Arg::Record(fields) => Some(fields),
            _ => None,
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Str(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Str(value)
    }
}

impl From<Vec<u8>> for Arg {
    fn from(value: Vec<u8>) -> Self {
        Arg::Bytes(value)
    }
}

impl From<&[u8]> for Arg {
    fn from(value: &[u8]) -> Self {
        Arg::Bytes(value.to_vec())
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Number(value)
    }
}
