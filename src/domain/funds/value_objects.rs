use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};

/// Value Object - unique scheme code of a fund, used as the list key.
///
/// The API sends it either as a JSON number (any sign or fraction) or as a
/// string; both are kept as their text form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deref, Display, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(try_from = "SchemeCodeRepr", into = "String")]
pub struct SchemeCode(String);

impl SchemeCode {
    pub fn new(code: impl Into<String>) -> Result<Self, String> {
        let code = code.into();
        let trimmed = code.trim();
        if trimmed.is_empty() {
            return Err("Scheme code cannot be empty".to_string());
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<u64> for SchemeCode {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<SchemeCode> for String {
    fn from(code: SchemeCode) -> Self {
        code.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SchemeCodeRepr {
    Number(serde_json::Number),
    Text(String),
}

impl TryFrom<SchemeCodeRepr> for SchemeCode {
    type Error = String;

    fn try_from(repr: SchemeCodeRepr) -> Result<Self, Self::Error> {
        match repr {
            SchemeCodeRepr::Number(n) => Ok(Self(n.to_string())),
            SchemeCodeRepr::Text(s) => Self::new(s),
        }
    }
}
