pub use super::value_objects::SchemeCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Domain entity - a mutual fund search hit.
///
/// Only the scheme code is interpreted by the client. The name is shown as the
/// card title and every other attribute is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MutualFund {
    pub scheme_code: SchemeCode,
    #[serde(default)]
    pub scheme_name: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl MutualFund {
    pub fn new(scheme_code: SchemeCode, scheme_name: impl Into<String>) -> Self {
        Self {
            scheme_code,
            scheme_name: scheme_name.into(),
            attributes: Map::new(),
        }
    }

    /// Stable key for list rendering.
    pub fn key(&self) -> &SchemeCode {
        &self.scheme_code
    }

    pub fn display_name(&self) -> String {
        if self.scheme_name.trim().is_empty() {
            format!("Scheme {}", self.scheme_code)
        } else {
            self.scheme_name.clone()
        }
    }

    /// Scalar attributes as label/value pairs, ordered by label.
    ///
    /// Nested objects, arrays and nulls are skipped.
    pub fn display_attributes(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self
            .attributes
            .iter()
            .filter_map(|(label, value)| {
                let text = match value {
                    Value::String(s) if !s.trim().is_empty() => s.clone(),
                    Value::Number(n) => n.to_string(),
                    Value::Bool(b) => b.to_string(),
                    _ => return None,
                };
                Some((label.clone(), text))
            })
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        pairs
    }
}
