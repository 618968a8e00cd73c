use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

/// Leaf value of a YAML document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YamlScalar {
    Str(String),
    Bool(bool),
    Int(i64),
}

/// In-memory YAML document tree. Mapping entries keep insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YamlNode {
    Scalar(YamlScalar),
    Sequence(Vec<YamlNode>),
    Mapping(Vec<(String, YamlNode)>),
}

impl YamlNode {
    pub fn string(value: &str) -> Self {
        Self::Scalar(YamlScalar::Str(value.to_string()))
    }

    pub fn boolean(value: bool) -> Self {
        Self::Scalar(YamlScalar::Bool(value))
    }

    pub fn integer(value: i64) -> Self {
        Self::Scalar(YamlScalar::Int(value))
    }

    pub fn strings(values: &[String]) -> Self {
        Self::Sequence(values.iter().map(|v| Self::string(v)).collect())
    }
}

impl Serialize for YamlNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Scalar(YamlScalar::Str(value)) => serializer.serialize_str(value),
            Self::Scalar(YamlScalar::Bool(value)) => serializer.serialize_bool(*value),
            Self::Scalar(YamlScalar::Int(value)) => serializer.serialize_i64(*value),
            Self::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Mapping(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}
