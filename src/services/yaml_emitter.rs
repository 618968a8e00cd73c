use crate::enums::yaml_node::YamlNode;
use crate::errors::{FormError, FormResult};

/// Serializes a [`YamlNode`] tree as YAML text.
///
/// Quoting, escaping and indentation are delegated to `serde-saphyr`, which
/// quotes any string a parser could read back as something else and writes
/// empty collections in flow style (`[]`, `{}`).
pub struct YamlEmitter;

impl YamlEmitter {
    pub fn new() -> Self {
        Self
    }

    pub fn emit(&self, root: &YamlNode) -> FormResult<String> {
        let mut yaml = serde_saphyr::to_string(root)
            .map_err(|e| FormError::serialize_error("YAML", &e.to_string()))?;
        if !yaml.ends_with('\n') {
            yaml.push('\n');
        }
        Ok(yaml)
    }
}

impl Default for YamlEmitter {
    fn default() -> Self {
        Self::new()
    }
}
