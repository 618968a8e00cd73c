use crate::enums::yaml_node::YamlNode;

pub struct MappingBuilder {
    entries: Vec<(String, YamlNode)>,
}

impl MappingBuilder {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn string(self, key: &str, value: &str) -> Self {
        self.node(key, YamlNode::string(value))
    }

    pub fn boolean(self, key: &str, value: bool) -> Self {
        self.node(key, YamlNode::boolean(value))
    }

    pub fn integer(self, key: &str, value: i64) -> Self {
        self.node(key, YamlNode::integer(value))
    }

    pub fn strings(self, key: &str, values: &[String]) -> Self {
        self.node(key, YamlNode::strings(values))
    }

    pub fn mapping(self, key: &str, nested: MappingBuilder) -> Self {
        self.node(key, nested.build())
    }

    pub fn node(mut self, key: &str, node: YamlNode) -> Self {
        self.entries.push((key.to_string(), node));
        self
    }

    pub fn build(self) -> YamlNode {
        YamlNode::Mapping(self.entries)
    }
}

impl Default for MappingBuilder {
    fn default() -> Self {
        Self::new()
    }
}
