use crate::config::constants::SOURCE_LIST_KEY;
use crate::enums::yaml_node::YamlNode;
use crate::errors::FormResult;
use crate::services::yaml_emitter::YamlEmitter;
use crate::structs::mapping_builder::MappingBuilder;
use crate::structs::source_config::{SourceConfig, SourceFilter};

/// Turns a [`SourceConfig`] into the backup tool's YAML config.
///
/// Keys are always written in the same order. Hostile strings are quoted by
/// the YAML serializer rather than rejected.
pub struct YamlRenderer {
    emitter: YamlEmitter,
}

impl YamlRenderer {
    pub fn new() -> Self {
        Self {
            emitter: YamlEmitter::new(),
        }
    }

    pub fn render(&self, config: &SourceConfig) -> FormResult<String> {
        self.emitter.emit(&Self::build_document(config))
    }

    pub fn build_document(config: &SourceConfig) -> YamlNode {
        MappingBuilder::new()
            .node(SOURCE_LIST_KEY, YamlNode::Sequence(vec![Self::build_source(config)]))
            .build()
    }

    fn build_source(config: &SourceConfig) -> YamlNode {
        MappingBuilder::new()
            .string("token", &config.token)
            .string("user", &config.user)
            .string("username", &config.username)
            .string("password", &config.password)
            .boolean("ssh", config.use_ssh)
            .string("sshkey", &config.ssh_key)
            .strings("exclude", &config.exclude)
            .strings("include", &config.include)
            .strings("excludeorgs", &config.exclude_orgs)
            .strings("includeorgs", &config.include_orgs)
            .boolean("wiki", config.wiki)
            .boolean("starred", config.starred)
            .mapping("filter", Self::build_filter(&config.filter))
            .build()
    }

    fn build_filter(filter: &SourceFilter) -> MappingBuilder {
        MappingBuilder::new()
            .integer("stars", filter.stars)
            .string("lastactivity", &filter.last_activity)
            .boolean("excludearchived", filter.exclude_archived)
            .strings("languages", &filter.languages)
            .boolean("excludeforks", filter.exclude_forks)
    }
}

impl Default for YamlRenderer {
    fn default() -> Self {
        Self::new()
    }
}
