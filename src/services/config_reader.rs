use std::fs;
use std::path::Path;
use crate::config::constants::SOURCE_LIST_KEY;
use crate::errors::{FormError, FormResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::structs::source_config::BackupDocument;

/// Reads generated backup configs back into typed form.
pub struct ConfigReader;

impl ConfigReader {
    pub fn parse(content: &str) -> FormResult<BackupDocument> {
        serde_saphyr::from_str(content).map_err(|e| FormError::parse_error("YAML", &e.to_string()))
    }

    pub fn load(path: &Path) -> FormResult<BackupDocument> {
        let content = fs::read_to_string(path)
            .map_err(|e| FormError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        Self::parse(&content)
    }

    pub fn to_json(document: &BackupDocument) -> FormResult<String> {
        serde_json::to_string_pretty(document).map_err(|e| FormError::parse_error("JSON", &e.to_string()))
    }

    /// Human-readable overview of a document. Secrets are masked.
    pub fn summarize(document: &BackupDocument) -> Vec<String> {
        let mut lines = vec![format!("{} entries under '{}'", document.github.len(), SOURCE_LIST_KEY)];

        for (i, source) in document.github.iter().enumerate() {
            lines.push(format!("{}. user: {}", i + 1, if source.user.is_empty() { "(not set)" } else { source.user.as_str() }));
            lines.push(format!("   token: {}", ConfigHelper::mask_secret(&source.token)));
            if source.has_password_credentials() {
                lines.push(format!(
                    "   username: {} / password: {}",
                    source.username,
                    ConfigHelper::mask_secret(&source.password)
                ));
            }
            lines.push(format!("   ssh: {}", source.use_ssh));
            lines.push(format!(
                "   exclude: {}, include: {}, excludeorgs: {}, includeorgs: {}",
                source.exclude.len(),
                source.include.len(),
                source.exclude_orgs.len(),
                source.include_orgs.len()
            ));
            lines.push(format!("   wiki: {}, starred: {}", source.wiki, source.starred));
            lines.push(format!(
                "   filter: stars >= {}, languages: [{}], excludearchived: {}, excludeforks: {}",
                source.filter.stars,
                source.filter.languages.join(", "),
                source.filter.exclude_archived,
                source.filter.exclude_forks
            ));
        }

        lines
    }
}
