use serde::{Deserialize, Serialize};

/// One backup source definition, as submitted through the form.
///
/// Field names on the serde side match the keys of the generated YAML, so a
/// rendered document can be read straight back into this type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SourceConfig {
    pub token: String,
    pub user: String,
    pub username: String,
    pub password: String,

    #[serde(rename = "ssh")]
    pub use_ssh: bool,

    #[serde(rename = "sshkey")]
    pub ssh_key: String,

    pub exclude: Vec<String>,
    pub include: Vec<String>,

    #[serde(rename = "excludeorgs")]
    pub exclude_orgs: Vec<String>,

    #[serde(rename = "includeorgs")]
    pub include_orgs: Vec<String>,

    pub wiki: bool,
    pub starred: bool,
    pub filter: SourceFilter,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SourceFilter {
    pub stars: i64,

    #[serde(rename = "lastactivity")]
    pub last_activity: String,

    #[serde(rename = "excludearchived")]
    pub exclude_archived: bool,

    pub languages: Vec<String>,

    #[serde(rename = "excludeforks")]
    pub exclude_forks: bool,
}

/// Top-level shape of the generated backup config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BackupDocument {
    pub github: Vec<SourceConfig>,
}

impl SourceConfig {
    pub fn has_password_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    pub fn filter_entry_count(&self) -> usize {
        self.exclude.len()
            + self.include.len()
            + self.exclude_orgs.len()
            + self.include_orgs.len()
            + self.filter.languages.len()
    }
}
