use backup_config_form::structs::source_config::{BackupDocument, SourceConfig, SourceFilter};

/// Input from the "token, user, one exclude, wiki, five stars" scenario.
pub fn scenario_a() -> SourceConfig {
    SourceConfig {
        token: "abc123".to_string(),
        user: "octocat".to_string(),
        exclude: vec!["old-repo".to_string()],
        wiki: true,
        filter: SourceFilter {
            stars: 5,
            ..SourceFilter::default()
        },
        ..SourceConfig::default()
    }
}

pub fn fully_populated() -> SourceConfig {
    SourceConfig {
        token: "ghp_secret:with#chars ".to_string(),
        user: "my-org".to_string(),
        username: "octo cat".to_string(),
        password: " p@ss: word #1".to_string(),
        use_ssh: true,
        ssh_key: "/home/octo/.ssh/id_ed25519".to_string(),
        exclude: vec!["legacy".to_string(), "*-archive".to_string()],
        include: vec!["core".to_string()],
        exclude_orgs: vec!["null".to_string()],
        include_orgs: vec!["my-org".to_string(), "42".to_string()],
        wiki: true,
        starred: true,
        filter: SourceFilter {
            stars: 100,
            last_activity: "1y".to_string(),
            exclude_archived: true,
            languages: vec!["Rust".to_string(), "C++".to_string()],
            exclude_forks: true,
        },
    }
}

pub fn parse_document(yaml: &str) -> BackupDocument {
    serde_saphyr::from_str(yaml).expect("rendered YAML should parse")
}

pub fn parse_single(yaml: &str) -> SourceConfig {
    let mut document = parse_document(yaml);
    assert_eq!(document.github.len(), 1, "expected exactly one source entry");
    document.github.remove(0)
}
