use crate::errors::{FormError, FormResult};
use crate::structs::source_config::{SourceConfig, SourceFilter};

/// Decoded form body: field name/value pairs in submission order.
pub type FormFields = Vec<(String, String)>;

/// Coerces submitted form fields into a [`SourceConfig`].
///
/// Missing fields become zero values. Values that cannot be coerced
/// (non-numeric star counts, unknown boolean text) are bind errors.
pub struct FormExtractor;

impl FormExtractor {
    pub fn decode(body: &[u8]) -> FormResult<FormFields> {
        Ok(serde_urlencoded::from_bytes::<FormFields>(body)?)
    }

    pub fn extract_from_body(body: &[u8]) -> FormResult<SourceConfig> {
        let fields = Self::decode(body)?;
        Self::extract(&fields)
    }

    pub fn extract(fields: &[(String, String)]) -> FormResult<SourceConfig> {
        let form = FieldLookup { fields };

        Ok(SourceConfig {
            token: form.text("github-token"),
            user: form.text("user"),
            username: form.text("username"),
            password: form.text("password"),
            use_ssh: form.flag("ssh")?,
            ssh_key: form.text("sshkey"),
            exclude: form.list("exclude"),
            include: form.list("include"),
            exclude_orgs: form.list("excludeorgs"),
            include_orgs: form.list("includeorgs"),
            wiki: form.flag("wiki")?,
            starred: form.flag("starred")?,
            filter: SourceFilter {
                stars: form.integer("filter.stars")?,
                last_activity: form.text("filter.lastactivity"),
                exclude_archived: form.flag("filter.excludearchived")?,
                languages: form.list("filter.languages"),
                exclude_forks: form.flag("filter.excludeforks")?,
            },
        })
    }
}

struct FieldLookup<'a> {
    fields: &'a [(String, String)],
}

impl FieldLookup<'_> {
    fn first(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    fn text(&self, name: &str) -> String {
        self.first(name).unwrap_or_default().to_string()
    }

    /// Collects `name[]` and bare `name` entries, keeping submission order.
    /// Rows submitted with no text at all are unused inputs and are skipped.
    /// Any other value, whitespace included, is kept verbatim.
    fn list(&self, name: &str) -> Vec<String> {
        let bracketed = format!("{}[]", name);
        self.fields
            .iter()
            .filter(|(key, _)| key == name || *key == bracketed)
            .filter(|(_, value)| !value.is_empty())
            .map(|(_, value)| value.clone())
            .collect()
    }

    fn flag(&self, name: &str) -> FormResult<bool> {
        match self.first(name) {
            None => Ok(false),
            Some(value) => parse_flag(value)
                .ok_or_else(|| FormError::bind_error(name, value, "expected a boolean (true/false, on/off)")),
        }
    }

    fn integer(&self, name: &str) -> FormResult<i64> {
        match self.first(name).map(str::trim) {
            None | Some("") => Ok(0),
            Some(value) => value
                .parse::<i64>()
                .map_err(|e| FormError::bind_error(name, value, &e.to_string())),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "1" | "yes" => Some(true),
        "false" | "off" | "0" | "no" | "" => Some(false),
        _ => None,
    }
}
