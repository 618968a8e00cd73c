use crate::config::constants::{
    DEFAULT_OUTPUT_PATH, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, DEFAULT_STATIC_DIR,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_host() -> String {
        DEFAULT_SERVER_HOST.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_SERVER_PORT
    }

    pub fn default_output_path() -> String {
        DEFAULT_OUTPUT_PATH.to_string()
    }

    pub fn default_static_dir() -> String {
        DEFAULT_STATIC_DIR.to_string()
    }

    pub fn default_open_browser() -> bool {
        false
    }

    /// Shows only the last four characters of a secret.
    pub fn mask_secret(secret: &str) -> String {
        if secret.is_empty() {
            return "(not set)".to_string();
        }
        let visible: String = secret
            .chars()
            .rev()
            .take(4)
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();
        if secret.chars().count() <= 4 {
            "****".to_string()
        } else {
            format!("****{}", visible)
        }
    }
}
