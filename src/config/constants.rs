use std::time::Duration;

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 8080;
pub const DEFAULT_OUTPUT_PATH: &str = "config.yaml";
pub const DEFAULT_STATIC_DIR: &str = "static";

pub const SETTINGS_DIR_NAME: &str = "backup-config-form";
pub const SETTINGS_FILE_NAME: &str = "settings.toml";

pub const MAX_FORM_BODY_BYTES: u64 = 64 * 1024;
pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;

pub const SUCCESS_MESSAGE: &str = "Config.yaml generated and saved successfully";

/// Top-level key the backup tool reads source entries from.
pub const SOURCE_LIST_KEY: &str = "github";

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
