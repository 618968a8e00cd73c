use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{SETTINGS_DIR_NAME, SETTINGS_FILE_NAME};
use crate::errors::{FormError, FormResult};
use crate::structs::config::server_settings::ServerSettings;

const SAMPLE_SETTINGS: &str = r#"# Backup Config Form settings

# Address the form server listens on
host = "0.0.0.0"
port = 8080

# Where the generated backup config is written (overwritten on every submission)
output_path = "config.yaml"

# Directory served under /static (stylesheets, images)
static_dir = "static"

# Open the form in the default browser on start
open_browser = false
"#;

pub struct SettingsManager;

impl SettingsManager {

    pub fn default_settings_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    /// Loads settings from `path`, or from the home directory location when no
    /// path is given. A missing default file yields the defaults; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> FormResult<ServerSettings> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(FormError::config_file_error(
                        &path.display().to_string(),
                        "File does not exist",
                    ));
                }
                Self::load_from(path)
            }
            None => match Self::default_settings_path() {
                Some(default_path) if default_path.exists() => Self::load_from(&default_path),
                _ => {
                    log::debug!("No settings file found, using defaults");
                    Ok(ServerSettings::default())
                }
            },
        }
    }

    fn load_from(path: &Path) -> FormResult<ServerSettings> {
        log::info!("📋 Loading settings from: {}", path.display());
        let display = path.display().to_string();
        let content = fs::read_to_string(path)
            .map_err(|e| FormError::config_file_error(&display, &e.to_string()))?;
        Self::parse(&content).map_err(|e| match e {
            FormError::ConfigurationFileError { reason, .. } => FormError::config_file_error(&display, &reason),
            other => other,
        })
    }

    pub fn parse(content: &str) -> FormResult<ServerSettings> {
        Ok(toml::from_str(content)?)
    }

    /// Writes the sample settings file and returns where it was written.
    pub fn create_sample(path: Option<&Path>) -> FormResult<PathBuf> {
        let settings_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_settings_path().ok_or_else(|| {
                FormError::config_file_error("~", "Could not determine the home directory")
            })?,
        };
        let display = settings_path.display().to_string();

        if settings_path.exists() {
            return Err(FormError::config_file_error(&display, "File already exists"));
        }

        if let Some(parent) = settings_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| FormError::config_file_error(&display, &e.to_string()))?;
            }
        }
        fs::write(&settings_path, SAMPLE_SETTINGS)
            .map_err(|e| FormError::config_file_error(&display, &e.to_string()))?;
        log::info!("✅ Created sample settings at: {}", settings_path.display());
        Ok(settings_path)
    }

    pub fn validate(settings: &ServerSettings) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if settings.host.trim().is_empty() {
            errors.push("host must not be empty".to_string());
        }

        if settings.output_path.trim().is_empty() {
            errors.push("output_path must not be empty".to_string());
        } else if Path::new(&settings.output_path).is_dir() {
            errors.push(format!("output_path '{}' is a directory", settings.output_path));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
