use std::path::{Path, PathBuf};
use std::time::Instant;
use crate::config::settings_manager::SettingsManager;
use crate::enums::commands::Commands;
use crate::errors::{FormError, FormResult};
use crate::services::config_reader::ConfigReader;
use crate::structs::config::server_settings::ServerSettings;
use crate::ui::form_server::FormServer;
use crate::ui::template_registry::TemplateRegistry;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> FormResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Serve { config, host, port, output, static_dir, open } => {
                let settings = SettingsManager::load(config.as_deref())?
                    .with_overrides(host, port, output, static_dir, open);
                self.serve_command(settings).await
            }
            Commands::Init { path } => self.init_command(path),
            Commands::Validate { file, json } => self.validate_command(&file, json),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn serve_command(&self, settings: ServerSettings) -> FormResult<()> {
        if let Err(errors) = SettingsManager::validate(&settings) {
            for error in &errors {
                log::error!("❌ {}", error);
            }
            return Err(FormError::config_file_error("settings", &errors.join("; ")));
        }

        let mut server = FormServer::new(&settings, TemplateRegistry::new())?;
        server.start().await?;

        if settings.open_browser {
            let url = settings.browser_url();
            if let Err(e) = webbrowser::open(&url) {
                log::warn!("⚠️ Could not open browser: {}", e);
                log::info!("💡 Open {} manually", url);
            }
        }

        tokio::signal::ctrl_c().await?;

        server.shutdown().await
    }

    fn init_command(&self, path: Option<PathBuf>) -> FormResult<()> {
        log::info!("🚀 Initializing settings...");

        match SettingsManager::create_sample(path.as_deref()) {
            Ok(created) => {
                log::info!("📝 Edit {} to change the listen address or output path.", created.display());
                log::info!("🔧 Run 'backup-config-form serve' to start the form.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create settings: {}", e);
                Err(e)
            }
        }
    }

    fn validate_command(&self, file: &Path, json: bool) -> FormResult<()> {
        log::info!("🔍 Validating {}", file.display());

        let document = ConfigReader::load(file)?;
        if json {
            println!("{}", ConfigReader::to_json(&document)?);
        } else {
            for line in ConfigReader::summarize(&document) {
                println!("{}", line);
            }
        }

        if document.github.is_empty() {
            log::warn!("⚠️ No source entries found in {}", file.display());
        } else {
            log::info!("✅ {} is a valid backup config", file.display());
        }
        Ok(())
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
