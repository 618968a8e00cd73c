use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    #[serde(default = "ConfigHelper::default_host")]
    pub host: String,

    #[serde(default = "ConfigHelper::default_port")]
    pub port: u16,

    /// Where the generated backup config is written.
    #[serde(default = "ConfigHelper::default_output_path")]
    pub output_path: String,

    #[serde(default = "ConfigHelper::default_static_dir")]
    pub static_dir: String,

    #[serde(default = "ConfigHelper::default_open_browser")]
    pub open_browser: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: ConfigHelper::default_host(),
            port: ConfigHelper::default_port(),
            output_path: ConfigHelper::default_output_path(),
            static_dir: ConfigHelper::default_static_dir(),
            open_browser: ConfigHelper::default_open_browser(),
        }
    }
}

impl ServerSettings {
    /// Applies command-line overrides on top of file or default values.
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        output_path: Option<String>,
        static_dir: Option<String>,
        open_browser: bool,
    ) -> Self {
        if let Some(host) = host {
            self.host = host;
        }
        if let Some(port) = port {
            self.port = port;
        }
        if let Some(output_path) = output_path {
            self.output_path = output_path;
        }
        if let Some(static_dir) = static_dir {
            self.static_dir = static_dir;
        }
        self.open_browser = self.open_browser || open_browser;
        self
    }

    pub fn browser_url(&self) -> String {
        let host = if self.host == "0.0.0.0" { "127.0.0.1" } else { self.host.as_str() };
        format!("http://{}:{}/", host, self.port)
    }
}
