//! Host configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use iga_infra::HttpConfig;

use crate::cli::GlobalArgs;

const DEFAULT_APP_ORIGIN: &str = "http://localhost:5173";
const DEFAULT_SESSION_FILE: &str = ".iga-session.json";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub http: HttpConfig,
    /// Origin the payment gateway redirects back to.
    pub app_origin: String,
    pub session_file: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            http: HttpConfig::from_env(),
            app_origin: env::var("IGA_APP_ORIGIN").unwrap_or_else(|_| DEFAULT_APP_ORIGIN.to_string()),
            session_file: env::var("IGA_SESSION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE)),
        }
    }

    /// Command-line flags win over the environment.
    pub fn with_overrides(mut self, args: &GlobalArgs) -> Self {
        if let Some(url) = &args.api_url {
            self.http = self.http.with_base_url(url.clone());
        }
        if let Some(secs) = args.timeout_secs {
            self.http = self.http.with_timeout(Duration::from_secs(secs));
        }
        if let Some(origin) = &args.origin {
            self.app_origin = origin.trim_end_matches('/').to_string();
        }
        if let Some(path) = &args.session_file {
            self.session_file = path.clone();
        }
        self
    }
}
