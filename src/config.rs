use crate::error::AppError;
use config::Config;
use serde::{Deserialize, Serialize};
use userlist_source::SourceConfig;
use userlist_web::config::WebConfig;

#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub app_log_level: String,
    #[serde(default = "default_log_level")]
    pub all_log_level: String,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub web: WebConfig,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Reads `settings_path` (optional) and `APP_`-prefixed environment variables,
    /// e.g. `APP_SOURCE__BASE_URL`.
    pub fn parse_config(settings_path: &str) -> Result<AppConfig, AppError> {
        let settings = Config::builder()
            .add_source(config::File::with_name(settings_path).required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .build()?;

        let config = settings.try_deserialize::<AppConfig>()?;

        Ok(config)
    }

    /// Filter directive: `app_log_level` for this workspace, `all_log_level` for dependencies.
    pub fn log_filter(&self) -> String {
        format!(
            "userlist={app},userlist_core={app},userlist_source={app},userlist_web={app},actix_web={app},{all}",
            app = self.app_log_level,
            all = self.all_log_level
        )
    }
}
