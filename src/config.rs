use crate::error::AppError;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub archetypes_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let data_dir = match env::var("VIBES_DATA_DIR") {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            Ok(_) => {
                return Err(AppError::ConfigError(
                    "VIBES_DATA_DIR is set but empty".to_string(),
                ))
            }
            Err(_) => Self::default_data_dir(),
        };

        let archetypes_path = env::var("VIBES_ARCHETYPES")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let log_filter = env::var("VIBES_LOG").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            data_dir,
            archetypes_path,
            log_filter,
        })
    }

    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".vibes_tracker")
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join("store.json")
    }
}
