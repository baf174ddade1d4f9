pub mod app_config;

// Re-export common types for convenience
pub use app_config::{
    AppConfig, ColorMode, LoggingConfig, RenderConfig, CONFIG_FILE_NAME, CONFIG_PATH_ENV,
};
