mod config_manager;
mod config_serializer;
mod validate;

pub use config_manager::{ConfigContentProvider, ConfigManager, FileContentConfigProvider};
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use validate::Validate;
