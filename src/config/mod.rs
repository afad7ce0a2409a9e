mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, LoadResult, RealFileSystem,
    parse_config,
};
pub use model::{
    COUNT_PLACEHOLDER, ClassificationConfig, Config, ConsistencyRule, FILES_PLACEHOLDER,
    HeaderConfig, NamingConfig, ScannerConfig, TargetFrameworkConfig,
};
pub use validation::validate_config_semantics;
