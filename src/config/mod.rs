//! カタログ読み込みの設定

mod loader;
mod types;

pub use loader::load_from_workspace;
pub use types::{
    CatalogFilesConfig,
    CatalogSettings,
    ConfigError,
    ValidationError,
};
