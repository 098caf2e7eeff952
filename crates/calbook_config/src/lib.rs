use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
pub mod models;
pub mod store;
pub use models::*;
pub use store::{ConfigSource, ConfigStore, ConfigStoreError};

#[cfg(test)]
mod models_test;

/// Load the process-level server settings.
///
/// Sources, later ones winning: built-in defaults, an optional settings file
/// (`calbook.toml`/`.yaml`/`.json`, overridable via `CALBOOK_SETTINGS`), and
/// plain environment variables (`PORT`, `HOST`, `DATA_DIR`, `PUBLIC_DIR`).
pub fn load_settings() -> Result<ServerSettings, ConfigError> {
    ensure_dotenv_loaded();

    let settings_file = env::var("CALBOOK_SETTINGS").unwrap_or_else(|_| "calbook".to_string());

    let builder = Config::builder()
        .set_default("host", "0.0.0.0")?
        .set_default("port", 3457)?
        .set_default("data_dir", ".")?
        .set_default("public_dir", "public")?
        .add_source(File::with_name(&settings_file).required(false))
        .add_source(Environment::default());

    builder.build()?.try_deserialize()
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// This function checks if the dotenv file has already been loaded using a
/// `OnceCell`. If not, it attempts to load the dotenv file named by
/// `DOTENV_OVERRIDE`, or by the first command line argument when that starts
/// with ".env", defaulting to a file named ".env".
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = std::env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
