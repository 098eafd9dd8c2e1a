//! Configuration for the gimnasio terminal host.
//!
//! Values come from `config.toml` in the gimnasio home directory, with
//! `-c key=value` command-line overrides layered on top.

mod error;
mod home;
mod overrides;
mod types;

use std::path::Path;

pub use error::ConfigError;
pub use home::find_gimnasio_home;
pub use overrides::apply_overrides;
pub use overrides::parse_override;
pub use types::GimnasioConfig;
pub use types::OverlaysConfig;
pub use types::TuiConfig;

pub const CONFIG_TOML_FILE: &str = "config.toml";

/// Load `path` (or `$GIMNASIO_HOME/config.toml` when `None`) and apply the
/// raw `key=value` overrides. A missing file yields the defaults.
pub fn load_config(
    path: Option<&Path>,
    overrides: &[String],
) -> Result<GimnasioConfig, ConfigError> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => find_gimnasio_home()
            .map_err(ConfigError::HomeNotFound)?
            .join(CONFIG_TOML_FILE),
    };

    let mut table = match std::fs::read_to_string(&path) {
        Ok(contents) => toml::from_str::<toml::Table>(&contents).map_err(|source| {
            ConfigError::Parse {
                path: path.clone(),
                source,
            }
        })?,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            toml::Table::new()
        }
        Err(source) => return Err(ConfigError::Io { path, source }),
    };

    apply_overrides(&mut table, overrides)?;
    toml::Value::Table(table)
        .try_into()
        .map_err(ConfigError::Invalid)
}
