use std::path::PathBuf;

use clap::ArgAction;
use clap::Parser;

/// Terminal hub with stacked overlay navigation.
#[derive(Debug, Parser)]
#[clap(author, version, name = "gimnasio")]
pub struct Cli {
    /// Read configuration from this file instead of
    /// `$GIMNASIO_HOME/config.toml`.
    #[arg(long = "config", value_name = "PATH")]
    pub config_path: Option<PathBuf>,

    /// Override a configuration value, e.g. `-c overlays.cancel_key=ctrl-w`.
    /// The value is parsed as TOML, falling back to a plain string.
    #[arg(short = 'c', value_name = "key=value", action = ArgAction::Append)]
    pub overrides: Vec<String>,

    /// Open an overlay on start, e.g.
    /// `--open '{"type":"planificacion","codigo":"2025-11-mes-ciencia","tema":"astronomia"}'`.
    #[arg(long = "open", value_name = "JSON")]
    pub open: Option<String>,

    /// Directory for `gimnasio-tui.log` (defaults to `$GIMNASIO_HOME/log`).
    #[arg(long = "log-dir", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}
