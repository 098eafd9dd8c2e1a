//! Terminal hub for the gimnasio overlays: a scrollable home screen with
//! content views stacked on top of it.

mod app;
mod app_event;
mod app_event_sender;
mod cli;
mod hub;
mod key_hint;
mod logging;
mod overlay_shell;
mod theme;
mod tui;
mod views;

use gimnasio_config::find_gimnasio_home;
use gimnasio_config::load_config;
use gimnasio_overlay::KeyBinding;
use gimnasio_protocol::OverlayConfig;
use tracing::info;

use crate::app::App;

pub use cli::Cli;

pub async fn run_main(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(cli.config_path.as_deref(), &cli.overrides)?;

    let log_dir = match cli.log_dir {
        Some(dir) => dir,
        None => find_gimnasio_home()?.join("log"),
    };
    let _log_guard = logging::init(&log_dir)?;

    let close_key = config.overlays.cancel_key.parse::<KeyBinding>()?;
    let initial = cli
        .open
        .as_deref()
        .map(OverlayConfig::from_json)
        .transpose()?;
    info!(%close_key, render_receded = config.overlays.render_receded, "starting");

    let mut terminal = tui::init(config.tui.mouse)?;
    let result = async {
        let mut app = App::new(&config, close_key)?;
        if let Some(initial) = initial {
            app.open(initial);
        }
        app.run(&mut terminal).await
    }
    .await;

    first_error(result, tui::restore())
}

/// The app's own error is reported over a failure to restore the terminal.
fn first_error(result: anyhow::Result<()>, restored: std::io::Result<()>) -> anyhow::Result<()> {
    result?;
    restored?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn app_error_is_not_masked_by_restore_error() {
        let restore_failed = || Err(std::io::Error::other("leave alternate screen"));

        let err = first_error(Err(anyhow::anyhow!("event stream closed")), restore_failed())
            .expect_err("app error");
        assert_eq!("event stream closed", err.to_string());

        let err = first_error(Ok(()), restore_failed()).expect_err("restore error");
        assert_eq!("leave alternate screen", err.to_string());

        assert!(first_error(Ok(()), Ok(())).is_ok());
    }
}
