use clap::Parser;
use gimnasio_tui::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    gimnasio_tui::run_main(cli).await
}
