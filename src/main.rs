use anyhow::Result;
use tracing::info;

use gambit_cli::Session;

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    info!("gambit starting");
    Session::new().run()?;
    Ok(())
}
